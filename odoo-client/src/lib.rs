// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: MPL-2.0

//! Blocking client for the handful of Odoo external API calls needed to list
//! products: `common.login`, then `object.execute_kw` for `search` and `read`.
//!
//! Odoo authenticates every `execute_kw` call with the uid *and* the plaintext
//! password, so the password is sent with each request.

use reqwest::blocking::Client;
use serde_json::{json, Value};

mod conf;
pub use conf::*;
mod error;
pub use error::*;
mod product;
pub use product::*;
pub mod rpc;

use rpc::{Request, Response};

const LOGIN_ID: u64 = 1;
const SEARCH_ID: u64 = 2;
const READ_ID: u64 = 3;

pub struct OdooClient<'a> {
    client: Client,
    conf: &'a OdooConf,
    endpoint: String,
}

impl<'a> OdooClient<'a> {
    pub fn new(conf: &'a OdooConf) -> Result<Self, Error> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, conf))
    }

    pub fn with_client(client: Client, conf: &'a OdooConf) -> Self {
        Self {
            client,
            endpoint: conf.endpoint_url(),
            conf,
        }
    }

    pub fn conf(&self) -> &OdooConf {
        self.conf
    }

    /// POST one envelope to `/jsonrpc` and parse the reply envelope.
    pub fn send(&self, request: &Request) -> Result<Response, Error> {
        log::debug!(
            "{}.{} (id {}) -> {}",
            request.params.service,
            request.params.method,
            request.id,
            self.endpoint
        );

        let res = self.client.post(&self.endpoint).json(request).send()?;
        let status = res.status();
        log::debug!("id {}: HTTP {}", request.id, status);
        if !status.is_success() {
            return Err(Error::Status {
                endpoint: self.endpoint.clone(),
                code: status.as_u16(),
                canonical_reason: status.canonical_reason().map(str::to_string),
            });
        }

        let body = res.bytes()?;
        let response: Response = serde_json::from_slice(&body)?;
        if let Some(id) = &response.id {
            if id.as_u64() != Some(request.id) {
                log::warn!("response id {} does not match request id {}", id, request.id);
            }
        }
        Ok(response)
    }

    fn call(&self, id: u64, service: &str, method: &str, args: Vec<Value>) -> Result<Value, Error> {
        let response = self.send(&Request::call(id, service, method, args))?;
        response
            .into_result()?
            .ok_or(Error::UnexpectedResult("present"))
    }

    fn execute_kw(&self, id: u64, uid: i64, method: &str, args: Value) -> Result<Value, Error> {
        let conf = self.conf;
        self.call(
            id,
            "object",
            "execute_kw",
            vec![
                json!(conf.db),
                json!(uid),
                json!(conf.password),
                json!(MODEL),
                json!(method),
                args,
            ],
        )
    }

    /// Returns the uid of the configured user. Odoo answers `false` rather
    /// than an error for bad credentials, which surfaces as
    /// `Error::UnexpectedResult`.
    pub fn login(&self) -> Result<i64, Error> {
        let conf = self.conf;
        let result = self.call(
            LOGIN_ID,
            "common",
            "login",
            vec![json!(conf.db), json!(conf.user), json!(conf.password)],
        )?;
        result.as_i64().ok_or(Error::UnexpectedResult("an integer"))
    }

    /// Ids of every product; the search domain is empty.
    pub fn search_products(&self, uid: i64) -> Result<Vec<i64>, Error> {
        let result = self.execute_kw(SEARCH_ID, uid, "search", json!([[]]))?;
        serde_json::from_value(result).map_err(|_| Error::UnexpectedResult("an array of ids"))
    }

    pub fn read_products(&self, uid: i64, ids: &[i64]) -> Result<Vec<Product>, Error> {
        let result = self.execute_kw(READ_ID, uid, "read", json!([ids, FIELDS]))?;
        serde_json::from_value(result).map_err(|_| Error::UnexpectedResult("an array of records"))
    }
}
