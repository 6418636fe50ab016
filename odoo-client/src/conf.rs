// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: MPL-2.0

use std::env;

use crate::Error;

pub const URL_VAR: &str = "ODOO_URL";
pub const DB_VAR: &str = "ODOO_DB";
pub const USER_VAR: &str = "ODOO_USER";
pub const PASSWORD_VAR: &str = "ODOO_PASSWORD";

/// Connection settings for an Odoo server. Built once at startup and only
/// borrowed afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct OdooConf {
    pub url: String,
    pub db: String,
    pub user: String,
    pub password: String,
}

impl OdooConf {
    /// Read `ODOO_URL`, `ODOO_DB`, `ODOO_USER` and `ODOO_PASSWORD` from the
    /// process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like `from_env`, with variables resolved through `lookup`. Unset and
    /// empty values are both reported as missing.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, Error>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut var = |name: &'static str| match lookup(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(Error::MissingVar(name)),
        };
        Ok(Self {
            url: var(URL_VAR)?,
            db: var(DB_VAR)?,
            user: var(USER_VAR)?,
            password: var(PASSWORD_VAR)?,
        })
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}/jsonrpc", self.url.trim_end_matches('/'))
    }
}

// Keeps the password out of logs and panic messages
impl std::fmt::Debug for OdooConf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OdooConf")
            .field("url", &self.url)
            .field("db", &self.db)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}
