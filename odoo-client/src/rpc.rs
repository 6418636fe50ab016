// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: MPL-2.0

//! JSON-RPC envelopes as spoken by Odoo's `/jsonrpc` endpoint.

use serde_json::Value;

use crate::error::RemoteError;

pub const JSONRPC_VERSION: &str = "2.0";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Params {
    pub service: String,
    pub method: String,
    pub args: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Request {
    pub jsonrpc: String,
    pub method: String,
    pub params: Params,
    pub id: u64,
}

impl Request {
    /// Envelope for `service.method(*args)`. The outer method is always `call`.
    pub fn call(id: u64, service: &str, method: &str, args: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: "call".to_string(),
            params: Params {
                service: service.to_string(),
                method: method.to_string(),
                args,
            },
            id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct Response {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
}

impl Response {
    /// Split into the `result` value or the remote error. A response carrying
    /// an `error` is a failure even if it also has a `result`.
    pub fn into_result(self) -> Result<Option<Value>, RemoteError> {
        match self.error {
            Some(error) => Err(RemoteError(error)),
            None => Ok(self.result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_wire_format() {
        let request = Request::call(
            1,
            "common",
            "login",
            vec![json!("db"), json!("admin"), json!("pw")],
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "method": "call",
                "params": {
                    "service": "common",
                    "method": "login",
                    "args": ["db", "admin", "pw"],
                },
                "id": 1,
            })
        );
    }

    #[test]
    fn request_survives_reparse() {
        let request = Request::call(
            3,
            "object",
            "execute_kw",
            vec![
                json!("db"),
                json!(7),
                json!("pw"),
                json!("product.product"),
                json!("read"),
                json!([[1, 2], ["name", "barcode"]]),
            ],
        );
        let text = serde_json::to_string(&request).unwrap();
        let parsed: Request = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.params, request.params);
    }

    #[test]
    fn error_wins_over_result() {
        let response: Response = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 2,
            "result": [1],
            "error": {"code": 200, "message": "Odoo Server Error"},
        }))
        .unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.message(), Some("Odoo Server Error"));
    }

    #[test]
    fn bare_result_is_accepted() {
        let response: Response = serde_json::from_str(r#"{"result": 7}"#).unwrap();
        assert_eq!(response.into_result().unwrap(), Some(json!(7)));
    }
}
