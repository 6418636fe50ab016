// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

use odoo_client::{Error, OdooClient};
use std::io::{self, Write};

/// Report a failed call. Transport and parse failures get a one-line message,
/// remote errors are dumped as sent by the server, and a result of the wrong
/// shape is only logged.
fn report(out: &mut impl Write, call: &str, err: &Error) -> io::Result<()> {
    match err {
        err if err.is_transport() => writeln!(out, "Connection error: {}", err),
        Error::SerdeJson(err) => writeln!(out, "Invalid response from Odoo: {}", err),
        Error::Remote(err) => {
            writeln!(out, "Odoo returned an error:")?;
            writeln!(out, "{}", err)
        }
        err => {
            log::info!("{}: {}", call, err);
            Ok(())
        }
    }
}

/// Log in, list every product, and print its name and barcode to `out`.
///
/// Each call only runs if the previous one produced a usable result. Failed
/// calls are reported to `out` and end the run early without an error; the
/// returned error is only for failures writing to `out`.
pub fn run(client: &OdooClient, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Connecting to Odoo...")?;
    writeln!(out, "Authenticating with Odoo...")?;

    let uid = match client.login() {
        Ok(uid) => Some(uid),
        Err(err) => {
            report(out, "login", &err)?;
            None
        }
    };
    let uid = match uid {
        Some(uid) if uid > 0 => uid,
        _ => {
            writeln!(out, "Authentication failed.")?;
            return Ok(());
        }
    };
    writeln!(out, "Authentication succeeded. UID: {}", uid)?;

    let ids = match client.search_products(uid) {
        Ok(ids) => ids,
        Err(err) => {
            report(out, "search", &err)?;
            Vec::new()
        }
    };
    if ids.is_empty() {
        writeln!(out, "No products found.")?;
        return Ok(());
    }
    log::debug!("found {} products", ids.len());

    match client.read_products(uid, &ids) {
        Ok(products) => {
            for product in products {
                writeln!(out, "{}", product)?;
            }
        }
        Err(err) => report(out, "read", &err)?,
    }

    Ok(())
}
