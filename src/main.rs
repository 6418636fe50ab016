// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

use odoo_client::{OdooClient, OdooConf};
use std::{io, process};

fn main() {
    env_logger::init();

    // A `.env` file is optional; variables already set take precedence
    if let Err(err) = dotenv::dotenv() {
        log::debug!("not loading .env: {}", err);
    }

    let conf = OdooConf::from_env().unwrap_or_else(|err| {
        eprintln!("odoo-products: {}", err);
        process::exit(1);
    });
    log::debug!("{:?}", conf);

    let res = OdooClient::new(&conf)
        .map_err(anyhow::Error::from)
        .and_then(|client| odoo_products::run(&client, &mut io::stdout().lock()));
    if let Err(err) = res {
        println!("Exception: {}", err);
    }
}
