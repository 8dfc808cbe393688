#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use dalmatia_db_sqlite::Connections;

mod adapters;
mod web;

pub use web::Cfg;

pub async fn run(connections: Connections, enable_cors: bool, cfg: Cfg) {
    web::run(connections, enable_cors, cfg).await;
}
