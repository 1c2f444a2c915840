#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use partilha_core::gateways::metadata::MetadataGateway;
use partilha_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    metadata_gw: Box<dyn MetadataGateway + Send + Sync>,
) {
    web::run(connections.into(), enable_cors, cfg, metadata_gw).await;
}
