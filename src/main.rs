use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use partilha_gateways::tmdb::Tmdb;

mod config;

#[derive(Debug, Parser)]
#[command(version, about = "Donations and media watch list backend")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

fn metadata_gateway(cfg: config::Metadata) -> Tmdb {
    let config::Metadata {
        api_base_url,
        api_key,
        language,
        timeout,
    } = cfg;
    let api_key = api_key.unwrap_or_else(|| {
        log::warn!("No metadata API key found");
        String::new()
    });
    log::info!("Use metadata API at {api_base_url}");
    Tmdb {
        api_base_url,
        api_key,
        language,
        timeout,
    }
}

fn web_cfg(cfg: config::Auth) -> Result<partilha_webserver::Cfg> {
    let config::Auth {
        jwt_secret,
        access_token_ttl,
        refresh_token_ttl,
    } = cfg;
    Ok(partilha_webserver::Cfg {
        jwt_secret,
        access_token_ttl: access_token_ttl.try_into()?,
        refresh_token_ttl: refresh_token_ttl.try_into()?,
    })
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let mut cfg = config::Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    let config::Config {
        db,
        webserver,
        auth,
        metadata,
    } = cfg;

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        db.conn_sqlite,
        db.conn_pool_size
    );
    let connections = partilha_db_sqlite::Connections::init(&db.conn_sqlite, db.conn_pool_size)?;
    partilha_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let enable_cors = args.enable_cors || webserver.enable_cors;
    let web_cfg = web_cfg(auth)?;
    let metadata_gw = Box::new(metadata_gateway(metadata));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(partilha_webserver::run(
        connections,
        enable_cors,
        web_cfg,
        metadata_gw,
    ));
    Ok(())
}
