use anyhow::Result as Fallible;
use rocket::{config::Config as RocketCfg, Rocket, Route};
use time::Duration;

use crate::core::{gateways::metadata::MetadataGateway, usecases};

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;


#[derive(Debug, Clone)]
pub struct Cfg {
    /// Random if missing
    pub jwt_secret: Option<String>,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) struct Gateways {
    metadata: Box<dyn MetadataGateway + Send + Sync>,
}

fn delete_expired_refresh_tokens(db: &sqlite::Connections) -> Fallible<()> {
    usecases::delete_expired_refresh_tokens(&db.exclusive()?)?;
    Ok(())
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;
    let Gateways { metadata } = gateways;

    info!("Deleting expired refresh tokens...");
    if let Err(err) = delete_expired_refresh_tokens(&db) {
        warn!("Failed to delete expired refresh tokens: {err}");
    }
    let jwt_state = jwt::JwtState::new(cfg.jwt_secret.as_deref(), cfg.access_token_ttl);

    info!("Initialization finished");
    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };
    let metadata = guards::Metadata::from(metadata);
    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(metadata)
        .manage(cfg);
    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    metadata: Box<dyn MetadataGateway + Send + Sync>,
) {
    let mounts = mounts();
    let options = InstanceOptions {
        mounts,
        rocket_cfg: None,
        cfg,
    };
    let gateways = Gateways { metadata };
    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
