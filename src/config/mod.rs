use anyhow::Result;
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "partilha.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_JWT_SECRET: &str = "JWT_SECRET";
const ENV_NAME_METADATA_API_KEY: &str = "METADATA_API_KEY";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub auth: Auth,
    pub metadata: Metadata,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::from(raw_config);
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            self.db.conn_sqlite = db_url;
        }
        if let Ok(secret) = env::var(ENV_NAME_JWT_SECRET) {
            self.auth.jwt_secret = Some(secret);
        }
        if let Ok(api_key) = env::var(ENV_NAME_METADATA_API_KEY) {
            self.metadata.api_key = Some(api_key);
        }
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Auth {
    pub jwt_secret: Option<String>,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
}

pub struct Metadata {
    pub api_base_url: String,
    pub api_key: Option<String>,
    pub language: String,
    pub timeout: Duration,
}

impl From<raw::Config> for Config {
    fn from(from: raw::Config) -> Self {
        let raw::Config {
            db,
            webserver,
            auth,
            metadata,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        let raw::Auth {
            jwt_secret,
            access_token_ttl,
            refresh_token_ttl,
        } = auth.unwrap_or_default();
        let auth = Auth {
            jwt_secret: jwt_secret.filter(|s| !s.trim().is_empty()),
            access_token_ttl,
            refresh_token_ttl,
        };

        let raw::Metadata {
            api_base_url,
            api_key,
            language,
            timeout,
        } = metadata.unwrap_or_default();
        let metadata = Metadata {
            api_base_url,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            language,
            timeout,
        };

        Self {
            db,
            webserver,
            auth,
            metadata,
        }
    }
}
