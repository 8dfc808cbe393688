use anyhow::{anyhow, bail, Result};
use dalmatia_application::prelude::CountyMap;
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "dalmatia-events.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_JWT_SECRET: &str = "JWT_SECRET";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub places: Places,
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
                    raw::Config::try_default()?
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        if let Ok(secret) = env::var(ENV_NAME_JWT_SECRET) {
            cfg.webserver.jwt_secret = Some(secret);
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
    pub jwt_secret: Option<String>,
    pub token_ttl: Duration,
}

pub struct Places {
    /// Counties of imported places by name
    pub counties: CountyMap,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            places,
        } = from;
        let defaults = raw::Config::try_default()?;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db
            .or(defaults.db)
            .ok_or_else(|| anyhow!("Missing DB configuration"))?;
        if connection_pool_size == 0 {
            bail!("The connection pool size must not be zero");
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            cors,
            jwt_secret,
            token_ttl,
        } = webserver
            .or(defaults.webserver)
            .ok_or_else(|| anyhow!("Missing web server configuration"))?;
        if token_ttl.is_zero() {
            bail!("The token TTL must not be zero");
        }
        let webserver = WebServer {
            enable_cors: cors,
            jwt_secret: jwt_secret.filter(|secret| !secret.trim().is_empty()),
            token_ttl,
        };

        let raw::Places { counties } = places
            .or(defaults.places)
            .ok_or_else(|| anyhow!("Missing places configuration"))?;
        let places = Places { counties };

        Ok(Self {
            db,
            webserver,
            places,
        })
    }
}
