use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{collections::HashMap, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("dalmatia-events.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub places: Option<Places>,
}

impl Config {
    pub fn try_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
    pub jwt_secret: Option<String>,
    #[serde(deserialize_with = "deserialize_duration")]
    pub token_ttl: Duration,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Places {
    pub counties: HashMap<String, u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config() {
        let cfg = Config::try_default().unwrap();
        let db = cfg.db.unwrap();
        assert_eq!(10, db.connection_pool_size);
        let webserver = cfg.webserver.unwrap();
        assert!(!webserver.cors);
        assert!(webserver.jwt_secret.is_none());
        assert_eq!(Duration::from_secs(7 * 24 * 60 * 60), webserver.token_ttl);
        let counties = cfg.places.unwrap().counties;
        assert_eq!(4, counties.len());
        assert_eq!(Some(&2), counties.get("Šibensko-Kninska"));
    }
}
