use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use dalmatia_application::prelude as flows;
use dalmatia_db_sqlite::{run_embedded_database_migrations, Connections};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "dalmatia-events", version, about = "Events and places of Dalmatia")]
pub struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the web server (default)
    Serve,
    /// Create or update places from a GeoJSON feature collection
    ImportPlaces {
        #[arg(value_name = "GEOJSON_FILE")]
        file: PathBuf,
    },
    /// Create a new event category
    AddCategory { name: String },
}

pub fn run(args: Args) -> Result<()> {
    let Args {
        config,
        db_url,
        enable_cors,
        command,
    } = args;

    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if let Some(db_url) = db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if enable_cors {
        cfg.webserver.enable_cors = true;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;

    log::info!("Running embedded database migrations");
    run_embedded_database_migrations(connections.exclusive()?)?;

    match command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let web_cfg = dalmatia_webserver::Cfg {
                jwt_secret: cfg.webserver.jwt_secret,
                token_ttl: time::Duration::try_from(cfg.webserver.token_ttl)?,
            };
            rocket::execute(dalmatia_webserver::run(
                connections,
                cfg.webserver.enable_cors,
                web_cfg,
            ));
        }
        Command::ImportPlaces { file } => {
            let reader = File::open(&file)
                .map(BufReader::new)
                .with_context(|| format!("Unable to open {}", file.display()))?;
            let summary =
                flows::import_places_from_reader(&connections, reader, &cfg.places.counties)?;
            println!(
                "Imported places from {}: {} created, {} updated, {} skipped",
                file.display(),
                summary.created,
                summary.updated,
                summary.skipped
            );
        }
        Command::AddCategory { name } => {
            let category = flows::create_category(&connections, &name)?;
            println!("Created category '{}' ({})", category.name, category.id);
        }
    }
    Ok(())
}
