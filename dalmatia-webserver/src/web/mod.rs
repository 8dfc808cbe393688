use dalmatia_application::prelude as flows;
use dalmatia_boundary::Error as JsonErrorResponse;
use dalmatia_db_sqlite::Connections;
use rocket::{
    catch, catchers, config::Config as RocketCfg, http::Status, serde::json::Json, Request,
    Rocket, Route,
};
use time::Duration;

pub mod api;
mod guards;
pub mod jwt;


#[derive(Debug, Clone)]
pub struct Cfg {
    /// Secret for signing access tokens.
    ///
    /// A random secret is generated if none is configured.
    pub jwt_secret: Option<String>,
    pub token_ttl: Duration,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl: Duration::days(7),
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

#[catch(default)]
fn default_catcher(status: Status, _req: &Request) -> (Status, Json<JsonErrorResponse>) {
    let error = JsonErrorResponse {
        http_status: status.code,
        message: status.reason_lossy().to_string(),
    };
    (status, Json(error))
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;
    let Cfg {
        jwt_secret,
        token_ttl,
    } = cfg;

    let jwt_state = match jwt_secret {
        Some(secret) => jwt::JwtState::new(&secret, token_ttl),
        None => {
            warn!("No JWT secret configured: issued tokens become invalid after a restart");
            jwt::JwtState::random(token_ttl)
        }
    };

    match flows::load_places(&db) {
        Ok(places) => info!("{} places available", places.len()),
        Err(err) => warn!("Failed to load places: {err}"),
    }

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .register("/", catchers![default_catcher]);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(db: Connections, enable_cors: bool, cfg: Cfg) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };

    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        let cors = match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => cors,
            Err(err) => {
                error!("Invalid CORS options: {err}");
                return;
            }
        };
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
