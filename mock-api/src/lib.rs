pub mod routes;
pub mod store;
pub mod telemetry;

use actix_cors::Cors;
use actix_web::dev::{Server, Service, ServiceRequest};
use actix_web::http::header;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use payloads::{Role, User, UserId};
use std::net::TcpListener;

use crate::store::{MockStore, RecordedRequest};

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@cowork.test";
pub const DEFAULT_ADMIN_PASSWORD: &str = "Admin@123";

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(config: &mut Config, store: MockStore) -> std::io::Result<Server> {
    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        let cors = if allowed_origins.iter().any(|o| o == "*") {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
        } else {
            allowed_origins.iter().fold(
                Cors::default().allow_any_method().allow_any_header(),
                |cors, origin| cors.allowed_origin(origin),
            )
        };

        let recorder = store.clone();
        App::new()
            .wrap_fn(move |req, srv| {
                recorder.record(record_request(&req));
                srv.call(req)
            })
            .wrap(cors)
            .service(routes::api_services())
            .app_data(web::Data::new(store.clone()))
            .app_data(routes::json_config())
            .app_data(routes::query_config())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

fn record_request(req: &ServiceRequest) -> RecordedRequest {
    RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        query: req.query_string().to_string(),
        bearer: req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::to_string),
    }
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    pub admin_email: String,
    pub admin_password: String,
    /// List of allowed CORS origins. Use "*" to allow any origin
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            ip: var("IP_ADDRESS").context("IP_ADDRESS is not set")?,
            port: var("PORT")
                .context("PORT is not set")?
                .parse()
                .context("PORT is not a valid port number")?,
            admin_email: var("ADMIN_EMAIL")
                .unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string()),
            admin_password: var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string()),
            allowed_origins,
        })
    }

    /// A fresh store whose only account is the configured admin.
    pub fn store(&self) -> MockStore {
        MockStore::new(
            User {
                id: UserId::from("admin"),
                email: self.admin_email.clone(),
                name: "Admin User".into(),
                role: Role::SuperAdmin,
            },
            self.admin_password.clone(),
        )
    }
}
