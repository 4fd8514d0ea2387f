use mock_api::{
    Config, build,
    telemetry::{get_subscriber, init_subscriber},
};

/// Mock admin API server with an empty store.
///
/// Environment variables can be set directly or loaded from a .env file in
/// the project root.
///
/// Required:
/// - IP_ADDRESS: bind address (127.0.0.1 for local, 0.0.0.0 for public)
/// - PORT: server port
///
/// Optional:
/// - ADMIN_EMAIL / ADMIN_PASSWORD: the single staff account
///   (default admin@cowork.test / Admin@123)
/// - ALLOWED_ORIGINS: comma-separated CORS origins, "*" by default
///
/// For a server populated with sample data, run `cargo run -p dev-server`.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber)?;

    let mut config = Config::from_env()?;
    let store = config.store();
    let server = build(&mut config, store)?;
    tracing::info!("Mock API listening on {}:{}", config.ip, config.port);
    server.await?;
    Ok(())
}
