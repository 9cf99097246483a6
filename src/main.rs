use actix_cors::Cors;
use actix_web::{App, HttpServer};
use anyhow::Context;
use ratedesk::config::{Config, LogFormat};
use ratedesk::middleware::RequestId;
use ratedesk::AppState;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("ratedesk={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

fn cors(allowed_origin: Option<&str>) -> Cors {
    match allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
            .allow_any_header()
            .expose_headers(vec!["x-request-id"])
            .max_age(3600),
        None => Cors::default(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting Ratedesk");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Rates backend: {}", config.backend.base_url);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let state = AppState::new(&config.backend).context("Failed to create backend client")?;
    let allowed_origin = config.server.cors_allowed_origin.clone();

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(cors(allowed_origin.as_deref()))
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(|cfg| state.configure(cfg))
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
