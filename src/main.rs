use actix_web::{web, App, HttpServer};
use anyhow::Context;
use lipa_gateway::config::Config;
use lipa_gateway::middleware::{cors, RequestId};
use lipa_gateway::modules;
use lipa_gateway::mpesa::LipaService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lipa_gateway=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting Lipa na M-Pesa gateway");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());
    tracing::info!(
        oauth_url = %config.daraja.oauth_url,
        stk_push_url = %config.daraja.stk_push_url,
        callback_url = %config.daraja.callback_url,
        timeout_secs = config.daraja.timeout_secs,
        "Daraja endpoints configured"
    );

    let service = web::Data::new(
        LipaService::from_config(config.daraja.clone()).context("Failed to create Daraja client")?,
    );

    let allowed_origin = config.server.allowed_origin.clone();
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(cors(&allowed_origin))
            .wrap(RequestId)
            .configure(modules::configure)
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
