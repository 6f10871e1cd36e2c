use axum::routing::{get, post};
use axum::Router;
use paymentsvc::config::AppConfig;
use paymentsvc::gateways::omise::OmiseGateway;
use paymentsvc::repo::memory::InMemoryPaymentsRepo;
use paymentsvc::service::payment_service::PaymentService;
use paymentsvc::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env()?;

    let gateway = OmiseGateway {
        base_url: cfg.omise_base_url.clone(),
        public_key: cfg.omise_public_key.clone(),
        secret_key: cfg.omise_secret_key.clone(),
        timeout_ms: cfg.gateway_timeout_ms,
        client: reqwest::Client::new(),
    };

    let payment_service = PaymentService {
        gateway: Arc::new(gateway),
        repo: Arc::new(InMemoryPaymentsRepo::new()),
    };

    let state = AppState { payment_service };

    let app = Router::new()
        .route("/", get(paymentsvc::http::handlers::payments::root))
        .route("/health", get(paymentsvc::http::handlers::payments::health))
        .route("/payments", post(paymentsvc::http::handlers::payments::create_payment))
        .route("/payments/:id", get(paymentsvc::http::handlers::payments::get_payment))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
