use tracing_subscriber::EnvFilter;

use vcube::server::{self, config::Config, model::app::AppState, notify::ChangeNotifier, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();
    let notifier = ChangeNotifier::new();

    tracing::info!("Starting server");

    let bind_addr = format!("{}:{}", config.bind_address, config.port);
    let router = server::router::routes().with_state(AppState {
        db,
        notifier,
        config,
    });

    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, router).await.unwrap();
}
