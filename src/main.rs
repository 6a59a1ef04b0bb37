use navi::server::{config::Config, error::Error, model::app::AppState, router::routes, startup};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing();

    let db = startup::connect_to_database(&config).await?;
    startup::bootstrap_ledger(&db, &config).await?;

    let app = routes().with_state(AppState {
        db,
        seed_dir: config.seed_data_dir.clone(),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_address.as_str()).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
