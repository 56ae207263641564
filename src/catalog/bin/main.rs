use std::net::SocketAddr;
use library_catalog::books::repository::Library;
use library_catalog::catalog::controller::router;
use library_catalog::core::controller::AppState;
use library_catalog::core::domain::Configuration;
use library_catalog::gateway::factory::create_lookup;
use library_catalog::utils::logs::setup_tracing;
use tracing::info;

const DEFAULT_LIBRARY_NAME: &str = "API Library";
const DEFAULT_DATA_FILE: &str = "api_library_data.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Configuration::from_env(DEFAULT_LIBRARY_NAME, DEFAULT_DATA_FILE);
    setup_tracing(config.log_json, std::io::stdout);

    let library = Library::load_from_file(&config.data_file, config.library_name.as_str());
    let lookup = create_lookup(&config);
    let addr: SocketAddr = config.bind_addr.parse()?;
    info!(%addr, library = library.name(), lookup = %config.lookup_via, "starting catalog api");

    let app = router(AppState::new(config, library, lookup));
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
