use std::io;
use library_catalog::books::repository::Library;
use library_catalog::console::menu::ConsoleMenu;
use library_catalog::core::domain::Configuration;
use library_catalog::gateway::factory::create_lookup;
use library_catalog::utils::logs::setup_tracing;
use tracing::info;

const DEFAULT_LIBRARY_NAME: &str = "My Library";
const DEFAULT_DATA_FILE: &str = "library_data.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Configuration::from_env(DEFAULT_LIBRARY_NAME, DEFAULT_DATA_FILE);
    // the menu owns stdout
    setup_tracing(config.log_json, io::stderr);

    let mut library = Library::load_from_file(&config.data_file, config.library_name.as_str());
    info!(library = library.name(), books = library.total_books(), "starting console");

    let stdin = io::stdin();
    let mut menu = ConsoleMenu::new(stdin.lock(), io::stdout(), create_lookup(&config), config.data_file.clone());
    menu.run(&mut library).await?;
    Ok(())
}
