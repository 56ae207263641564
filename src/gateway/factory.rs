use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::gateway::GatewayLookupVia;
use crate::gateway::lookup::{CatalogLookup, StaticLookup};
use crate::gateway::openlibrary::client::OpenLibraryLookup;

pub fn create_lookup(config: &Configuration) -> Arc<dyn CatalogLookup> {
    match config.lookup_via {
        GatewayLookupVia::OpenLibrary => {
            Arc::new(OpenLibraryLookup::new(config.lookup_url.as_str(), config.lookup_timeout()))
        }
        GatewayLookupVia::Offline => {
            Arc::new(StaticLookup::new())
        }
    }
}
