use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::controller::AppState;

pub fn create_catalog_service(state: &AppState) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(&state.config, state.library.clone(), state.lookup.clone()))
}

#[cfg(test)]
pub(crate) fn create_test_state(lookup: crate::gateway::lookup::StaticLookup) -> (AppState, tempfile::TempDir) {
    use std::sync::Arc;
    use crate::books::repository::Library;
    use crate::core::domain::Configuration;

    let dir = tempfile::tempdir().expect("should create temp dir");
    let data_file = dir.path().join("test_api_library.json");
    let config = Configuration::new("Test Library", data_file.to_str().expect("utf-8 temp path"));
    let state = AppState::new(config, Library::new("Test Library"), Arc::new(lookup));
    (state, dir)
}
