use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SummaryCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SummaryCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct SummaryCommandRequest {}

#[derive(Debug, Serialize)]
pub struct SummaryCommandResponse {
    pub library_name: String,
    pub total_books: usize,
}

#[async_trait]
impl Command<SummaryCommandRequest, SummaryCommandResponse> for SummaryCommand {
    async fn execute(&self, _req: SummaryCommandRequest) -> Result<SummaryCommandResponse, CommandError> {
        Ok(SummaryCommandResponse {
            library_name: self.catalog_service.library_name().await,
            total_books: self.catalog_service.total_books().await,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::summary_cmd::{SummaryCommand, SummaryCommandRequest};
    use crate::catalog::factory::{create_catalog_service, create_test_state};
    use crate::core::command::Command;
    use crate::gateway::lookup::StaticLookup;

    #[tokio::test]
    async fn test_should_run_summary() {
        let (state, _dir) = create_test_state(StaticLookup::new());
        let res = SummaryCommand::new(create_catalog_service(&state))
            .execute(SummaryCommandRequest::default()).await.expect("should summarize");
        assert_eq!("Test Library", res.library_name.as_str());
        assert_eq!(0, res.total_books);
    }
}
