use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Only the isbn is supplied, title and author come from the catalog lookup.
#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub isbn: String,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book_by_isbn(req.isbn.as_str()).await
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory::{create_catalog_service, create_test_state};
    use crate::core::command::{Command, CommandError};
    use crate::gateway::lookup::StaticLookup;

    #[tokio::test]
    async fn test_should_run_add_book() {
        let (state, _dir) = create_test_state(StaticLookup::new().with_book("isbn", "test book", "test author"));
        let cmd = AddBookCommand::new(create_catalog_service(&state));

        let res = cmd.execute(AddBookCommandRequest::new("isbn")).await.expect("should add book");
        assert_eq!("test book", res.book.title.as_str());

        let err = cmd.execute(AddBookCommandRequest::new("isbn")).await.expect_err("should reject duplicate");
        assert!(matches!(err, CommandError::DuplicateKey { .. }));
    }
}
