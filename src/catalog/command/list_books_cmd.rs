use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        Ok(ListBooksCommandResponse { books: self.catalog_service.list_books().await })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory::{create_catalog_service, create_test_state};
    use crate::core::command::Command;
    use crate::gateway::lookup::StaticLookup;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let (state, _dir) = create_test_state(StaticLookup::new()
            .with_book("1", "first", "a")
            .with_book("2", "second", "b"));
        let add_cmd = AddBookCommand::new(create_catalog_service(&state));
        let list_cmd = ListBooksCommand::new(create_catalog_service(&state));

        let res = list_cmd.execute(ListBooksCommandRequest::default()).await.expect("should list books");
        assert!(res.books.is_empty());

        let _ = add_cmd.execute(AddBookCommandRequest::new("2")).await.expect("should add book");
        let _ = add_cmd.execute(AddBookCommandRequest::new("1")).await.expect("should add book");
        let res = list_cmd.execute(ListBooksCommandRequest::default()).await.expect("should list books");
        let isbns: Vec<&str> = res.books.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(vec!["2", "1"], isbns);
    }
}
