use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::repository::Library;
use crate::core::library::LibraryResult;
use crate::gateway::lookup::CatalogLookup;

// Flow tells the menu loop whether input is still available after a step.
#[derive(Debug, PartialEq, Clone, Copy)]
enum Flow {
    Continue,
    Exit,
}

// ConsoleMenu drives a library from a line-oriented input, e.g. stdin. Every add, remove and
// exit writes the whole library to data_file.
pub struct ConsoleMenu<R, W> {
    input: R,
    output: W,
    lookup: Arc<dyn CatalogLookup>,
    data_file: PathBuf,
}

impl<R: BufRead, W: Write> ConsoleMenu<R, W> {
    pub fn new(input: R, output: W, lookup: Arc<dyn CatalogLookup>, data_file: PathBuf) -> Self {
        Self {
            input,
            output,
            lookup,
            data_file,
        }
    }

    pub async fn run(&mut self, library: &mut Library) -> LibraryResult<()> {
        loop {
            writeln!(self.output, "\n=== Menu ===")?;
            writeln!(self.output, "1. Add book")?;
            writeln!(self.output, "2. Remove book")?;
            writeln!(self.output, "3. List books")?;
            writeln!(self.output, "4. Search book")?;
            writeln!(self.output, "5. Exit")?;
            let choice = match self.prompt("Your choice: ")? {
                Some(choice) => choice,
                None => break,
            };
            let flow = match choice.as_str() {
                "1" => {
                    let flow = self.add_book_flow(library).await?;
                    library.persist(&self.data_file);
                    flow
                }
                "2" => {
                    let flow = self.remove_book_flow(library)?;
                    library.persist(&self.data_file);
                    flow
                }
                "3" => self.list_books_flow(library)?,
                "4" => self.search_book_flow(library)?,
                "5" => {
                    writeln!(self.output, "Goodbye!")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please enter a number from 1 to 5.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        library.persist(&self.data_file);
        info!(books = library.total_books(), "console session finished");
        Ok(())
    }

    async fn add_book_flow(&mut self, library: &mut Library) -> LibraryResult<Flow> {
        writeln!(self.output, "\n=== Add Book ===")?;
        let Some(choice) = self.prompt("Auto-fill by ISBN? (y/N): ")? else {
            return Ok(Flow::Exit);
        };
        if matches!(choice.to_lowercase().as_str(), "y" | "yes" | "e") {
            let Some(isbn) = self.prompt_non_empty("ISBN: ")? else {
                return Ok(Flow::Exit);
            };
            if let Some(details) = self.lookup.lookup(isbn.as_str()).await {
                writeln!(self.output, "Found: {} - {}", details.title, details.author)?;
                library.add_book(BookEntity::new(details.title.as_str(), details.author.as_str(), isbn.as_str()));
                writeln!(self.output, "Book added.")?;
                return Ok(Flow::Continue);
            }
            writeln!(self.output, "Not found in Open Library. Switching to manual entry.")?;
        }

        let Some(title) = self.prompt_non_empty("Title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt_non_empty("Author: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(isbn) = self.prompt_non_empty("ISBN: ")? else {
            return Ok(Flow::Exit);
        };
        library.add_book(BookEntity::new(title.as_str(), author.as_str(), isbn.as_str()));
        writeln!(self.output, "Book added.")?;
        Ok(Flow::Continue)
    }

    fn remove_book_flow(&mut self, library: &mut Library) -> LibraryResult<Flow> {
        writeln!(self.output, "\n=== Remove Book ===")?;
        let Some(isbn) = self.prompt_non_empty("ISBN of the book to remove: ")? else {
            return Ok(Flow::Exit);
        };
        if library.remove_book_by_isbn(isbn.as_str()) {
            writeln!(self.output, "Book removed.")?;
        } else {
            writeln!(self.output, "ISBN not found.")?;
        }
        Ok(Flow::Continue)
    }

    fn list_books_flow(&mut self, library: &Library) -> LibraryResult<Flow> {
        writeln!(self.output, "\n=== List Books ===")?;
        let books = library.list_books();
        if books.is_empty() {
            writeln!(self.output, "There are no books in the library.")?;
            return Ok(Flow::Continue);
        }
        for (ndx, book) in books.iter().enumerate() {
            let borrowed = if book.is_borrowed { " (borrowed)" } else { "" };
            writeln!(self.output, "{}. {} [ISBN: {}]{}", ndx + 1, book.describe(), book.isbn, borrowed)?;
        }
        Ok(Flow::Continue)
    }

    fn search_book_flow(&mut self, library: &Library) -> LibraryResult<Flow> {
        writeln!(self.output, "\n=== Search Book ===")?;
        let Some(query) = self.prompt_non_empty("Title: ")? else {
            return Ok(Flow::Exit);
        };
        match library.find_book(query.as_str()) {
            Some(book) => writeln!(self.output, "Found: {} [ISBN: {}]", book.describe(), book.isbn)?,
            None => writeln!(self.output, "Book not found.")?,
        }
        Ok(Flow::Continue)
    }

    // Returns the trimmed line, or None once the input is exhausted.
    fn prompt(&mut self, text: &str) -> LibraryResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_non_empty(&mut self, text: &str) -> LibraryResult<Option<String>> {
        loop {
            match self.prompt(text)? {
                Some(value) if value.is_empty() => {
                    writeln!(self.output, "This cannot be left empty. Please try again.")?;
                }
                other => return Ok(other),
            }
        }
    }
}
