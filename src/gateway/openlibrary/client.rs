use std::time::Duration;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};
use crate::gateway::lookup::{BookDetails, CatalogLookup};

#[derive(Debug, Clone)]
pub struct OpenLibraryLookup {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl OpenLibraryLookup {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            timeout,
        }
    }

    async fn fetch(&self, isbn: &str) -> Result<Value, reqwest::Error> {
        let bibkeys = format!("ISBN:{}", isbn);
        self.client
            .get(self.endpoint.as_str())
            .query(&[("bibkeys", bibkeys.as_str()), ("format", "json"), ("jscmd", "data")])
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await
    }
}

#[async_trait]
impl CatalogLookup for OpenLibraryLookup {
    async fn lookup(&self, isbn: &str) -> Option<BookDetails> {
        if isbn.trim().is_empty() {
            return None;
        }
        match self.fetch(isbn).await {
            Ok(payload) => {
                let details = parse_books_response(isbn, &payload);
                if details.is_none() {
                    debug!(isbn, "isbn not found in open library");
                }
                details
            }
            Err(err) => {
                warn!(isbn, error = %err, "open library lookup failed");
                None
            }
        }
    }
}

// Picks title and authors out of a `jscmd=data` response, e.g.
// {"ISBN:9780140328721": {"title": "Matilda", "authors": [{"name": "Roald Dahl"}]}}
pub(crate) fn parse_books_response(isbn: &str, payload: &Value) -> Option<BookDetails> {
    let entry = payload.as_object()?.get(format!("ISBN:{}", isbn).as_str())?.as_object()?;
    let title = entry.get("title").and_then(Value::as_str).filter(|t| !t.is_empty())?;
    let authors = entry.get("authors").and_then(Value::as_array).map(|authors| {
        authors.iter()
            .filter_map(|a| a.get("name").and_then(Value::as_str))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect::<Vec<&str>>()
            .join(", ")
    }).unwrap_or_default();
    if authors.is_empty() {
        return None;
    }
    Some(BookDetails::new(title, authors.as_str()))
}
