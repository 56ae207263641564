use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

pub mod lookup;
pub mod openlibrary;
pub mod factory;

// GatewayLookupVia selects where book metadata is fetched from when a book is added by isbn.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum GatewayLookupVia {
    OpenLibrary,
    Offline,
}

impl From<String> for GatewayLookupVia {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "offline" | "none" => GatewayLookupVia::Offline,
            _ => GatewayLookupVia::OpenLibrary,
        }
    }
}

impl Display for GatewayLookupVia {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            GatewayLookupVia::OpenLibrary => write!(f, "openlibrary"),
            GatewayLookupVia::Offline => write!(f, "offline"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::GatewayLookupVia;

    #[test]
    fn test_should_parse_lookup_via() {
        assert_eq!(GatewayLookupVia::Offline, GatewayLookupVia::from("Offline".to_string()));
        assert_eq!(GatewayLookupVia::OpenLibrary, GatewayLookupVia::from("openlibrary".to_string()));
        assert_eq!(GatewayLookupVia::OpenLibrary, GatewayLookupVia::from("anything".to_string()));
        assert_eq!("offline", GatewayLookupVia::Offline.to_string());
    }
}
