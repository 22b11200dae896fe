//! Stable record types handed to the UI layer
//!
//! Plain immutable values created fresh on every request; the client keeps
//! no state between calls. Serialized field names follow the camelCase
//! shape the consuming UI renders directly.

use serde::{Deserialize, Serialize};

/// A named, owned collection of books in the upstream catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelf {
    /// Opaque upstream-assigned id
    pub id: String,

    /// Display title
    pub title: String,

    /// Cardinality of the shelf's book collection at fetch time.
    ///
    /// Zero when the collection could not be retrieved; never absent.
    pub forms_count: u64,
}

/// A single book ("form" in upstream terms).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Opaque upstream form id
    pub id: String,

    /// Upstream title, or a placeholder when the record carries none
    pub title: String,

    /// Ordered author list; empty when the record carries none
    #[serde(default)]
    pub authors: Vec<Author>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,

    /// Present only when the upstream amount is positive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: f64,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shelf_serializes_camel_case() {
        let shelf = Shelf {
            id: "shelf-1".to_string(),
            title: "Classics".to_string(),
            forms_count: 7,
        };

        let json = serde_json::to_value(&shelf).unwrap();
        assert_eq!(json["formsCount"], 7);
        assert_eq!(json["title"], "Classics");
    }

    #[test]
    fn test_book_omits_absent_optionals() {
        let book = Book {
            id: "f1".to_string(),
            title: "Dune".to_string(),
            authors: vec![Author {
                name: "Frank Herbert".to_string(),
            }],
            cover_url: None,
            price: None,
            average_rating: None,
        };

        let json = serde_json::to_value(&book).unwrap();
        assert!(json.get("coverUrl").is_none());
        assert!(json.get("price").is_none());
        assert!(json.get("averageRating").is_none());
        assert_eq!(json["authors"][0]["name"], "Frank Herbert");
    }

    #[test]
    fn test_book_round_trips_price() {
        let book = Book {
            id: "f1".to_string(),
            title: "Dune".to_string(),
            authors: Vec::new(),
            cover_url: Some("https://img.test/cover.jpg".to_string()),
            price: Some(Price {
                amount: 9.99,
                currency: "EUR".to_string(),
            }),
            average_rating: Some(4.5),
        };

        let json = serde_json::to_string(&book).unwrap();
        let back: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }
}
