//! Upstream catalog API response types
//!
//! Data structures for deserializing the catalog service's JSON. Parsed
//! leniently: everything the normalizer can default is optional here, so a
//! sparse record still decodes and only truly malformed ones are dropped.

use serde::Deserialize;

/// Entry of the owner's shelf collection
///
/// `GET /users/{ownerId}/shelves` returns a bare array of these.
#[derive(Debug, Clone, Deserialize)]
pub struct ShelfResource {
    pub id: String,
    pub title: String,
}

/// Shelf resource with the `expand=forms` query applied
///
/// The inlined records stay raw here: individual entries that fail to
/// decode are dropped per-item by the client, not the whole response.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpandedShelfResource {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub forms: Vec<serde_json::Value>,
}

/// Full detail record for one form
///
/// `GET /forms/{formId}`
#[derive(Debug, Clone, Deserialize)]
pub struct FormResource {
    pub id: String,

    pub title: Option<String>,

    #[serde(default)]
    pub authors: Vec<AuthorResource>,

    pub cover: Option<CoverResource>,

    #[serde(default)]
    pub medias: Vec<MediaResource>,

    pub price: Option<PriceResource>,

    pub statistics: Option<StatisticsResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorResource {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoverResource {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaResource {
    pub cover: Option<CoverResource>,
}

/// Price block; fields default so a partial record still decodes and a
/// zero amount is filtered out downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceResource {
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatisticsResource {
    pub rating: Option<RatingResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RatingResource {
    pub average: Option<f64>,
}
