//! Catalog service connector
//!
//! Normalizes the upstream shelves/forms API into [`Shelf`] and [`Book`]
//! records with consistent offset/limit pagination.

use catalog_bridge::{FailureEvent, FailureObserver, GetRequest, HttpTransport};
use futures::stream::{self, StreamExt};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::config::{ClientConfig, PaginationStrategy};
use crate::error::{CatalogError, Result};
use crate::models::{Author, Book, Price, Shelf};
use crate::page::{Page, PageRequest};
use crate::types::{ExpandedShelfResource, FormResource, ShelfResource};

/// Placeholder title for records that carry none
const FALLBACK_TITLE: &str = "Unknown Title";

/// Catalog service client
///
/// Read-only connector against the upstream library-catalog API.
///
/// # Features
///
/// - Offset/limit pagination with `total` always reflecting the complete
///   collection, whatever the upstream's own pagination supports
/// - Derived per-shelf book counts, defaulting to zero when the count
///   lookup fails
/// - Per-item failure tolerance: unresolvable books are dropped from the
///   page, never surfaced as partial-error markers
/// - Bounded, order-preserving fan-out for per-item fetches
///
/// The client holds no state between calls; every operation re-fetches
/// from the origin.
///
/// # Example
///
/// ```ignore
/// use catalog_client::{CatalogClient, ClientConfig, PageRequest};
///
/// let client = CatalogClient::new(config);
/// let page = client.list_shelf_books("shelf-1", PageRequest::new(12, 0)).await?;
/// println!("{} of {} books", page.items.len(), page.total);
/// ```
pub struct CatalogClient {
    /// Transport for API requests
    transport: Arc<dyn HttpTransport>,

    /// Sink for tolerated-failure diagnostics
    observer: Arc<dyn FailureObserver>,

    /// Catalog service origin
    origin: String,

    /// Fixed catalog-owner identifier
    owner_id: String,

    /// Book-page fetch strategy
    strategy: PaginationStrategy,

    /// Fan-out bound for per-item fetches
    max_in_flight: usize,
}

impl CatalogClient {
    /// Create a new catalog client from a validated configuration
    pub fn new(config: ClientConfig) -> Self {
        Self {
            transport: config.transport,
            observer: config.observer,
            origin: config.origin,
            owner_id: config.owner_id,
            strategy: config.strategy,
            max_in_flight: config.max_in_flight,
        }
    }

    fn shelves_url(&self) -> String {
        format!(
            "{}/users/{}/shelves",
            self.origin,
            urlencoding::encode(&self.owner_id)
        )
    }

    fn forms_url(&self, shelf_id: &str) -> String {
        format!(
            "{}/shelves/{}/forms",
            self.origin,
            urlencoding::encode(shelf_id)
        )
    }

    fn forms_page_url(&self, shelf_id: &str, limit: u32, offset: u32) -> String {
        format!(
            "{}?limit={}&offset={}",
            self.forms_url(shelf_id),
            limit,
            offset
        )
    }

    fn expanded_shelf_url(&self, shelf_id: &str) -> String {
        format!(
            "{}/shelves/{}?expand=forms",
            self.origin,
            urlencoding::encode(shelf_id)
        )
    }

    fn form_url(&self, form_id: &str) -> String {
        format!("{}/forms/{}", self.origin, urlencoding::encode(form_id))
    }

    /// Execute a GET and decode the JSON body.
    ///
    /// A non-success status or a connection failure emits a
    /// `TransportFailure` diagnostic before the error is returned; callers
    /// decide whether to tolerate or propagate it.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let request = GetRequest::new(url).accept_json();

        let response = match self.transport.get(request).await {
            Ok(response) => response,
            Err(err) => {
                self.observer.record(FailureEvent::TransportFailure {
                    url: url.to_string(),
                    cause: err.to_string(),
                });
                return Err(err.into());
            }
        };

        if !response.is_success() {
            let err = CatalogError::Api {
                status: response.status,
                url: url.to_string(),
            };
            self.observer.record(FailureEvent::TransportFailure {
                url: url.to_string(),
                cause: err.to_string(),
            });
            return Err(err);
        }

        serde_json::from_slice(&response.body).map_err(|e| CatalogError::Parse {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    /// Fetch the complete form-id collection for a shelf.
    async fn fetch_form_ids(&self, shelf_id: &str) -> Result<Vec<String>> {
        self.get_json(&self.forms_url(shelf_id)).await
    }

    /// Resolve a shelf's book count, defaulting to zero when the lookup
    /// fails; the shelf itself is always kept.
    async fn forms_count_or_zero(&self, shelf_id: &str) -> u64 {
        match self.fetch_form_ids(shelf_id).await {
            Ok(ids) => ids.len() as u64,
            Err(err) => {
                warn!(shelf_id = %shelf_id, error = %err, "Book-count lookup failed, defaulting to zero");
                self.observer.record(FailureEvent::CountDefaulted {
                    shelf_id: shelf_id.to_string(),
                    cause: err.to_string(),
                });
                0
            }
        }
    }

    async fn shelf_with_count(&self, resource: ShelfResource) -> Shelf {
        let forms_count = self.forms_count_or_zero(&resource.id).await;
        Shelf {
            id: resource.id,
            title: resource.title,
            forms_count,
        }
    }

    /// Normalize an upstream form record into a `Book`.
    fn convert_form(form: FormResource) -> Book {
        let FormResource {
            id,
            title,
            authors,
            cover,
            medias,
            price,
            statistics,
        } = form;

        let cover_url = cover.and_then(|c| c.url).or_else(|| {
            medias
                .into_iter()
                .next()
                .and_then(|m| m.cover)
                .and_then(|c| c.url)
        });

        let price = price.filter(|p| p.amount > 0.0).map(|p| Price {
            amount: p.amount,
            currency: p.currency,
        });

        let average_rating = statistics.and_then(|s| s.rating).and_then(|r| r.average);

        Book {
            id,
            title: title.unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            authors: authors.into_iter().map(|a| Author { name: a.name }).collect(),
            cover_url,
            price,
            average_rating,
        }
    }

    /// Fetch one book's detail record; a failure drops the book.
    async fn fetch_book(&self, form_id: String) -> Option<Book> {
        let url = self.form_url(&form_id);
        match self.get_json::<FormResource>(&url).await {
            Ok(form) => Some(Self::convert_form(form)),
            Err(err) => {
                warn!(form_id = %form_id, error = %err, "Dropping book after failed detail fetch");
                self.observer.record(FailureEvent::ItemDropped {
                    url,
                    item_id: form_id,
                    cause: err.to_string(),
                });
                None
            }
        }
    }

    /// Resolve detail records for a batch of form ids.
    ///
    /// Requests run concurrently up to `max_in_flight`; input order is
    /// preserved and failed items are filtered out after the whole batch
    /// has settled.
    async fn resolve_books(&self, ids: Vec<String>) -> Vec<Book> {
        stream::iter(ids)
            .map(|id| self.fetch_book(id))
            .buffered(self.max_in_flight)
            .filter_map(|book| async move { book })
            .collect()
            .await
    }

    async fn books_page_from_ids(&self, ids: Vec<String>, total: u64) -> Page<Book> {
        if ids.is_empty() {
            // Empty window: no detail fetches are issued.
            return Page::new(Vec::new(), total);
        }
        Page::new(self.resolve_books(ids).await, total)
    }

    /// Decode inlined form records, dropping entries that fail to decode.
    fn decode_inline_forms(&self, source_url: &str, raw: &[serde_json::Value]) -> Vec<Book> {
        raw.iter()
            .filter_map(|value| match serde_json::from_value::<FormResource>(value.clone()) {
                Ok(form) => Some(Self::convert_form(form)),
                Err(err) => {
                    let item_id = value
                        .get("id")
                        .and_then(|id| id.as_str())
                        .unwrap_or_default()
                        .to_string();
                    warn!(item_id = %item_id, error = %err, "Dropping undecodable inlined form");
                    self.observer.record(FailureEvent::ItemDropped {
                        url: source_url.to_string(),
                        item_id,
                        cause: err.to_string(),
                    });
                    None
                }
            })
            .collect()
    }

    /// Fetch every book of a shelf, unbounded by any page.
    async fn all_books(&self, shelf_id: &str) -> Result<Vec<Book>> {
        match self.strategy {
            PaginationStrategy::ExpandForms => {
                let url = self.expanded_shelf_url(shelf_id);
                let expanded = self.get_json::<ExpandedShelfResource>(&url).await?;
                Ok(self.decode_inline_forms(&url, &expanded.forms))
            }
            _ => {
                let ids = self.fetch_form_ids(shelf_id).await?;
                if ids.is_empty() {
                    return Ok(Vec::new());
                }
                Ok(self.resolve_books(ids).await)
            }
        }
    }

    /// List the owner's shelves as one offset/limit page.
    ///
    /// The complete shelf collection is fetched (fatal on failure) and
    /// `total` always reflects its full size; the page is sliced out of the
    /// materialized set in upstream order, then each shelf on the page
    /// resolves its book count concurrently. A count lookup failure keeps
    /// the shelf with `forms_count = 0`.
    #[instrument(skip(self))]
    pub async fn list_shelves(&self, request: PageRequest) -> Result<Page<Shelf>> {
        info!(limit = request.limit, offset = request.offset, "Listing shelves");

        let all = self.get_json::<Vec<ShelfResource>>(&self.shelves_url()).await?;
        let total = all.len() as u64;

        let page: Vec<ShelfResource> = all[request.bounds(all.len())].to_vec();

        let shelves: Vec<Shelf> = stream::iter(page)
            .map(|resource| self.shelf_with_count(resource))
            .buffered(self.max_in_flight)
            .collect()
            .await;

        info!(returned = shelves.len(), total, "Listed shelves");
        Ok(Page::new(shelves, total))
    }

    /// Look up a single shelf by id.
    ///
    /// The upstream has no per-id shelf metadata endpoint, so the id is
    /// resolved against the complete collection. An unknown id is
    /// `Ok(None)`, not an error; the caller renders its own fallback.
    #[instrument(skip(self), fields(shelf_id = %shelf_id))]
    pub async fn shelf_details(&self, shelf_id: &str) -> Result<Option<Shelf>> {
        info!("Fetching shelf details");

        let all = self.get_json::<Vec<ShelfResource>>(&self.shelves_url()).await?;
        let Some(resource) = all.into_iter().find(|s| s.id == shelf_id) else {
            debug!("Shelf not present in the owner's collection");
            return Ok(None);
        };

        Ok(Some(self.shelf_with_count(resource).await))
    }

    /// List one page of a shelf's books.
    ///
    /// `total` is the size of the complete book-id collection, pre-slice,
    /// under every strategy. Per-item failures shrink the page without
    /// touching `total`, so `items.len()` may be shorter than
    /// `min(limit, total - offset)`. A shelf with zero books yields
    /// `{ items: [], total: 0 }` with no detail fetches issued.
    #[instrument(skip(self), fields(shelf_id = %shelf_id))]
    pub async fn list_shelf_books(
        &self,
        shelf_id: &str,
        request: PageRequest,
    ) -> Result<Page<Book>> {
        info!(
            limit = request.limit,
            offset = request.offset,
            strategy = ?self.strategy,
            "Listing books for shelf"
        );

        let page = match self.strategy {
            PaginationStrategy::ClientSlice => {
                let all_ids = self.fetch_form_ids(shelf_id).await?;
                let total = all_ids.len() as u64;
                let ids = all_ids[request.bounds(all_ids.len())].to_vec();
                self.books_page_from_ids(ids, total).await
            }
            PaginationStrategy::UpstreamParams => {
                let ids = self
                    .get_json::<Vec<String>>(&self.forms_page_url(
                        shelf_id,
                        request.limit,
                        request.offset,
                    ))
                    .await?;
                let all_ids = self.fetch_form_ids(shelf_id).await?;
                self.books_page_from_ids(ids, all_ids.len() as u64).await
            }
            PaginationStrategy::ExpandForms => {
                let url = self.expanded_shelf_url(shelf_id);
                let expanded = self.get_json::<ExpandedShelfResource>(&url).await?;
                let total = expanded.forms.len() as u64;
                let window = request.bounds(expanded.forms.len());
                let books = self.decode_inline_forms(&url, &expanded.forms[window]);
                Page::new(books, total)
            }
        };

        info!(returned = page.items.len(), total = page.total, "Listed books");
        Ok(page)
    }

    /// Search a shelf's books by title or author name.
    ///
    /// Fetches the *entire* collection (unbounded by any page), tolerating
    /// per-item failures as usual, then retains books whose title or any
    /// author name contains `query` as a case-insensitive substring.
    ///
    /// Unlike the paginated operations, `total` here is the number of
    /// *matching* books, not the shelf's full collection size.
    #[instrument(skip(self), fields(shelf_id = %shelf_id))]
    pub async fn search_shelf_books(&self, shelf_id: &str, query: &str) -> Result<Page<Book>> {
        info!(query = %query, "Searching books in shelf");

        let books = self.all_books(shelf_id).await?;
        let needle = query.to_lowercase();
        let matches: Vec<Book> = books
            .into_iter()
            .filter(|book| {
                book.title.to_lowercase().contains(&needle)
                    || book
                        .authors
                        .iter()
                        .any(|author| author.name.to_lowercase().contains(&needle))
            })
            .collect();

        let total = matches.len() as u64;
        info!(matched = total, "Search finished");
        Ok(Page::new(matches, total))
    }
}
