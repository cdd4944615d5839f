//! Static product catalog for the Cupcake Lab chat assistant.
//!
//! This crate owns the in-memory menu records and the two pure components
//! built on top of them:
//! - [`matcher::CatalogMatcher`] — keyword scoring of a free-text query
//!   against the catalog, plus the image-request / product-query predicates.
//! - [`composer::ResponseComposer`] — intent detection and canned answer
//!   composition (prices, sizes, flavors, delivery, ordering, fallbacks).
//!
//! Everything here is synchronous and side-effect free; callers thread the
//! selected product context into prompt building explicitly.

pub mod composer;
pub mod data;
pub mod matcher;
pub mod price;
pub mod record;
mod templates;

pub use composer::{ProductReply, ResponseComposer};
pub use matcher::{CatalogMatcher, ScoredRecord};
pub use price::PriceNode;
pub use record::{Category, ProductRecord};
