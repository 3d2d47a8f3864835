//! Heuristic investment extraction for AI Investment Daily.
//!
//! Pattern extractors are pure functions over `title + " " + summary`. The
//! company name can come from a regex heuristic or from an external
//! named-entity recognizer; see [`Extractor`].

pub mod company;
pub mod entities;
pub mod error;
pub mod extractor;
pub mod investors;
pub mod patterns;

pub use company::extract_company;
pub use entities::{first_organization, Entity, NerClient};
pub use error::ExtractError;
pub use extractor::{extract_articles, Extractor};
pub use investors::{extract_investor_anchor, extract_investors_lookahead};
pub use patterns::{extract_amounts, extract_rounds};
