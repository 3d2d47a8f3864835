//! Feed ingestion for AI Investment Daily.
//!
//! Fetches one RSS/Atom feed, keeps the first N entries as [`Article`]s and
//! memoizes them in a caller-owned [`FeedCache`].
//!
//! [`Article`]: aidaily_core::Article

pub mod cache;
pub mod client;
mod dates;
pub mod error;
pub mod parse;

pub use cache::{CachedFeed, FeedCache};
pub use client::FeedClient;
pub use error::FeedError;
pub use parse::parse_feed;
