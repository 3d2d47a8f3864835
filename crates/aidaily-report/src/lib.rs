//! Presentation-ready views over extracted investment records.
//!
//! Everything here is pure: the server renders these views as HTML and JSON,
//! the CLI prints them as markdown.

pub mod digest;
pub mod newsletter;
pub mod summary;
pub mod table;

pub use digest::{top_deals, Digest};
pub use newsletter::render_newsletter;
pub use summary::{summarize, Summary};
pub use table::{render_markdown_table, table_rows, TableRow};
