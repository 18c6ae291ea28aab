//! Query engine
//!
//! Pure filtering over catalog collections:
//! - `query`: multi-term queries, AND across terms, OR across fields
//! - `tags`: tag histograms and tag-substring search
//!
//! Nothing here touches the filesystem or holds state.

pub mod query;
pub mod tags;

pub use query::{Query, exact_name_match, filter};
pub use tags::{TagCount, all_tags, all_tags_with_counts, by_tag, top_tags};
