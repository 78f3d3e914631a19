//! # query-pager
//!
//! Generic server-side pagination for collections of records: free-text
//! keyword search across every field, sorting by a field named at runtime,
//! and slicing into fixed-size pages with page metadata.
//!
//! ## Features
//!
//! - **Field introspection**: [`record::Record`] exposes field names, declared
//!   types and current values; [`record_schema!`] generates it for a struct
//! - **Keyword search**: case-insensitive substring match over all fields,
//!   each record returned at most once
//! - **Runtime sorting**: stable sort by any orderable field using the field
//!   type's native ordering (numeric, chronological, text)
//! - **Pagination**: page slicing with `total_items` / `total_pages`
//! - **HTTP**: `IntoResponse` for results and errors (`http` feature, on by default)
//!
//! ## Example
//!
//! ```rust
//! use query_pager::prelude::*;
//!
//! #[derive(Debug, Clone)]
//! struct Task {
//!     id: u64,
//!     title: String,
//!     priority: i32,
//!     assignee: Option<String>,
//! }
//!
//! query_pager::record_schema!(Task {
//!     id: u64,
//!     title: String,
//!     priority: i32,
//!     assignee: Option<String>,
//! });
//!
//! fn main() -> Result<()> {
//!     let tasks: Vec<Task> = (1..=12)
//!         .map(|id| Task {
//!             id,
//!             title: format!("Fix bug #{id}"),
//!             priority: (id % 3) as i32,
//!             assignee: None,
//!         })
//!         .collect();
//!
//!     let pager = QueryPager::new(PagerConfig::default());
//!     let request = PageRequest::new(1, 5)
//!         .with_keyword("bug #1")
//!         .with_sort("priority", SortDirection::Descending);
//!
//!     let page = pager.paginate(&tasks, &request)?;
//!
//!     // "bug #1", "#10", "#11", "#12"
//!     assert_eq!(page.total_items, 4);
//!     assert_eq!(page.total_pages, 1);
//!     assert_eq!(page.items[0].priority, 2);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod observability;
pub mod query;
pub mod record;

#[cfg(feature = "http")]
pub mod http;

pub use config::PagerConfig;
pub use error::{Error, Result};
pub use query::{paginate, PageQuery, PageRequest, PageResult, QueryPager, SortDirection};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::PagerConfig;
    pub use crate::error::{Error, Result};
    pub use crate::observability::init_tracing;
    pub use crate::query::{
        paginate, PageQuery, PageRequest, PageResult, QueryPager, SortDirection,
    };
    pub use crate::record::{FieldDef, FieldType, FieldValue, IntoFieldValue, Record};

    #[cfg(feature = "http")]
    pub use crate::http::ErrorResponse;
}
