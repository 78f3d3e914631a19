//! Keyword search, runtime-named sorting and page slicing
//!
//! The pipeline runs in a fixed order: [`filter_records`] → [`sort_records`]
//! → slice, orchestrated by [`QueryPager`]. Each stage is also usable on its
//! own.
//!
//! # Example
//!
//! ```rust
//! use query_pager::query::{paginate, PageRequest, SortDirection};
//!
//! struct User { name: String, age: u32 }
//! query_pager::record_schema!(User { name: String, age: u32 });
//!
//! let users = vec![
//!     User { name: "alice".into(), age: 31 },
//!     User { name: "bob".into(), age: 27 },
//!     User { name: "alicia".into(), age: 45 },
//! ];
//!
//! let request = PageRequest::new(1, 10)
//!     .with_keyword("ALI")
//!     .with_sort("age", SortDirection::Descending);
//! let page = paginate(&users, &request).unwrap();
//!
//! let names: Vec<&str> = page.items.iter().map(|u| u.name.as_str()).collect();
//! assert_eq!(names, vec!["alicia", "alice"]);
//! assert_eq!(page.total_items, 2);
//! ```

mod filter;
mod pager;
mod request;
mod result;
mod sort;

pub use filter::{filter_records, KeywordMatcher};
pub use pager::{paginate, QueryPager};
pub use request::{PageQuery, PageRequest, SortDirection};
pub use result::{calculate_total_pages, PageResult};
pub use sort::{sort_records, sort_records_by, SortKey};
