//! noor-browse
//!
//! Filtering and pagination for large collections, plus the input plumbing a
//! browsing view needs: a per-view session that resets paging when the filter
//! changes, a cancellable debouncer and a latest-query-wins guard.
pub mod debounce;
pub mod filter;
pub mod latest;
pub mod paginate;
pub mod session;

pub use debounce::Debouncer;
pub use filter::{filter, record_matches};
pub use latest::{LatestQuery, QueryTicket};
pub use paginate::{clamp_page, page_count, paginate};
pub use session::BrowseSession;
