//! Provider directory: the remote table's row shape, the listing quality
//! filter, URL slugs, and the paginated full-table fetch.

pub mod paginate;
pub mod record;
pub mod slug;

pub use paginate::{fetch_all, DirectoryError, MAX_PAGES, PAGE_SIZE};
pub use record::ProviderRecord;
