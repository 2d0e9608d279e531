//! Runtime configuration read from the environment.

pub mod paging;

pub use paging::PagingConfig;
