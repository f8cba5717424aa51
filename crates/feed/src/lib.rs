pub mod backend;
pub mod config;
pub mod debounce;
pub mod error;
pub mod list;
pub mod overview;
pub mod paginate;
pub mod search;
pub mod source;

#[cfg(test)]
pub(crate) mod testing;
