//! Edge-list provider loading undirected graphs from plain or gzip text.

mod errors;
mod parse;
mod provider;

pub use errors::EdgeListError;
pub use provider::EdgeListProvider;

#[cfg(test)]
mod tests;
