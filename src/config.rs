//! Configuration loader and schema types.
//!
//! Settings control how parsed tracklists are printed, which files count as
//! tracklists when scanning a directory, and how loosely artist names are
//! grouped.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
