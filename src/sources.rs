//! Locating and reading tracklist text: single files, directories of saved
//! show descriptions, or standard input.

mod read;
mod scan;

pub use read::*;
pub use scan::scan;
