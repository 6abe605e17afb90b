//! Tracklist parsing: turns the lines of a pasted show playlist into
//! artist/track records, tagging the entries that belong to a named show
//! feature.

mod display;
mod feature;
mod line;
mod model;
mod parser;

pub use display::display_from_fields;
pub use feature::detect_feature;
pub use line::parse_track;
pub use model::{Feature, Track};
pub use parser::{parse_text, parse_tracklist};
