pub mod builder;
pub mod constants;
#[cfg(feature = "serde")]
mod io;
mod options;
mod stats;
mod types;

pub use builder::{build_pages, build_pages_with_lookahead};
#[cfg(feature = "serde")]
pub use io::{load_items, parse_items, save_layouts};
pub use options::*;
pub use stats::calculate_statistics;
pub use types::*;
