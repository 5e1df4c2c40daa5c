//! Commonly used types for ease of import.

pub use crate::{Grid, GridError, StandardGrid, COLUMNS, ROWS};

#[cfg(feature = "std")]
pub use crate::{init_logging, GridState};
