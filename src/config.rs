//! Default grid dimensions and runtime configuration names.

/// Number of rows on the standard grid.
pub const ROWS: usize = 7;
/// Number of columns on the standard grid.
pub const COLUMNS: usize = 7;

/// Total number of cells on the standard grid.
pub const TOTAL_CELLS: usize = ROWS * COLUMNS;

/// Environment variable read by [`init_logging`](crate::init_logging).
pub const LOG_ENV_VAR: &str = "SHIPGRID_LOG";
