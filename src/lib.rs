#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
mod state;

pub use common::*;
pub use config::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level};
#[cfg(feature = "std")]
pub use state::GridState;
