//! Board state: the line and box matrices.

pub mod grid;

pub use grid::{BoxCoord, Grid, LineKind};
