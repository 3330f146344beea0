//! Structural analysis of rectangular binary terrain grids.
//!
//! A [`Territory`](territory::Territory) is an immutable grid of free and
//! mountain cells addressed by letter-number coordinates (`A1`..`Z99`).
//! On top of it the crate answers connectivity questions: the
//! [`chain`](chain::chain) of same-valued cells through a coordinate, the
//! [`valley`](valley::valley) of free ground bordering a mountain chain,
//! and whole-grid aggregates in [`analysis`].

pub mod analysis;
pub mod chain;
pub mod coord;
pub mod error;
pub mod parser;
mod render;
pub mod territory;
pub mod valley;

pub use analysis::{mountain_chain_count, mountain_count, total_valley_area};
pub use chain::{chain, connected};
pub use coord::Coord;
pub use error::TerritoryError;
pub use parser::{parse_coord, parse_territory};
pub use territory::{Cell, Territory};
pub use valley::valley;
