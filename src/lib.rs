//! Interactive grid pathfinding.
//!
//! A [`Session`] owns a square [`Grid`] that callers paint with a start, an end
//! and obstacles, then search with A* or Dijkstra. The engine reports every
//! node expansion to a [`RenderPort`] so a front end can animate the search.

pub mod algorithms;
pub mod config;
pub mod grid;
pub mod reference;
pub mod render;
pub mod session;
pub mod simulation;
pub mod statistics;

pub use config::{AlgorithmVariant, CostPolicy, NeighborMode, SearchConfig};
pub use grid::{CellState, Grid, GridError, Position};
pub use render::{FrameCounter, NoopRenderer, RenderPort, TerminalRenderer};
pub use session::Session;
pub use statistics::{SearchOutcome, SearchReport};
