//! Patient inflammation statistics: load CSV tables, reduce them per day,
//! and view the resulting line charts.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod state;
pub mod ui;

pub use error::{Result, Shape, StatsError};
