//! lptools - reports over a LiquidPlanner workspace
//!
//! Fetches the members and tasks of one workspace and prints who and what
//! has (or has not) been updated in the last N days.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;

pub use api::{ApiError, LpApi};
pub use config::{Config, ConfigError};
pub use domain::{Member, MemberId, Task};
