//! Design pattern demonstrations.
//!
//! - [`domain::factory`]: themed unit factories (abstract factory)
//! - [`domain::composite`]: in-memory folder tree (composite)
//! - [`domain::strategy`]: interchangeable arithmetic (strategy)
//!
//! The `patterns` binary drives the demos; see [`cli`].

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;
