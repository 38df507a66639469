//! # Hospitals Core Library
//!
//! A small local-search library for a discrete facility-location problem: given a
//! fixed set of houses on a bounded grid, choose where to put a fixed number of
//! hospitals so that the total walking (Manhattan) distance from every house to its
//! nearest hospital is as small as possible.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Grid`, `Cell`, `Placement`),
//!   the pure cost function (`scoring`), and the rendering seam used to visualize a
//!   grid state.
//!
//! - **[`engine`]: The Logic Core.** Configuration, errors, progress reporting, and the
//!   optimization tasks themselves: neighbourhood evaluation and steepest-descent
//!   hill climbing.
//!
//! - **[`workflows`]: The Public API.** Complete procedures built on top of the engine:
//!   a single hill-climbing run and the random-restart driver.

pub mod core;
pub mod engine;
pub mod workflows;
