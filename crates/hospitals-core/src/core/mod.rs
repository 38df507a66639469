//! # Core Module
//!
//! This module provides the fundamental building blocks of the hospital placement
//! problem: the grid and its houses, hospital placements, and the cost function that
//! scores a placement.
//!
//! ## Architecture
//!
//! - **Problem Representation** ([`models`]) - Cells, the bounded grid with its fixed house
//!   set, and hospital placements
//! - **Cost Evaluation** ([`scoring`]) - Total Manhattan distance from every house to its
//!   nearest hospital
//! - **Visualization Seam** ([`io`]) - The interface through which grid states are rendered
//!
//! Nothing in this layer holds search state or randomness; every function here is a pure
//! function of its inputs.

pub mod io;
pub mod models;
pub mod scoring;
