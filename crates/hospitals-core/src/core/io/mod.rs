//! Provides the output seam for grid states.
//!
//! The search never depends on a renderer being present. This module only defines the
//! interface; concrete image writers live with the front ends that need them.

pub mod render;
