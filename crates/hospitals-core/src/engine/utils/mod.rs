//! Utility functions for the engine module.
//!
//! Randomized helpers shared by the search tasks: drawing a random initial placement and
//! picking uniformly among equally good candidates. Every helper takes the generator as
//! an argument so callers control seeding.

pub mod sampling;
