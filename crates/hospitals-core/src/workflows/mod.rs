//! # Workflows Module
//!
//! High-level entry points that run a complete search over a configured grid.
//!
//! - **Climb Workflow** ([`climb`]) - One hill-climbing run from a random placement,
//!   rendering a frame per accepted move when snapshots are configured.
//! - **Restart Workflow** ([`restart`]) - Repeated hill climbing from independent random
//!   placements, keeping the cheapest result. Runs on the rayon pool with the `parallel`
//!   feature.

pub mod climb;
pub mod restart;
