//! # Engine Module
//!
//! The stateful layer of the library: it holds the search configuration and context,
//! reports progress, and implements the optimization tasks that the workflows compose.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Iteration cap and restart count
//! - **Context** ([`context`]) - The validated grid, configuration, reporter and optional
//!   frame output shared by every task of a search
//! - **State Tracking** ([`state`]) - The current search point and the outcome of a run
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-level error type wrapping every layer below
//! - **Tasks** ([`tasks`]) - Neighbourhood evaluation and steepest-descent hill climbing
//! - **Utilities** ([`utils`]) - Seedable random sampling helpers

pub mod config;
pub mod context;
pub mod error;
pub mod progress;
pub mod state;
pub mod tasks;
pub mod utils;
