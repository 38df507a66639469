//! Tasks for the hospital placement search.
//!
//! Tasks are the computational units the workflows are assembled from: evaluating the
//! single-step neighbourhood of a placement and running a steepest-descent hill climb
//! over it.

pub mod hill_climb;
pub mod neighborhood;
