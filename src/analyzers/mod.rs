//! Listing aggregation and the analyses built on top of it.
//!
//! Each aggregator resolves its columns against one snapshot header, runs
//! every row through the matching validator and accumulates the accepted
//! records into a structure owned by that call. The derived analyses
//! (histogram, largest price change, correlation) consume those structures.

pub mod analyzer;
pub mod change;
pub mod correlation;
pub mod distribution;
pub mod hosts;
pub mod neighborhood;
pub mod series;
pub mod types;
pub mod utility;
