// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod aggregate_stats;
mod client_config;
mod error;
mod human_size;
mod object_versions;
mod size_unit;
mod version_lister;

pub use aggregate_stats::*;
pub use client_config::*;
pub use error::*;
pub use human_size::*;
pub use object_versions::*;
pub use size_unit::*;
pub use version_lister::*;
