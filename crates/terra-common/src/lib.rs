//! # Terra Common
//!
//! Common types shared by the Project Terra crates.
//!
//! This crate provides:
//! - Cell coordinates and validated grid extents
//! - The 26-cell neighborhood offset table
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod error;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::error::*;
}

pub use prelude::*;
