#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// module containing parallization utilities.
pub mod parallel;

/// operations to threshold images.
pub mod threshold;
