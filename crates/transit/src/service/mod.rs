//! Business rules on top of the stores.
//!
//! The stores are thin pass-throughs; uniqueness and existence checks live
//! here, applied once per operation before any mutation.

pub mod lines;
pub mod stations;

pub use lines::LineService;
pub use stations::StationService;
