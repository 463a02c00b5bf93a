//! Application layer: snapshot loading and extraction use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod services;
pub mod snapshot;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::{IoResultExt, JsonResultExt};
pub use snapshot::{Snapshot, SnapshotNode, SnapshotStyles, TRANSPARENT};
