//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external collaborator (the disk, a trained model). Implementations live
//! in `src/adapters/`.

pub mod filesystem;
pub mod model;

pub use filesystem::FileSystem;
pub use model::{FeatureVector, ModelHandle, Outcome};
