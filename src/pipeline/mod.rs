//! Pipeline module - load, derive and analyse the injury table

pub mod columns;
pub mod comparison;
pub mod correlation;
pub mod derive;
pub mod error;
pub mod insights;
pub mod loader;
pub mod projection;
pub mod records;

pub use comparison::*;
pub use correlation::*;
pub use derive::*;
pub use error::DatasetError;
pub use insights::*;
pub use loader::*;
pub use projection::*;
pub use records::*;
