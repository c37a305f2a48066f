//! The roster actor: owns all patient and doctor state and runs the
//! reconciliation pass after every mutation.

pub mod error;
pub mod reconciler;
pub mod service;

pub use error::*;
pub use reconciler::*;
pub use service::*;
