pub mod doctor;
pub mod patient;
pub mod snapshot;

pub use doctor::*;
pub use patient::*;
pub use snapshot::*;
