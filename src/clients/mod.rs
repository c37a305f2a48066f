pub mod roster_client;

pub use roster_client::*;
