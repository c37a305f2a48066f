use thiserror::Error;

/// Errors surfaced by the roster actor and its client.
///
/// Domain-level rejections (incomplete form input, unknown ids) are silent
/// no-ops answered with `None`, not errors; only transport failures between
/// client and actor appear here.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RosterError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
