use tracing::{error, info, instrument};

use crate::clients::RosterClient;
use crate::roster_actor::{RosterError, RosterService};

/// The application system: starts the roster actor, hands out its client,
/// and shuts everything down in order.
pub struct RosterSystem {
    pub roster_client: RosterClient,
    handle: tokio::task::JoinHandle<()>,
}

impl Default for RosterSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterSystem {
    #[instrument(name = "roster_system")]
    pub fn new() -> Self {
        info!("Starting roster system");

        let (service, roster_client) = RosterService::new(32);
        let handle = tokio::spawn(service.run());

        info!("Roster system started successfully");

        Self {
            roster_client,
            handle,
        }
    }

    /// Gracefully shut down: ask the actor to stop, then wait for its task.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), RosterError> {
        info!("Shutting down roster system");

        let _ = self.roster_client.shutdown().await;

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Roster actor task failed");
            return Err(RosterError::ActorCommunicationError(format!(
                "Roster actor task failed: {e:?}"
            )));
        }

        info!("Roster system shutdown complete");
        Ok(())
    }
}
