use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, instrument};

use crate::domain::{Doctor, DoctorDraft, Patient, PatientDraft, RosterSnapshot};
use crate::messages::RosterRequest;
use crate::roster_actor::RosterError;

/// Generate client methods with oneshot channel boilerplate and automatic
/// tracing. Transport failures surface as `RosterError`.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, RosterError> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|e| RosterError::ActorCommunicationError(e.to_string()))?;

                response
                    .await
                    .map_err(|e| RosterError::ActorCommunicationError(e.to_string()))?
            }
        }
    };
}

/// Client for the roster actor. Thin wrapper around the request channel;
/// methods are macro-generated.
#[derive(Clone)]
pub struct RosterClient {
    sender: mpsc::Sender<RosterRequest>,
}

impl RosterClient {
    pub fn new(sender: mpsc::Sender<RosterRequest>) -> Self {
        Self { sender }
    }

    /// Manual method: shutdown carries no response channel.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), RosterError> {
        debug!("Sending shutdown request");
        self.sender
            .send(RosterRequest::Shutdown)
            .await
            .map_err(|e| RosterError::ActorCommunicationError(e.to_string()))?;
        Ok(())
    }
}

client_method!(RosterClient => fn set_patient_draft(draft: PatientDraft) -> () as RosterRequest::SetPatientDraft);
client_method!(RosterClient => fn set_doctor_draft(draft: DoctorDraft) -> () as RosterRequest::SetDoctorDraft);
client_method!(RosterClient => fn add_patient() -> Option<u32> as RosterRequest::AddPatient);
client_method!(RosterClient => fn add_doctor() -> Option<u32> as RosterRequest::AddDoctor);
client_method!(RosterClient => fn toggle_admission(patient_id: u32) -> Option<bool> as RosterRequest::ToggleAdmission);
client_method!(RosterClient => fn assign_doctor(patient_id: u32, doctor_name: String) -> () as RosterRequest::AssignDoctor);
client_method!(RosterClient => fn patients() -> Vec<Patient> as RosterRequest::ListPatients);
client_method!(RosterClient => fn doctors() -> Vec<Doctor> as RosterRequest::ListDoctors);
client_method!(RosterClient => fn snapshot() -> RosterSnapshot as RosterRequest::Snapshot);
client_method!(RosterClient => fn subscribe() -> watch::Receiver<RosterSnapshot> as RosterRequest::Subscribe);

// Test-only method for internal state inspection
#[cfg(test)]
client_method!(RosterClient => fn counts() -> (usize, usize) as RosterRequest::GetCounts);
