use tokio::sync::{oneshot, watch};

use crate::domain::{Doctor, DoctorDraft, Patient, PatientDraft, RosterSnapshot};
use crate::roster_actor::RosterError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the roster actor. Each variant carries its parameters
/// and a oneshot channel for the response.
///
/// Mutations answer with data rather than errors: a rejected submission or an
/// unknown patient id is a silent no-op reported as `None`, never an `Err`.
#[derive(Debug)]
pub enum RosterRequest {
    SetPatientDraft {
        draft: PatientDraft,
        respond_to: ServiceResponse<(), RosterError>,
    },
    SetDoctorDraft {
        draft: DoctorDraft,
        respond_to: ServiceResponse<(), RosterError>,
    },
    /// Submit the pending patient draft. Responds with the new patient id,
    /// or `None` when the draft fails validation (the draft is kept).
    AddPatient {
        respond_to: ServiceResponse<Option<u32>, RosterError>,
    },
    /// Submit the pending doctor draft. Same contract as `AddPatient`.
    AddDoctor {
        respond_to: ServiceResponse<Option<u32>, RosterError>,
    },
    /// Flip the admitted flag. Responds with the new state, or `None` for an
    /// unknown patient id.
    ToggleAdmission {
        patient_id: u32,
        respond_to: ServiceResponse<Option<bool>, RosterError>,
    },
    /// Overwrite a patient's doctor assignment. No uniqueness check.
    AssignDoctor {
        patient_id: u32,
        doctor_name: String,
        respond_to: ServiceResponse<(), RosterError>,
    },
    ListPatients {
        respond_to: ServiceResponse<Vec<Patient>, RosterError>,
    },
    ListDoctors {
        respond_to: ServiceResponse<Vec<Doctor>, RosterError>,
    },
    Snapshot {
        respond_to: ServiceResponse<RosterSnapshot, RosterError>,
    },
    /// Hand out a receiver on the change feed; a fresh snapshot is published
    /// there after every mutation.
    Subscribe {
        respond_to: ServiceResponse<watch::Receiver<RosterSnapshot>, RosterError>,
    },
    Shutdown,
    #[cfg(test)]
    GetCounts {
        respond_to: ServiceResponse<(usize, usize), RosterError>,
    },
}
