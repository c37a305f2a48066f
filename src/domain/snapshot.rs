use super::{Doctor, DoctorDraft, Patient, PatientDraft};

/// Immutable projection of the roster, published to observers after every
/// change. The view renders from this and holds no state of its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterSnapshot {
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
    pub patient_draft: PatientDraft,
    pub doctor_draft: DoctorDraft,
}
