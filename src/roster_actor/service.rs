use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

use super::reconciler::assign_available_doctors;
use crate::clients::RosterClient;
use crate::domain::{Doctor, DoctorDraft, Patient, PatientDraft, RosterSnapshot};
use crate::messages::{RosterRequest, ServiceResponse};
use crate::roster_actor::RosterError;

/// The roster actor: exclusive owner of the patient and doctor lists plus the
/// two pending form buffers.
///
/// Every mutation follows the same pipeline: mutate, run the reconciliation
/// pass, publish a fresh snapshot on the change feed. Observers (the view,
/// tests) re-render from snapshots and never touch this state directly.
pub struct RosterService {
    receiver: mpsc::Receiver<RosterRequest>,
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    patient_draft: PatientDraft,
    doctor_draft: DoctorDraft,
    changes: watch::Sender<RosterSnapshot>,
}

fn seed_patients() -> Vec<Patient> {
    vec![
        Patient::new(1, "John Doe", 45, "Flu"),
        Patient::new(2, "Jane Smith", 32, "Broken Arm"),
    ]
}

fn seed_doctors() -> Vec<Doctor> {
    vec![
        Doctor::new(1, "Dr. Alice Johnson", "General Medicine"),
        Doctor::new(2, "Dr. Bob Williams", "Orthopedics"),
        Doctor::new(3, "Dr. Carol Brown", "Pediatrics"),
    ]
}

impl RosterService {
    /// Creates the service with the seeded roster and a client for it.
    ///
    /// The reconciliation pass runs once over the seed data, so the initial
    /// snapshot already has doctors assigned.
    pub fn new(buffer_size: usize) -> (Self, RosterClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);

        let mut patients = seed_patients();
        let doctors = seed_doctors();
        assign_available_doctors(&mut patients, &doctors);

        let (changes, _) = watch::channel(RosterSnapshot {
            patients: patients.clone(),
            doctors: doctors.clone(),
            patient_draft: PatientDraft::default(),
            doctor_draft: DoctorDraft::default(),
        });

        let service = Self {
            receiver,
            patients,
            doctors,
            patient_draft: PatientDraft::default(),
            doctor_draft: DoctorDraft::default(),
            changes,
        };
        let client = RosterClient::new(sender);
        (service, client)
    }

    /// Main actor loop. Delegates each message to a handler; all handlers are
    /// synchronous in-memory operations.
    #[instrument(name = "roster_service", skip(self))]
    pub async fn run(mut self) {
        info!("RosterService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RosterRequest::SetPatientDraft { draft, respond_to } => {
                    self.handle_set_patient_draft(draft, respond_to);
                }
                RosterRequest::SetDoctorDraft { draft, respond_to } => {
                    self.handle_set_doctor_draft(draft, respond_to);
                }
                RosterRequest::AddPatient { respond_to } => {
                    self.handle_add_patient(respond_to);
                }
                RosterRequest::AddDoctor { respond_to } => {
                    self.handle_add_doctor(respond_to);
                }
                RosterRequest::ToggleAdmission {
                    patient_id,
                    respond_to,
                } => {
                    self.handle_toggle_admission(patient_id, respond_to);
                }
                RosterRequest::AssignDoctor {
                    patient_id,
                    doctor_name,
                    respond_to,
                } => {
                    self.handle_assign_doctor(patient_id, doctor_name, respond_to);
                }
                RosterRequest::ListPatients { respond_to } => {
                    let _ = respond_to.send(Ok(self.patients.clone()));
                }
                RosterRequest::ListDoctors { respond_to } => {
                    let _ = respond_to.send(Ok(self.doctors.clone()));
                }
                RosterRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.snapshot()));
                }
                RosterRequest::Subscribe { respond_to } => {
                    let _ = respond_to.send(Ok(self.changes.subscribe()));
                }
                RosterRequest::Shutdown => {
                    info!("RosterService shutting down");
                    break;
                }
                #[cfg(test)]
                RosterRequest::GetCounts { respond_to } => {
                    let _ = respond_to.send(Ok((self.patients.len(), self.doctors.len())));
                }
            }
        }

        info!("RosterService stopped");
    }

    #[instrument(skip(self, draft, respond_to))]
    fn handle_set_patient_draft(
        &mut self,
        draft: PatientDraft,
        respond_to: ServiceResponse<(), RosterError>,
    ) {
        debug!("Processing set_patient_draft request");

        self.patient_draft = draft;
        self.publish();

        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, draft, respond_to))]
    fn handle_set_doctor_draft(
        &mut self,
        draft: DoctorDraft,
        respond_to: ServiceResponse<(), RosterError>,
    ) {
        debug!("Processing set_doctor_draft request");

        self.doctor_draft = draft;
        self.publish();

        let _ = respond_to.send(Ok(()));
    }

    /// Submits the pending patient draft. A draft that fails validation is a
    /// no-op: the list is unchanged and the draft is kept for correction.
    #[instrument(skip(self, respond_to))]
    fn handle_add_patient(&mut self, respond_to: ServiceResponse<Option<u32>, RosterError>) {
        debug!("Processing add_patient request");

        let added = match self.patient_draft.validate() {
            Some((name, age, condition)) => {
                let id = self.patients.len() as u32 + 1;
                info!(patient_id = id, patient_name = %name, "Patient added");
                self.patients.push(Patient::new(id, name, age, condition));
                self.patient_draft = PatientDraft::default();
                self.reconcile_and_publish();
                Some(id)
            }
            None => {
                warn!("Patient submission rejected, draft kept");
                None
            }
        };

        let _ = respond_to.send(Ok(added));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_add_doctor(&mut self, respond_to: ServiceResponse<Option<u32>, RosterError>) {
        debug!("Processing add_doctor request");

        let added = match self.doctor_draft.validate() {
            Some((name, specialty)) => {
                let id = self.doctors.len() as u32 + 1;
                info!(doctor_id = id, doctor_name = %name, "Doctor added");
                self.doctors.push(Doctor::new(id, name, specialty));
                self.doctor_draft = DoctorDraft::default();
                self.reconcile_and_publish();
                Some(id)
            }
            None => {
                warn!("Doctor submission rejected, draft kept");
                None
            }
        };

        let _ = respond_to.send(Ok(added));
    }

    /// Flips the admitted flag. Unknown ids are a silent no-op.
    #[instrument(fields(patient_id = %patient_id), skip(self, respond_to))]
    fn handle_toggle_admission(
        &mut self,
        patient_id: u32,
        respond_to: ServiceResponse<Option<bool>, RosterError>,
    ) {
        debug!("Processing toggle_admission request");

        let admitted = self
            .patients
            .iter_mut()
            .find(|p| p.id == patient_id)
            .map(|patient| {
                patient.admitted = !patient.admitted;
                patient.admitted
            });

        match admitted {
            Some(admitted) => {
                info!(admitted, "Admission toggled");
                self.reconcile_and_publish();
            }
            None => debug!("Unknown patient id, ignoring"),
        }

        let _ = respond_to.send(Ok(admitted));
    }

    /// Overwrites the patient's assignment with the given doctor name. No
    /// uniqueness check: two patients may end up sharing a doctor this way.
    /// Unknown ids are a silent no-op.
    #[instrument(fields(patient_id = %patient_id, doctor_name = %doctor_name), skip(self, respond_to))]
    fn handle_assign_doctor(
        &mut self,
        patient_id: u32,
        doctor_name: String,
        respond_to: ServiceResponse<(), RosterError>,
    ) {
        debug!("Processing assign_doctor request");

        let found = match self.patients.iter_mut().find(|p| p.id == patient_id) {
            Some(patient) => {
                patient.assigned_doctor = Some(doctor_name);
                true
            }
            None => false,
        };

        if found {
            info!("Doctor assigned");
            self.reconcile_and_publish();
        } else {
            debug!("Unknown patient id, ignoring");
        }

        let _ = respond_to.send(Ok(()));
    }

    fn reconcile_and_publish(&mut self) {
        let assigned = assign_available_doctors(&mut self.patients, &self.doctors);
        if assigned > 0 {
            debug!(assigned, "Reconciliation filled assignments");
        }
        self.publish();
    }

    fn publish(&self) {
        self.changes.send_replace(self.snapshot());
    }

    fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            patients: self.patients.clone(),
            doctors: self.doctors.clone(),
            patient_draft: self.patient_draft.clone(),
            doctor_draft: self.doctor_draft.clone(),
        }
    }
}
