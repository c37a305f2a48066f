mod app_system;
mod clients;
mod domain;
mod messages;
mod roster_actor;
mod view;

#[cfg(test)]
mod integration_tests;

use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, RosterSystem};
use crate::domain::{DoctorDraft, PatientDraft};
use crate::roster_actor::RosterError;

#[tokio::main]
async fn main() -> Result<(), RosterError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting ward roster application");

    // Create the system (starts the roster actor with the seeded lists)
    let system = RosterSystem::new();

    // The view re-renders on every snapshot the actor publishes
    let changes = system.roster_client.subscribe().await?;
    let view_handle = tokio::spawn(view::run(changes));

    let span = tracing::info_span!("patient_intake");
    let patient_id = async {
        info!("Admitting a new patient");
        system
            .roster_client
            .set_patient_draft(PatientDraft::new("Maria Garcia", "58", "Pneumonia"))
            .await?;
        system.roster_client.add_patient().await
    }
    .instrument(span)
    .await?;

    match patient_id {
        Some(id) => info!(patient_id = id, "Patient admitted"),
        None => error!("Patient intake rejected"),
    }

    let span = tracing::info_span!("doctor_onboarding");
    let doctor_id = async {
        info!("Registering a new doctor");
        system
            .roster_client
            .set_doctor_draft(DoctorDraft::new("Dr. Dan Lee", "Cardiology"))
            .await?;
        system.roster_client.add_doctor().await
    }
    .instrument(span)
    .await?;

    match doctor_id {
        Some(id) => info!(doctor_id = id, "Doctor registered"),
        None => error!("Doctor registration rejected"),
    }

    // Discharge the first seeded patient
    if let Some(admitted) = system.roster_client.toggle_admission(1).await? {
        info!(patient_id = 1, admitted, "Admission toggled");
    }

    // Reassign the second patient by hand
    system
        .roster_client
        .assign_doctor(2, "Dr. Carol Brown".to_string())
        .await?;

    let roster = system.roster_client.snapshot().await?;
    info!(
        patients = roster.patients.len(),
        doctors = roster.doctors.len(),
        "Final roster"
    );

    // Shutdown system gracefully; the view loop ends when the feed closes
    system.shutdown().await?;
    if let Err(e) = view_handle.await {
        error!(error = ?e, "View task failed");
    }

    info!("Application completed successfully");
    Ok(())
}
