//! Stateless projection of the roster into text.
//!
//! The view owns nothing: it renders whatever snapshot the actor last
//! published and re-renders whenever a new one arrives on the change feed.

use std::fmt::Write;

use tokio::sync::watch;
use tracing::{debug, info, instrument};

use crate::domain::RosterSnapshot;

/// Render a snapshot as the full roster screen: the two add-forms with their
/// current draft values, then the patient and doctor cards.
pub fn render(snapshot: &RosterSnapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Ward Roster ===");
    let _ = writeln!(out);

    let _ = writeln!(out, "--- Add New Patient ---");
    let _ = writeln!(
        out,
        "Name: [{}]  Age: [{}]  Condition: [{}]",
        snapshot.patient_draft.name, snapshot.patient_draft.age, snapshot.patient_draft.condition
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "--- Add New Doctor ---");
    let _ = writeln!(
        out,
        "Name: [{}]  Specialty: [{}]",
        snapshot.doctor_draft.name, snapshot.doctor_draft.specialty
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "--- Patient List ---");
    for patient in &snapshot.patients {
        let _ = writeln!(out, "{}", patient.name);
        let _ = writeln!(out, "  Age: {}", patient.age);
        let _ = writeln!(out, "  Condition: {}", patient.condition);
        let _ = writeln!(
            out,
            "  Status: {}",
            if patient.admitted {
                "Admitted"
            } else {
                "Discharged"
            }
        );
        let _ = writeln!(
            out,
            "  Assigned Doctor: {}",
            patient.assigned_doctor.as_deref().unwrap_or("None")
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "--- Doctor List ---");
    for doctor in &snapshot.doctors {
        let _ = writeln!(out, "{}", doctor.name);
        let _ = writeln!(out, "  Specialty: {}", doctor.specialty);
    }

    out
}

/// Observer loop: render the current snapshot, then re-render on every
/// published change until the actor goes away.
#[instrument(name = "view", skip(changes))]
pub async fn run(mut changes: watch::Receiver<RosterSnapshot>) {
    info!("View observer starting");

    loop {
        let frame = {
            let snapshot = changes.borrow_and_update();
            render(&snapshot)
        };
        println!("{frame}");
        debug!("Rendered roster");

        if changes.changed().await.is_err() {
            break;
        }
    }

    info!("View observer stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Doctor, Patient, PatientDraft};

    #[test]
    fn renders_patient_and_doctor_cards() {
        let mut patient = Patient::new(1, "John Doe", 45, "Flu");
        patient.assigned_doctor = Some("Dr. Alice Johnson".to_string());
        let snapshot = RosterSnapshot {
            patients: vec![patient],
            doctors: vec![Doctor::new(1, "Dr. Alice Johnson", "General Medicine")],
            ..RosterSnapshot::default()
        };

        let frame = render(&snapshot);

        assert!(frame.contains("John Doe"));
        assert!(frame.contains("Age: 45"));
        assert!(frame.contains("Condition: Flu"));
        assert!(frame.contains("Status: Admitted"));
        assert!(frame.contains("Assigned Doctor: Dr. Alice Johnson"));
        assert!(frame.contains("Specialty: General Medicine"));
    }

    #[test]
    fn renders_discharged_and_unassigned_states() {
        let mut patient = Patient::new(2, "Jane Smith", 32, "Broken Arm");
        patient.admitted = false;
        let snapshot = RosterSnapshot {
            patients: vec![patient],
            ..RosterSnapshot::default()
        };

        let frame = render(&snapshot);

        assert!(frame.contains("Status: Discharged"));
        assert!(frame.contains("Assigned Doctor: None"));
    }

    #[test]
    fn renders_draft_values_in_the_forms() {
        let snapshot = RosterSnapshot {
            patient_draft: PatientDraft::new("Maria Garcia", "58", "Pneumonia"),
            ..RosterSnapshot::default()
        };

        let frame = render(&snapshot);

        assert!(frame.contains("Name: [Maria Garcia]  Age: [58]  Condition: [Pneumonia]"));
    }
}
