#[cfg(test)]
mod tests {
    use crate::clients::RosterClient;
    use crate::domain::{DoctorDraft, PatientDraft};
    use crate::roster_actor::RosterService;

    /// Start a live roster actor and hand back its client.
    fn start_roster() -> RosterClient {
        let (service, client) = RosterService::new(16);
        tokio::spawn(service.run());
        client
    }

    #[tokio::test]
    async fn add_patient_appends_assigns_and_clears_draft() {
        let client = start_roster();

        let (patients, doctors) = client.counts().await.unwrap();
        assert_eq!((patients, doctors), (2, 3));

        client
            .set_patient_draft(PatientDraft::new("Maria Garcia", "58", "Pneumonia"))
            .await
            .unwrap();
        let id = client.add_patient().await.unwrap();
        assert_eq!(id, Some(3));

        let snapshot = client.snapshot().await.unwrap();
        assert_eq!(snapshot.patients.len(), 3);
        assert_eq!(snapshot.patient_draft, PatientDraft::default());

        let new_patient = &snapshot.patients[2];
        assert!(new_patient.admitted);
        // Third patient picks up the only doctor still free
        assert_eq!(
            new_patient.assigned_doctor.as_deref(),
            Some("Dr. Carol Brown")
        );
    }

    #[tokio::test]
    async fn rejected_submission_keeps_roster_and_draft() {
        let client = start_roster();

        let bad_drafts = [
            PatientDraft::new("", "58", "Pneumonia"),
            PatientDraft::new("Maria Garcia", "58", ""),
            PatientDraft::new("Maria Garcia", "fifty-eight", "Pneumonia"),
        ];

        for draft in bad_drafts {
            client.set_patient_draft(draft.clone()).await.unwrap();
            assert_eq!(client.add_patient().await.unwrap(), None);

            let snapshot = client.snapshot().await.unwrap();
            assert_eq!(snapshot.patients.len(), 2);
            // The draft is kept for correction, not cleared
            assert_eq!(snapshot.patient_draft, draft);
        }
    }

    #[tokio::test]
    async fn submitting_an_empty_draft_twice_is_a_noop() {
        let client = start_roster();

        client
            .set_patient_draft(PatientDraft::new("Maria Garcia", "58", "Pneumonia"))
            .await
            .unwrap();
        assert_eq!(client.add_patient().await.unwrap(), Some(3));
        // Draft was cleared by the first submit
        assert_eq!(client.add_patient().await.unwrap(), None);

        let (patients, _) = client.counts().await.unwrap();
        assert_eq!(patients, 3);
    }

    #[tokio::test]
    async fn toggle_admission_is_an_involution() {
        let client = start_roster();

        assert_eq!(client.toggle_admission(1).await.unwrap(), Some(false));
        assert_eq!(client.toggle_admission(1).await.unwrap(), Some(true));

        let patients = client.patients().await.unwrap();
        assert!(patients[0].admitted);
    }

    #[tokio::test]
    async fn toggling_an_unknown_patient_is_ignored() {
        let client = start_roster();

        assert_eq!(client.toggle_admission(99).await.unwrap(), None);

        let patients = client.patients().await.unwrap();
        assert!(patients.iter().all(|p| p.admitted));
    }

    #[tokio::test]
    async fn direct_assignment_allows_sharing_a_doctor() {
        let client = start_roster();

        client
            .assign_doctor(1, "Dr. Bob Williams".to_string())
            .await
            .unwrap();
        client
            .assign_doctor(2, "Dr. Bob Williams".to_string())
            .await
            .unwrap();

        let patients = client.patients().await.unwrap();
        assert_eq!(
            patients[0].assigned_doctor.as_deref(),
            Some("Dr. Bob Williams")
        );
        assert_eq!(
            patients[1].assigned_doctor.as_deref(),
            Some("Dr. Bob Williams")
        );
    }

    #[tokio::test]
    async fn patients_stay_unassigned_until_a_doctor_arrives() {
        let client = start_roster();

        client
            .set_patient_draft(PatientDraft::new("Maria Garcia", "58", "Pneumonia"))
            .await
            .unwrap();
        client.add_patient().await.unwrap();
        client
            .set_patient_draft(PatientDraft::new("Tom Baker", "61", "Gout"))
            .await
            .unwrap();
        let fourth = client.add_patient().await.unwrap().unwrap();

        // All three doctors are taken at this point
        let patients = client.patients().await.unwrap();
        assert_eq!(patients[3].id, fourth);
        assert_eq!(patients[3].assigned_doctor, None);

        // Registering a doctor triggers reconciliation for the waiting patient
        client
            .set_doctor_draft(DoctorDraft::new("Dr. Dan Lee", "Cardiology"))
            .await
            .unwrap();
        assert_eq!(client.add_doctor().await.unwrap(), Some(4));

        let patients = client.patients().await.unwrap();
        assert_eq!(patients[3].assigned_doctor.as_deref(), Some("Dr. Dan Lee"));
    }

    #[tokio::test]
    async fn observers_see_published_snapshots() {
        let client = start_roster();
        let mut changes = client.subscribe().await.unwrap();

        client.toggle_admission(1).await.unwrap();
        changes.changed().await.unwrap();

        let snapshot = changes.borrow_and_update().clone();
        assert!(!snapshot.patients[0].admitted);
    }

    #[tokio::test]
    async fn shutdown_stops_the_actor() {
        let client = start_roster();
        let mut changes = client.subscribe().await.unwrap();

        client.shutdown().await.unwrap();
        // The change feed closes when the actor drops its state
        assert!(changes.changed().await.is_err());

        assert!(client.patients().await.is_err());
    }
}
