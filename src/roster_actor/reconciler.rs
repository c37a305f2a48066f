use std::collections::HashSet;

use crate::domain::{Doctor, Patient};

/// Fill in missing doctor assignments.
///
/// Walks patients in list order; each unassigned patient receives the first
/// doctor, in list order, whose name no patient currently holds — counting
/// assignments made earlier in the same pass, so one pass never hands the
/// same doctor to two patients. Patients stay unassigned when every doctor
/// is taken. Matching is by doctor name.
///
/// Returns the number of assignments made.
pub fn assign_available_doctors(patients: &mut [Patient], doctors: &[Doctor]) -> usize {
    let mut taken: HashSet<String> = patients
        .iter()
        .filter_map(|p| p.assigned_doctor.clone())
        .collect();

    let mut assigned = 0;
    for patient in patients.iter_mut() {
        if patient.assigned_doctor.is_some() {
            continue;
        }
        if let Some(doctor) = doctors.iter().find(|d| !taken.contains(&d.name)) {
            taken.insert(doctor.name.clone());
            patient.assigned_doctor = Some(doctor.name.clone());
            assigned += 1;
        }
    }
    assigned
}
