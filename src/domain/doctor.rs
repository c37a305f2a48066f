/// A doctor available for patient assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub specialty: String,
}

impl Doctor {
    pub fn new(id: u32, name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            specialty: specialty.into(),
        }
    }
}

/// Pending form input for a new doctor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorDraft {
    pub name: String,
    pub specialty: String,
}

impl DoctorDraft {
    pub fn new(name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialty: specialty.into(),
        }
    }

    /// Submit-time validation: both fields must be non-empty.
    pub fn validate(&self) -> Option<(String, String)> {
        let name = self.name.trim();
        let specialty = self.specialty.trim();
        if name.is_empty() || specialty.is_empty() {
            return None;
        }
        Some((name.to_string(), specialty.to_string()))
    }
}
