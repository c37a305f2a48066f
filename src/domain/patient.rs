/// A patient on the ward roster.
///
/// `assigned_doctor` holds a doctor *name*, not an id; it is filled in by
/// the reconciliation pass or by an explicit assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub condition: String,
    pub admitted: bool,
    pub assigned_doctor: Option<String>,
}

impl Patient {
    /// Creates a new Patient instance.
    ///
    /// New patients start admitted and unassigned; the reconciliation pass
    /// picks a doctor for them afterwards.
    pub fn new(id: u32, name: impl Into<String>, age: u32, condition: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            condition: condition.into(),
            admitted: true,
            assigned_doctor: None,
        }
    }
}

/// Pending form input for a new patient.
///
/// Field values stay as raw strings until submission; `age` in particular is
/// only parsed when the form is submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientDraft {
    pub name: String,
    pub age: String,
    pub condition: String,
}

impl PatientDraft {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            condition: condition.into(),
        }
    }

    /// Submit-time validation. An empty name or condition, or an age that is
    /// not an integer, rejects the whole draft.
    pub fn validate(&self) -> Option<(String, u32, String)> {
        let name = self.name.trim();
        let condition = self.condition.trim();
        let age: u32 = self.age.trim().parse().ok()?;
        if name.is_empty() || condition.is_empty() {
            return None;
        }
        Some((name.to_string(), age, condition.to_string()))
    }
}
