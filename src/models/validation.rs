/// Outcome of checking one or more slots. Every rejection names its slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { violated_slot: String, message: String },
}

impl ValidationResult {
    pub fn invalid(slot: &str, message: impl Into<String>) -> Self {
        ValidationResult::Invalid {
            violated_slot: slot.to_string(),
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn violated_slot(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { violated_slot, .. } => Some(violated_slot),
        }
    }
}
