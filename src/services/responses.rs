use crate::models::{DialogResponse, IntentName, Slots};

pub fn elicit_slot(slot_name: &str, message: &str) -> DialogResponse {
    DialogResponse::ElicitSlot {
        slot_to_elicit: slot_name.to_string(),
        message: message.to_string(),
    }
}

pub fn delegate(message: &str) -> DialogResponse {
    DialogResponse::Delegate {
        message: message.to_string(),
    }
}

/// Marks the intent fulfilled and echoes the slots back. The booking itself
/// is not recorded anywhere.
pub fn close(intent: IntentName, slots: &Slots, confirmation_message: &str) -> DialogResponse {
    DialogResponse::Close {
        intent_name: intent.as_str().to_string(),
        slots: slots.clone(),
        message: confirmation_message.to_string(),
    }
}
