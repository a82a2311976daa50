use crate::config::AppConfig;
use crate::models::{DialogResponse, IntentName, InvocationPhase, Slots, ValidationResult};
use crate::services::reader::InvocationRequest;
use crate::services::{responses, validator};

pub fn dispatch(request: &InvocationRequest, config: &AppConfig) -> DialogResponse {
    tracing::info!(
        intent = request.intent.as_str(),
        phase = request.phase.as_str(),
        session_id = request.session_id.as_deref().unwrap_or("-"),
        "dispatching invocation"
    );

    match request.intent {
        IntentName::BookAppointment => book_appointment(request, config),
    }
}

fn book_appointment(request: &InvocationRequest, config: &AppConfig) -> DialogResponse {
    match request.phase {
        InvocationPhase::Dialog => {
            let validation = validate_latest_turn(&request.slots, request.elicited_slot.as_deref());
            match validation {
                ValidationResult::Valid => responses::delegate(&config.delegate_message),
                ValidationResult::Invalid {
                    violated_slot,
                    message,
                } => {
                    tracing::info!(slot = %violated_slot, "slot rejected, eliciting again");
                    responses::elicit_slot(&violated_slot, &message)
                }
            }
        }
        // Slots were validated turn by turn during the dialog phase.
        InvocationPhase::Fulfillment => {
            responses::close(request.intent, &request.slots, &config.confirmation_message)
        }
    }
}

/// Validates only what the user just answered. Without a hint from the
/// dialog manager every filled slot is checked on its own; unfilled slots
/// have not been asked for yet.
fn validate_latest_turn(slots: &Slots, elicited_slot: Option<&str>) -> ValidationResult {
    if let Some(name) = elicited_slot.filter(|name| slots.contains_key(*name)) {
        return validator::validate_one_slot(slots, name);
    }

    slots
        .iter()
        .filter(|(_, slot)| slot.is_some())
        .map(|(name, _)| validator::validate_one_slot(slots, name))
        .find(|result| !result.is_valid())
        .unwrap_or(ValidationResult::Valid)
}
