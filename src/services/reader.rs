use crate::errors::AppError;
use crate::models::{IntentName, InvocationPhase, LexEvent, Slots};

/// Everything the dispatcher needs from one code hook invocation.
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    pub intent: IntentName,
    pub phase: InvocationPhase,
    pub slots: Slots,
    /// Slot the dialog manager prompted for last turn, i.e. the one the user just answered.
    pub elicited_slot: Option<String>,
    pub session_id: Option<String>,
}

pub fn read_event(body: &[u8]) -> Result<InvocationRequest, AppError> {
    let event: LexEvent = serde_json::from_slice(body)?;
    tracing::debug!(?event, "received code hook event");
    from_event(event)
}

pub fn from_event(event: LexEvent) -> Result<InvocationRequest, AppError> {
    let phase: InvocationPhase = event.invocation_source.parse()?;
    let intent: IntentName = event.session_state.intent.name.parse()?;

    let elicited_slot = event
        .session_state
        .dialog_action
        .and_then(|action| action.slot_to_elicit)
        .filter(|name| !name.is_empty());

    Ok(InvocationRequest {
        intent,
        phase,
        slots: event.session_state.intent.slots,
        elicited_slot,
        session_id: event.session_id,
    })
}
