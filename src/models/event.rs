use std::str::FromStr;

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::slot::Slots;

/// Event the dialog manager posts to the code hook.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexEvent {
    pub invocation_source: String,
    #[serde(default)]
    pub session_id: Option<String>,
    pub session_state: SessionState,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default)]
    pub dialog_action: Option<PriorDialogAction>,
    pub intent: IntentState,
}

/// The action the dialog manager took on the previous turn.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorDialogAction {
    #[serde(default)]
    pub slot_to_elicit: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntentState {
    pub name: String,
    pub slots: Slots,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationPhase {
    /// Mid-conversation: validate the latest turn.
    Dialog,
    /// Final turn: all slots collected.
    Fulfillment,
}

impl InvocationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvocationPhase::Dialog => "DialogCodeHook",
            InvocationPhase::Fulfillment => "FulfillmentCodeHook",
        }
    }
}

impl FromStr for InvocationPhase {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DialogCodeHook" => Ok(InvocationPhase::Dialog),
            "FulfillmentCodeHook" => Ok(InvocationPhase::Fulfillment),
            other => Err(AppError::UnsupportedPhase(other.to_string())),
        }
    }
}

/// Intents this code hook is configured for. Adding one means adding a match
/// arm in the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentName {
    BookAppointment,
}

impl IntentName {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentName::BookAppointment => "BookAppointment",
        }
    }
}

impl FromStr for IntentName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BookAppointment" => Ok(IntentName::BookAppointment),
            other => Err(AppError::UnsupportedIntent(other.to_string())),
        }
    }
}
