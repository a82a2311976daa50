use serde::Serialize;

use crate::models::slot::Slots;

/// What the dialog manager should do next. Serializes to the code hook
/// response contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "WireResponse")]
pub enum DialogResponse {
    ElicitSlot {
        slot_to_elicit: String,
        message: String,
    },
    Delegate {
        message: String,
    },
    Close {
        intent_name: String,
        slots: Slots,
        message: String,
    },
}

impl DialogResponse {
    pub fn action_type(&self) -> &'static str {
        match self {
            DialogResponse::ElicitSlot { .. } => "ElicitSlot",
            DialogResponse::Delegate { .. } => "Delegate",
            DialogResponse::Close { .. } => "Close",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DialogResponse::ElicitSlot { message, .. }
            | DialogResponse::Delegate { message }
            | DialogResponse::Close { message, .. } => message,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireResponse {
    session_state: WireSessionState,
    messages: Vec<PlainTextMessage>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireSessionState {
    dialog_action: WireDialogAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    intent: Option<WireIntent>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireDialogAction {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    slot_to_elicit: Option<String>,
}

#[derive(Serialize)]
struct WireIntent {
    name: String,
    slots: Slots,
    state: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlainTextMessage {
    content_type: &'static str,
    content: String,
}

impl From<DialogResponse> for WireResponse {
    fn from(response: DialogResponse) -> Self {
        let kind = response.action_type();
        let (slot_to_elicit, intent, message) = match response {
            DialogResponse::ElicitSlot {
                slot_to_elicit,
                message,
            } => (Some(slot_to_elicit), None, message),
            DialogResponse::Delegate { message } => (None, None, message),
            DialogResponse::Close {
                intent_name,
                slots,
                message,
            } => (
                None,
                Some(WireIntent {
                    name: intent_name,
                    slots,
                    state: "Fulfilled",
                }),
                message,
            ),
        };

        WireResponse {
            session_state: WireSessionState {
                dialog_action: WireDialogAction {
                    kind,
                    slot_to_elicit,
                },
                intent,
            },
            messages: vec![PlainTextMessage {
                content_type: "PlainText",
                content: message,
            }],
        }
    }
}
