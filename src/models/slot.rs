use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const APPLIANCE_BRAND: &str = "applianceBrand";
pub const APPLIANCE_TYPE: &str = "applianceType";
pub const APPOINTMENT_DATE: &str = "appointmentDate";

/// Slot name to slot. `None` means the dialog manager has not filled it yet.
pub type Slots = BTreeMap<String, Option<Slot>>;

/// A slot as received. The JSON is kept verbatim so it can be echoed back;
/// `value` is the typed view the validator reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Slot {
    value: Option<SlotValue>,
    raw: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotValue {
    #[serde(default)]
    pub original_value: Option<String>,
    #[serde(default)]
    pub interpreted_value: Option<String>,
    #[serde(default)]
    pub resolved_values: Option<Vec<String>>,
}

impl TryFrom<Value> for Slot {
    type Error = String;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        let Value::Object(fields) = &raw else {
            return Err(format!("slot must be an object, got {raw}"));
        };
        let value = match fields.get("value") {
            None | Some(Value::Null) => None,
            Some(v) => Some(SlotValue::deserialize(v).map_err(|e| format!("invalid slot value: {e}"))?),
        };
        Ok(Self { value, raw })
    }
}

impl From<Slot> for Value {
    fn from(slot: Slot) -> Self {
        slot.raw
    }
}

impl Slot {
    /// Slot whose original and interpreted values are both `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            value: Some(SlotValue {
                original_value: Some(text.to_string()),
                interpreted_value: Some(text.to_string()),
                resolved_values: Some(Vec::new()),
            }),
            raw: json!({
                "value": {"originalValue": text, "interpretedValue": text, "resolvedValues": []}
            }),
        }
    }

    pub fn value(&self) -> Option<&SlotValue> {
        self.value.as_ref()
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn original_value(&self) -> Option<&str> {
        self.value().and_then(|v| v.original_value.as_deref())
    }

    pub fn interpreted_value(&self) -> Option<&str> {
        self.value().and_then(|v| v.interpreted_value.as_deref())
    }

    pub fn resolved_values(&self) -> &[String] {
        self.value()
            .and_then(|v| v.resolved_values.as_deref())
            .unwrap_or(&[])
    }

    /// Interpreted value when the dialog manager normalized one, else the raw utterance.
    pub fn normalized_value(&self) -> Option<&str> {
        self.interpreted_value()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.original_value())
    }

    pub fn is_filled(&self) -> bool {
        self.original_value()
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false)
    }
}

/// The slots this bot has a rule for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    ApplianceBrand,
    ApplianceType,
    AppointmentDate,
}

impl SlotKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            APPLIANCE_BRAND => Some(SlotKind::ApplianceBrand),
            APPLIANCE_TYPE => Some(SlotKind::ApplianceType),
            APPOINTMENT_DATE => Some(SlotKind::AppointmentDate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKind::ApplianceBrand => APPLIANCE_BRAND,
            SlotKind::ApplianceType => APPLIANCE_TYPE,
            SlotKind::AppointmentDate => APPOINTMENT_DATE,
        }
    }
}
