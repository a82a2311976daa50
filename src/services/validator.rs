use chrono::NaiveDate;

use crate::models::{Slot, SlotKind, Slots, ValidationResult};

pub const VALID_APPLIANCE_BRANDS: [&str; 3] = ["lg", "samsung", "ge"];
pub const VALID_APPLIANCE_TYPES: [&str; 5] = ["washer", "dryer", "refrigerator", "stove", "dishwasher"];

const NOT_PROVIDED: &str = "The value for the slot is not provided.";

fn not_covered(slot_name: &str) -> ValidationResult {
    ValidationResult::invalid(
        slot_name,
        format!("The value for the {slot_name} is not covered and therefore invalid."),
    )
}

fn check_presence(slot_name: &str, slot: Option<&Slot>) -> ValidationResult {
    match slot {
        Some(slot) if slot.is_filled() => ValidationResult::Valid,
        _ => ValidationResult::invalid(slot_name, NOT_PROVIDED),
    }
}

fn check_listed(slot_name: &str, slot: &Slot, allowed: &[&str]) -> ValidationResult {
    let value = slot.original_value().unwrap_or_default().trim().to_lowercase();
    if allowed.contains(&value.as_str()) {
        ValidationResult::Valid
    } else {
        not_covered(slot_name)
    }
}

fn check_date(slot_name: &str, slot: &Slot) -> ValidationResult {
    let value = slot.normalized_value().unwrap_or_default().trim();
    if is_valid_date(value) {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid(
            slot_name,
            format!("The value for the {slot_name} is not a valid date. Please use YYYY-MM-DD."),
        )
    }
}

fn check_kind(kind: SlotKind, slot: &Slot) -> ValidationResult {
    let name = kind.as_str();
    match kind {
        SlotKind::ApplianceBrand => check_listed(name, slot, &VALID_APPLIANCE_BRANDS),
        SlotKind::ApplianceType => check_listed(name, slot, &VALID_APPLIANCE_TYPES),
        SlotKind::AppointmentDate => check_date(name, slot),
    }
}

/// Strict `YYYY-MM-DD` calendar date.
pub fn is_valid_date(value: &str) -> bool {
    let well_formed = value.len() == 10
        && value.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
    well_formed && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Checks every slot in the request. Presence is checked for all slots
/// before any value rule runs; the first failure is returned.
pub fn validate(slots: &Slots) -> ValidationResult {
    for (name, slot) in slots {
        let presence = check_presence(name, slot.as_ref());
        if !presence.is_valid() {
            return presence;
        }
    }

    for kind in [
        SlotKind::ApplianceBrand,
        SlotKind::ApplianceType,
        SlotKind::AppointmentDate,
    ] {
        if let Some(Some(slot)) = slots.get(kind.as_str()) {
            let result = check_kind(kind, slot);
            if !result.is_valid() {
                return result;
            }
        }
    }

    ValidationResult::Valid
}

/// Checks a single slot: presence, then the rule for its kind if it has one.
pub fn validate_one_slot(slots: &Slots, slot_name: &str) -> ValidationResult {
    let slot = slots.get(slot_name).and_then(Option::as_ref);
    let presence = check_presence(slot_name, slot);
    let Some(slot) = slot.filter(|_| presence.is_valid()) else {
        return presence;
    };

    match SlotKind::from_name(slot_name) {
        Some(kind) => check_kind(kind, slot),
        None => ValidationResult::Valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(pairs: &[(&str, Option<&str>)]) -> Slots {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.map(Slot::from_text)))
            .collect()
    }

    fn complete() -> Slots {
        slots(&[
            ("applianceBrand", Some("Samsung")),
            ("applianceType", Some("washer")),
            ("appointmentDate", Some("2025-06-16")),
        ])
    }

    #[test]
    fn test_all_valid() {
        assert_eq!(validate(&complete()), ValidationResult::Valid);
    }

    #[test]
    fn test_empty_map_is_valid() {
        assert!(validate(&Slots::new()).is_valid());
    }

    #[test]
    fn test_missing_slot_is_named() {
        let mut s = complete();
        s.insert("applianceType".to_string(), None);
        let result = validate(&s);
        assert_eq!(result.violated_slot(), Some("applianceType"));
        assert_eq!(
            result,
            ValidationResult::invalid("applianceType", "The value for the slot is not provided.")
        );
    }

    #[test]
    fn test_empty_value_is_missing() {
        let mut s = complete();
        s.insert("applianceBrand".to_string(), Some(Slot::from_text("")));
        assert_eq!(validate(&s).violated_slot(), Some("applianceBrand"));
    }

    #[test]
    fn test_presence_checked_before_brand() {
        let s = slots(&[("applianceBrand", Some("Whirlpool")), ("applianceType", None)]);
        assert_eq!(validate(&s).violated_slot(), Some("applianceType"));
    }

    #[test]
    fn test_unknown_brand_fails() {
        let mut s = complete();
        s.insert("applianceBrand".to_string(), Some(Slot::from_text("Whirlpool")));
        assert_eq!(
            validate(&s),
            ValidationResult::invalid(
                "applianceBrand",
                "The value for the applianceBrand is not covered and therefore invalid."
            )
        );
    }

    #[test]
    fn test_brand_is_case_insensitive() {
        for brand in ["LG", "lg", "Lg", "GE", "SAMSUNG"] {
            let mut s = complete();
            s.insert("applianceBrand".to_string(), Some(Slot::from_text(brand)));
            assert!(validate(&s).is_valid(), "{brand} should be accepted");
        }
    }

    #[test]
    fn test_unknown_type_fails() {
        let mut s = complete();
        s.insert("applianceType".to_string(), Some(Slot::from_text("microwave")));
        assert_eq!(validate(&s).violated_slot(), Some("applianceType"));
    }

    #[test]
    fn test_type_is_case_insensitive() {
        let mut s = complete();
        s.insert("applianceType".to_string(), Some(Slot::from_text("Dryer")));
        assert!(validate(&s).is_valid());
    }

    #[test]
    fn test_brand_checked_before_type() {
        let mut s = complete();
        s.insert("applianceBrand".to_string(), Some(Slot::from_text("Bosch")));
        s.insert("applianceType".to_string(), Some(Slot::from_text("microwave")));
        assert_eq!(validate(&s).violated_slot(), Some("applianceBrand"));
    }

    #[test]
    fn test_date_rules() {
        assert!(is_valid_date("2024-02-29"));
        assert!(is_valid_date("2025-12-31"));
        assert!(!is_valid_date("2024-02-30"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("02/30/2024"));
        assert!(!is_valid_date("2024-2-29"));
        assert!(!is_valid_date("tomorrow"));
        assert!(!is_valid_date(""));
    }

    #[test]
    fn test_bad_date_fails_validation() {
        for date in ["2024-02-30", "02/30/2024"] {
            let mut s = complete();
            s.insert("appointmentDate".to_string(), Some(Slot::from_text(date)));
            assert_eq!(validate(&s).violated_slot(), Some("appointmentDate"), "{date}");
        }
    }

    #[test]
    fn test_leap_day_passes_validation() {
        let mut s = complete();
        s.insert("appointmentDate".to_string(), Some(Slot::from_text("2024-02-29")));
        assert!(validate(&s).is_valid());
    }

    #[test]
    fn test_date_uses_interpreted_value() {
        let slot: Slot = serde_json::from_str(
            r#"{"value":{"originalValue":"next monday","interpretedValue":"2025-06-16","resolvedValues":["2025-06-16"]}}"#,
        )
        .unwrap();
        let mut s = complete();
        s.insert("appointmentDate".to_string(), Some(slot));
        assert!(validate(&s).is_valid());
    }

    #[test]
    fn test_unruled_slot_only_needs_presence() {
        let mut s = complete();
        s.insert("customerName".to_string(), Some(Slot::from_text("Dana")));
        assert!(validate(&s).is_valid());
    }

    #[test]
    fn test_one_slot_ignores_other_slots() {
        let s = slots(&[
            ("applianceBrand", Some("Whirlpool")),
            ("applianceType", Some("dryer")),
        ]);
        assert!(validate_one_slot(&s, "applianceType").is_valid());
        assert_eq!(validate_one_slot(&s, "applianceBrand").violated_slot(), Some("applianceBrand"));
    }

    #[test]
    fn test_one_slot_missing_from_map() {
        let result = validate_one_slot(&Slots::new(), "applianceBrand");
        assert_eq!(result.violated_slot(), Some("applianceBrand"));
    }

    #[test]
    fn test_one_slot_date() {
        let s = slots(&[("appointmentDate", Some("2024-02-30"))]);
        assert_eq!(validate_one_slot(&s, "appointmentDate").violated_slot(), Some("appointmentDate"));
    }

    #[test]
    fn test_one_slot_unruled() {
        let s = slots(&[("customerName", Some("Dana"))]);
        assert!(validate_one_slot(&s, "customerName").is_valid());
    }
}
