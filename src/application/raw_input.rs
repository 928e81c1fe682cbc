//! Untyped request fields and their validation into `ApplicantInput`.
//!
//! JSON bodies keep their value types, so a numeric field must arrive as a
//! JSON number. Form bodies are all text and numeric fields are parsed; an
//! empty form value counts as omitted.

use crate::domain::errors::PredictionError;
use crate::domain::loan::applicant::{ApplicantInput, FIELD_EMPLOYMENT_TYPE, NUMERIC_FIELDS};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Json(Value),
    Text(String),
}

/// Field name to raw value, as received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInput {
    fields: HashMap<String, RawValue>,
}

impl RawInput {
    pub fn from_json_slice(body: &[u8]) -> Result<Self, PredictionError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| PredictionError::MalformedRequest {
                reason: format!("body is not valid JSON: {}", e),
            })?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(value: Value) -> Result<Self, PredictionError> {
        match value {
            Value::Object(map) => Ok(Self {
                fields: map
                    .into_iter()
                    .map(|(k, v)| (k, RawValue::Json(v)))
                    .collect(),
            }),
            other => Err(PredictionError::MalformedRequest {
                reason: format!("expected a JSON object, got {}", json_type_name(&other)),
            }),
        }
    }

    /// Parses `application/x-www-form-urlencoded`. A repeated key keeps its
    /// first value.
    pub fn from_form_slice(body: &[u8]) -> Self {
        let mut fields = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(body) {
            fields
                .entry(key.into_owned())
                .or_insert_with(|| RawValue::Text(value.into_owned()));
        }
        Self { fields }
    }

    /// Type-checks the known fields. Missing fields stay `None`, unknown
    /// fields are dropped.
    pub fn into_applicant(mut self) -> Result<ApplicantInput, PredictionError> {
        let mut input = ApplicantInput::default();

        for field in NUMERIC_FIELDS {
            if let Some(raw) = self.fields.remove(*field) {
                if raw.is_blank_text() {
                    continue;
                }
                let number = parse_numeric(field, &raw)?;
                if let Some(slot) = input.numeric_slot(field) {
                    *slot = Some(number);
                }
            }
        }

        // Any other JSON type matches no category and encodes to all zeros.
        if let Some(raw) = self.fields.remove(FIELD_EMPLOYMENT_TYPE) {
            input.employment_type = Some(match raw {
                RawValue::Json(Value::String(s)) | RawValue::Text(s) => s,
                RawValue::Json(Value::Null) => String::new(),
                RawValue::Json(other) => other.to_string(),
            });
        }

        Ok(input)
    }
}

impl RawValue {
    fn is_blank_text(&self) -> bool {
        matches!(self, RawValue::Text(s) if s.trim().is_empty())
    }
}

fn parse_numeric(field: &str, raw: &RawValue) -> Result<f64, PredictionError> {
    let number = match raw {
        RawValue::Json(Value::Number(n)) => n.as_f64(),
        RawValue::Json(_) => None,
        RawValue::Text(s) => s.trim().parse::<f64>().ok(),
    }
    .filter(|n| n.is_finite())
    .ok_or_else(|| PredictionError::not_a_number(field))?;

    if number < 0.0 {
        return Err(PredictionError::negative(field));
    }
    Ok(number)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::loan::{Employment, EmploymentType};
    use serde_json::json;

    fn applicant(value: Value) -> Result<ApplicantInput, PredictionError> {
        RawInput::from_json_value(value)?.into_applicant()
    }

    #[test]
    fn test_json_integers_and_floats_accepted() {
        let input = applicant(json!({"Amount": 10000, "ALL_MeanAccountAge": 24.5})).unwrap();
        assert_eq!(input.amount, Some(10000.0));
        assert_eq!(input.mean_account_age, Some(24.5));
        assert_eq!(input.term, None);
    }

    #[test]
    fn test_json_string_number_rejected() {
        let err = applicant(json!({"Amount": "10000"})).unwrap_err();
        assert_eq!(err, PredictionError::not_a_number("Amount"));
    }

    #[test]
    fn test_json_bool_and_null_rejected() {
        assert_eq!(
            applicant(json!({"Term": true})).unwrap_err(),
            PredictionError::not_a_number("Term")
        );
        assert_eq!(
            applicant(json!({"ALL_CountDefaultAccounts": null})).unwrap_err(),
            PredictionError::not_a_number("ALL_CountDefaultAccounts")
        );
    }

    #[test]
    fn test_negative_value_rejected() {
        let err = applicant(json!({"Term": -12})).unwrap_err();
        assert_eq!(err, PredictionError::negative("Term"));
    }

    #[test]
    fn test_first_invalid_field_in_declared_order_reported() {
        let err = applicant(json!({
            "ALL_WorstPaymentStatusActiveAccounts": "bad",
            "Amount": "also bad"
        }))
        .unwrap_err();
        assert_eq!(err, PredictionError::not_a_number("Amount"));
    }

    #[test]
    fn test_non_string_employment_is_unrecognized() {
        let input = applicant(json!({"EmploymentType": 3})).unwrap();
        assert_eq!(input.employment_type.as_deref(), Some("3"));
        assert_eq!(
            input.merge_defaults().employment,
            Employment::Unrecognized("3".to_string())
        );

        let input = applicant(json!({"EmploymentType": null})).unwrap();
        assert_eq!(input.employment_type.as_deref(), Some(""));

        let input = applicant(json!({"EmploymentType": ["Retired"]})).unwrap();
        assert!(!input.merge_defaults().employment.is(EmploymentType::Retired));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let input = applicant(json!({"Nickname": "ace", "Term": 12})).unwrap();
        assert_eq!(input.term, Some(12.0));
    }

    #[test]
    fn test_non_object_body_is_malformed() {
        let err = RawInput::from_json_slice(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, PredictionError::MalformedRequest { .. }));

        let err = RawInput::from_json_slice(b"{not json").unwrap_err();
        assert!(matches!(err, PredictionError::MalformedRequest { .. }));
    }

    #[test]
    fn test_form_values_parsed_as_numbers() {
        let raw = RawInput::from_form_slice(
            b"Amount=7500&Term=+48&EmploymentType=Self+employed&ALL_MeanAccountAge=3.25",
        );
        let input = raw.into_applicant().unwrap();
        assert_eq!(input.amount, Some(7500.0));
        assert_eq!(input.term, Some(48.0));
        assert_eq!(input.mean_account_age, Some(3.25));
        assert_eq!(input.employment_type.as_deref(), Some("Self employed"));
    }

    #[test]
    fn test_form_non_numeric_rejected() {
        let err = RawInput::from_form_slice(b"Term=sixty")
            .into_applicant()
            .unwrap_err();
        assert_eq!(err, PredictionError::not_a_number("Term"));

        let err = RawInput::from_form_slice(b"Amount=NaN")
            .into_applicant()
            .unwrap_err();
        assert_eq!(err, PredictionError::not_a_number("Amount"));
    }

    #[test]
    fn test_empty_form_value_counts_as_missing() {
        let input = RawInput::from_form_slice(b"Amount=&Term=+&ALL_MeanAccountAge=2")
            .into_applicant()
            .unwrap();
        assert_eq!(input.amount, None);
        assert_eq!(input.term, None);
        assert_eq!(input.mean_account_age, Some(2.0));
        assert_eq!(input.merge_defaults().amount, 5000.0);
    }

    #[test]
    fn test_empty_json_string_still_rejected() {
        let err = applicant(json!({"Amount": ""})).unwrap_err();
        assert_eq!(err, PredictionError::not_a_number("Amount"));
    }

    #[test]
    fn test_form_repeated_key_keeps_first() {
        let input = RawInput::from_form_slice(b"Amount=100&Amount=200")
            .into_applicant()
            .unwrap();
        assert_eq!(input.amount, Some(100.0));
    }
}
