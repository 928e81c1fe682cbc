use crate::domain::errors::PredictionError;
use crate::domain::loan::applicant::{
    ApplicantRecord, EmploymentType, FIELD_AMOUNT, FIELD_COUNT_DEFAULT_ACCOUNTS,
    FIELD_MEAN_ACCOUNT_AGE, FIELD_TERM, FIELD_TIME_SINCE_MOST_RECENT_DEFAULT,
    FIELD_WORST_PAYMENT_STATUS_ACTIVE_ACCOUNTS,
};

/// Every column the encoder can produce, in canonical order.
/// A model may declare these in any order; columns it names outside this
/// list cannot be satisfied.
pub const FEATURE_NAMES: &[&str] = &[
    FIELD_AMOUNT,
    FIELD_TERM,
    FIELD_COUNT_DEFAULT_ACCOUNTS,
    FIELD_MEAN_ACCOUNT_AGE,
    FIELD_TIME_SINCE_MOST_RECENT_DEFAULT,
    FIELD_WORST_PAYMENT_STATUS_ACTIVE_ACCOUNTS,
    "EmploymentType_Employed - full time",
    "EmploymentType_Employed - part time",
    "EmploymentType_Self employed",
    "EmploymentType_Retired",
];

/// Applicant record with the employment category expanded into one-hot
/// indicators. The categorical field itself no longer exists here.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedFeatures {
    pub amount: f64,
    pub term: f64,
    pub count_default_accounts: f64,
    pub mean_account_age: f64,
    pub time_since_most_recent_default: f64,
    pub worst_payment_status_active_accounts: f64,
    /// Indexed like `EmploymentType::ALL`.
    pub employment_indicators: [f64; 4],
}

impl EncodedFeatures {
    pub fn encode(record: &ApplicantRecord) -> Self {
        let employment_indicators =
            EmploymentType::ALL.map(|et| if record.employment.is(et) { 1.0 } else { 0.0 });

        Self {
            amount: record.amount,
            term: record.term,
            count_default_accounts: record.count_default_accounts,
            mean_account_age: record.mean_account_age,
            time_since_most_recent_default: record.time_since_most_recent_default,
            worst_payment_status_active_accounts: record.worst_payment_status_active_accounts,
            employment_indicators,
        }
    }

    /// Value of a named column, `None` if the encoder never produces it.
    pub fn get(&self, column: &str) -> Option<f64> {
        match column {
            FIELD_AMOUNT => Some(self.amount),
            FIELD_TERM => Some(self.term),
            FIELD_COUNT_DEFAULT_ACCOUNTS => Some(self.count_default_accounts),
            FIELD_MEAN_ACCOUNT_AGE => Some(self.mean_account_age),
            FIELD_TIME_SINCE_MOST_RECENT_DEFAULT => Some(self.time_since_most_recent_default),
            FIELD_WORST_PAYMENT_STATUS_ACTIVE_ACCOUNTS => {
                Some(self.worst_payment_status_active_accounts)
            }
            other => EmploymentType::ALL
                .iter()
                .position(|et| et.indicator_column() == other)
                .map(|idx| self.employment_indicators[idx]),
        }
    }

    /// Selects and orders columns exactly as the model schema declares them.
    pub fn project(&self, schema: &[String]) -> Result<FeatureVector, PredictionError> {
        let values = schema
            .iter()
            .map(|name| {
                self.get(name)
                    .ok_or_else(|| PredictionError::MissingFeature { name: name.clone() })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        Ok(FeatureVector {
            columns: schema.to_vec(),
            values,
        })
    }
}

/// Single model input row, aligned with the model's declared columns.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    columns: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|idx| self.values[idx])
    }

    /// Values narrowed to f32 for runtimes that only take single precision.
    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.values.iter().map(|v| *v as f32).collect()
    }
}

/// Canonical schema as owned strings.
pub fn default_schema() -> Vec<String> {
    FEATURE_NAMES.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::loan::applicant::{ApplicantInput, Employment};

    #[test]
    fn test_indicator_columns_match_registry() {
        for et in EmploymentType::ALL {
            assert!(FEATURE_NAMES.contains(&et.indicator_column()));
        }
    }

    #[test]
    fn test_self_employed_is_one_hot() {
        let record = ApplicantRecord {
            employment: Employment::Known(EmploymentType::SelfEmployed),
            ..Default::default()
        };
        let encoded = EncodedFeatures::encode(&record);
        assert_eq!(encoded.get("EmploymentType_Self employed"), Some(1.0));
        assert_eq!(encoded.get("EmploymentType_Employed - full time"), Some(0.0));
        assert_eq!(encoded.get("EmploymentType_Employed - part time"), Some(0.0));
        assert_eq!(encoded.get("EmploymentType_Retired"), Some(0.0));
    }

    #[test]
    fn test_unrecognized_employment_is_all_zero() {
        let record = ApplicantInput {
            employment_type: Some("Student".to_string()),
            ..Default::default()
        }
        .merge_defaults();
        let encoded = EncodedFeatures::encode(&record);
        assert_eq!(encoded.employment_indicators, [0.0; 4]);
    }

    #[test]
    fn test_categorical_column_is_not_encoded() {
        let encoded = EncodedFeatures::encode(&ApplicantRecord::default());
        assert_eq!(encoded.get("EmploymentType"), None);
    }

    #[test]
    fn test_project_follows_schema_order() {
        let record = ApplicantRecord {
            amount: 10000.0,
            term: 60.0,
            ..Default::default()
        };
        let schema = vec![
            "Term".to_string(),
            "EmploymentType_Retired".to_string(),
            "Amount".to_string(),
        ];
        let row = EncodedFeatures::encode(&record).project(&schema).unwrap();
        assert_eq!(row.values(), &[60.0, 0.0, 10000.0]);
        assert_eq!(row.columns(), schema.as_slice());
    }

    #[test]
    fn test_project_fails_on_unknown_column() {
        let schema = vec!["Amount".to_string(), "AnnualIncome".to_string()];
        let err = EncodedFeatures::encode(&ApplicantRecord::default())
            .project(&schema)
            .unwrap_err();
        assert_eq!(
            err,
            PredictionError::MissingFeature {
                name: "AnnualIncome".to_string()
            }
        );
    }

    #[test]
    fn test_default_schema_projects_every_column() {
        let row = EncodedFeatures::encode(&ApplicantRecord::default())
            .project(&default_schema())
            .unwrap();
        assert_eq!(row.len(), FEATURE_NAMES.len());
        assert_eq!(row.get("Amount"), Some(5000.0));
        assert_eq!(row.get("EmploymentType_Employed - full time"), Some(1.0));
    }
}
