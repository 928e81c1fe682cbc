//! Applicant attributes as submitted by a client, before encoding.

pub const FIELD_AMOUNT: &str = "Amount";
pub const FIELD_TERM: &str = "Term";
pub const FIELD_EMPLOYMENT_TYPE: &str = "EmploymentType";
pub const FIELD_COUNT_DEFAULT_ACCOUNTS: &str = "ALL_CountDefaultAccounts";
pub const FIELD_MEAN_ACCOUNT_AGE: &str = "ALL_MeanAccountAge";
pub const FIELD_TIME_SINCE_MOST_RECENT_DEFAULT: &str = "ALL_TimeSinceMostRecentDefault";
pub const FIELD_WORST_PAYMENT_STATUS_ACTIVE_ACCOUNTS: &str =
    "ALL_WorstPaymentStatusActiveAccounts";

/// Numeric input fields, in validation order.
pub const NUMERIC_FIELDS: &[&str] = &[
    FIELD_AMOUNT,
    FIELD_TERM,
    FIELD_COUNT_DEFAULT_ACCOUNTS,
    FIELD_MEAN_ACCOUNT_AGE,
    FIELD_TIME_SINCE_MOST_RECENT_DEFAULT,
    FIELD_WORST_PAYMENT_STATUS_ACTIVE_ACCOUNTS,
];

pub const DEFAULT_AMOUNT: f64 = 5000.0;
pub const DEFAULT_TERM: f64 = 36.0;
pub const DEFAULT_EMPLOYMENT: EmploymentType = EmploymentType::FullTime;

/// Closed set of employment categories the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    SelfEmployed,
    Retired,
}

impl EmploymentType {
    /// Indicator column order used by the training pipeline.
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::SelfEmployed,
        EmploymentType::Retired,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Employed - full time",
            EmploymentType::PartTime => "Employed - part time",
            EmploymentType::SelfEmployed => "Self employed",
            EmploymentType::Retired => "Retired",
        }
    }

    /// Name of the one-hot column for this category.
    pub fn indicator_column(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "EmploymentType_Employed - full time",
            EmploymentType::PartTime => "EmploymentType_Employed - part time",
            EmploymentType::SelfEmployed => "EmploymentType_Self employed",
            EmploymentType::Retired => "EmploymentType_Retired",
        }
    }

    /// Exact, case-sensitive match against the training labels.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|et| et.label() == label)
    }
}

/// Employment value after defaults are merged.
///
/// Strings outside the known set are kept as-is: they encode to all-zero
/// indicators instead of failing the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Employment {
    Known(EmploymentType),
    Unrecognized(String),
}

impl Employment {
    pub fn parse(raw: &str) -> Self {
        match EmploymentType::from_label(raw) {
            Some(et) => Employment::Known(et),
            None => Employment::Unrecognized(raw.to_string()),
        }
    }

    pub fn is(&self, category: EmploymentType) -> bool {
        matches!(self, Employment::Known(et) if *et == category)
    }
}

impl Default for Employment {
    fn default() -> Self {
        Employment::Known(DEFAULT_EMPLOYMENT)
    }
}

/// Validated but partial applicant input. `None` means the client omitted it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicantInput {
    pub amount: Option<f64>,
    pub term: Option<f64>,
    pub employment_type: Option<String>,
    pub count_default_accounts: Option<f64>,
    pub mean_account_age: Option<f64>,
    pub time_since_most_recent_default: Option<f64>,
    pub worst_payment_status_active_accounts: Option<f64>,
}

impl ApplicantInput {
    /// Slot for a numeric wire field, `None` if the name is not numeric.
    pub fn numeric_slot(&mut self, field: &str) -> Option<&mut Option<f64>> {
        match field {
            FIELD_AMOUNT => Some(&mut self.amount),
            FIELD_TERM => Some(&mut self.term),
            FIELD_COUNT_DEFAULT_ACCOUNTS => Some(&mut self.count_default_accounts),
            FIELD_MEAN_ACCOUNT_AGE => Some(&mut self.mean_account_age),
            FIELD_TIME_SINCE_MOST_RECENT_DEFAULT => Some(&mut self.time_since_most_recent_default),
            FIELD_WORST_PAYMENT_STATUS_ACTIVE_ACCOUNTS => {
                Some(&mut self.worst_payment_status_active_accounts)
            }
            _ => None,
        }
    }

    /// Supplied values win field by field; everything else takes its default.
    pub fn merge_defaults(self) -> ApplicantRecord {
        let defaults = ApplicantRecord::default();
        ApplicantRecord {
            amount: self.amount.unwrap_or(defaults.amount),
            term: self.term.unwrap_or(defaults.term),
            employment: self
                .employment_type
                .as_deref()
                .map(Employment::parse)
                .unwrap_or(defaults.employment),
            count_default_accounts: self
                .count_default_accounts
                .unwrap_or(defaults.count_default_accounts),
            mean_account_age: self.mean_account_age.unwrap_or(defaults.mean_account_age),
            time_since_most_recent_default: self
                .time_since_most_recent_default
                .unwrap_or(defaults.time_since_most_recent_default),
            worst_payment_status_active_accounts: self
                .worst_payment_status_active_accounts
                .unwrap_or(defaults.worst_payment_status_active_accounts),
        }
    }
}

/// Complete applicant record, every field populated.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicantRecord {
    pub amount: f64,
    pub term: f64,
    pub employment: Employment,
    pub count_default_accounts: f64,
    pub mean_account_age: f64,
    pub time_since_most_recent_default: f64,
    pub worst_payment_status_active_accounts: f64,
}

impl Default for ApplicantRecord {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            term: DEFAULT_TERM,
            employment: Employment::default(),
            count_default_accounts: 0.0,
            mean_account_age: 0.0,
            time_since_most_recent_default: 0.0,
            worst_payment_status_active_accounts: 0.0,
        }
    }
}
