use loan_predict::application::inference_handler::InferenceHandler;
use loan_predict::application::ml::{LogisticArtifact, load_classifier};
use loan_predict::application::raw_input::RawInput;
use loan_predict::config::{ModelEnvConfig, ModelFormat};
use loan_predict::domain::errors::ModelLoadError;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

/// Column order deliberately differs from the encoder's canonical order.
fn write_artifact() -> NamedTempFile {
    let artifact = LogisticArtifact {
        feature_names_in: vec![
            "EmploymentType_Retired".to_string(),
            "EmploymentType_Self employed".to_string(),
            "EmploymentType_Employed - part time".to_string(),
            "EmploymentType_Employed - full time".to_string(),
            "ALL_WorstPaymentStatusActiveAccounts".to_string(),
            "ALL_TimeSinceMostRecentDefault".to_string(),
            "ALL_MeanAccountAge".to_string(),
            "ALL_CountDefaultAccounts".to_string(),
            "Term".to_string(),
            "Amount".to_string(),
        ],
        coef: vec![0.2, -0.1, -0.3, 0.4, -0.8, 0.05, 0.02, -1.2, -0.01, -0.0001],
        intercept: 1.0,
        threshold: 0.5,
        version: Some("2024-06".to_string()),
    };
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&artifact).unwrap().as_bytes())
        .unwrap();
    file
}

fn json_config(file: &NamedTempFile) -> ModelEnvConfig {
    ModelEnvConfig {
        path: file.path().to_path_buf(),
        format: ModelFormat::Json,
        ..Default::default()
    }
}

#[test]
fn test_loaded_artifact_scores_example_applicant() {
    let file = write_artifact();
    let classifier = load_classifier(&json_config(&file)).unwrap();
    assert_eq!(classifier.version(), "2024-06");

    let handler = InferenceHandler::new(classifier);
    let raw = RawInput::from_json_value(json!({
        "Amount": 10000,
        "Term": 60,
        "EmploymentType": "Self employed",
        "ALL_CountDefaultAccounts": 1,
        "ALL_MeanAccountAge": 24.5,
        "ALL_TimeSinceMostRecentDefault": 12,
        "ALL_WorstPaymentStatusActiveAccounts": 2
    }))
    .unwrap();

    // z = -0.1 - 1.6 + 0.6 + 0.49 - 1.2 - 0.6 - 1.0 + 1.0 = -2.41
    let result = handler.handle(raw).unwrap();
    assert_eq!(result.prediction, 0);
    assert_eq!(result.success_probability, 0.08);
}

#[test]
fn test_defaults_score_with_full_time_indicator() {
    let file = write_artifact();
    let handler = InferenceHandler::new(load_classifier(&json_config(&file)).unwrap());

    // z = 0.4 - 0.36 - 0.5 + 1.0 = 0.54
    let result = handler
        .handle(RawInput::from_json_value(json!({})).unwrap())
        .unwrap();
    assert_eq!(result.prediction, 1);
    assert_eq!(result.success_probability, 0.63);
}

#[test]
fn test_corrupt_artifact_fails_at_load() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"not a model").unwrap();

    let result = load_classifier(&json_config(&file));
    assert!(matches!(result, Err(ModelLoadError::Deserialize { .. })));
}

#[test]
fn test_mismatched_coefficients_fail_at_load() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"{"feature_names_in": ["Amount", "Term"], "coef": [0.1], "intercept": 0.0}"#,
    )
    .unwrap();

    let result = load_classifier(&json_config(&file));
    assert!(matches!(result, Err(ModelLoadError::InvalidArtifact { .. })));
}
