pub mod applicant;
pub mod prediction;

pub use applicant::{ApplicantInput, ApplicantRecord, Employment, EmploymentType};
pub use prediction::PredictionResult;
