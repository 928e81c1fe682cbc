// Request pipeline
pub mod inference_handler;
pub mod raw_input;

// Classifier port and implementations
pub mod ml;
