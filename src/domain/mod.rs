pub mod errors;
pub mod loan;
pub mod ml;
