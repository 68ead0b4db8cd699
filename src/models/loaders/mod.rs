pub mod submission_scanner;

pub use submission_scanner::{scan_submissions, PDF_SUFFIX};
