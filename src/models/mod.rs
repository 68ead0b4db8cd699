pub mod loaders;
pub mod submission;

pub use loaders::scan_submissions;
pub use submission::Submission;
