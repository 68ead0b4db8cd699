pub mod answer_writer;
pub mod submission_parser;

pub use answer_writer::AnswerWriter;
pub use submission_parser::{ParseError, ParsedSubmission, SubmissionParser};
