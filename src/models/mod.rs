mod feedback;
mod summary;

pub use feedback::FeedbackMessage;
pub use summary::{NewSummaryRecord, RecordId, SummaryRecord, SummaryRequest, SummaryResult};
