mod pipeline;
mod prompt;

pub use pipeline::{MeetingNotes, PipelineError, SummaryPipeline};
pub use prompt::build_summary_prompt;
