mod job_identity;
mod media_source;
mod summary;

pub use job_identity::JobIdentity;
pub use media_source::{MediaKind, MediaSource};
pub use summary::clean_summary;
