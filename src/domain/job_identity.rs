use std::fmt;

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Per-request token used to name every temporary artifact of one upload.
///
/// The token starts with a human-readable second-granularity stamp and ends
/// with a random suffix. The stamp alone is not unique: two requests landing
/// in the same clock second share it, so the suffix carries the uniqueness
/// guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobIdentity {
    stamp: String,
    token: String,
}

impl JobIdentity {
    pub fn new() -> Self {
        Self::from_time(Local::now())
    }

    pub fn from_time(now: DateTime<Local>) -> Self {
        let stamp = now.format("file_%Y%m%d_%H%M%S").to_string();
        let suffix = Uuid::new_v4().simple().to_string();
        let token = format!("{}_{}", stamp, &suffix[..8]);
        Self { stamp, token }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// The second-granularity part of the token. Shared by all requests
    /// arriving within the same clock second.
    pub fn second_stamp(&self) -> &str {
        &self.stamp
    }
}

impl Default for JobIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}
