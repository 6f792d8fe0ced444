//! Per-request resolution outcome.

use super::static_entry::StaticEntry;

/// What a key resolved to, after both lookup stages.
///
/// Errors (unknown key) are carried outside, in `Result<Resolution, AppError>`.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// Send a `302 Found` to this target.
    Redirect(String),
    /// The resolved value is a static key.
    Static { key: String, entry: StaticEntry },
}

impl Resolution {
    /// The resolved value, whichever branch it landed in.
    pub fn value(&self) -> &str {
        match self {
            Self::Redirect(target) => target,
            Self::Static { key, .. } => key,
        }
    }

    /// Outcome label for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Redirect(_) => "redirect",
            Self::Static {
                entry: StaticEntry::NoOp,
                ..
            } => "static_noop",
            Self::Static {
                entry: StaticEntry::Delegate(_),
                ..
            } => "static_delegate",
        }
    }
}
