use std::fmt;
use std::path::PathBuf;

/// Generation failure
///
/// Returned by [`generate`](crate::generator::generate). The walker attempts
/// every operation exactly once; the first failure aborts the remaining
/// siblings at its level and propagates upward unchanged.
#[derive(Debug)]
pub enum GenerateError {
    /// The filesystem collaborator rejected a directory create or file write.
    Io {
        /// Path the collaborator was asked to produce.
        path: PathBuf,
        source: anyhow::Error,
    },
    /// No destination was chosen for the run.
    ///
    /// Kept distinct from [`GenerateError::Io`] so callers can message
    /// "nothing selected" differently from an actual fault.
    Cancelled,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Io { path, source } => {
                write!(f, "generation failed at {}: {}", path.display(), source)
            }
            GenerateError::Cancelled => {
                write!(f, "generation cancelled: no destination selected")
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Io { source, .. } => Some(source.as_ref()),
            GenerateError::Cancelled => None,
        }
    }
}
