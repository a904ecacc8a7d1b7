//! Error types raised by the platform services.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by path resolution, asset access, and the service registry.
///
/// The session logger never produces these; its failures stay on the console
/// fallback channel.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("asset not found: {relative} ({})", resolved.display())]
    NotFound { relative: String, resolved: PathBuf },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("service registry is not initialized: {0} requested before initialize()")]
    NotInitialized(&'static str),

    #[error("service registry is already initialized; call reset() first")]
    AlreadyInitialized,

    #[error("missing required argument: {0}")]
    InvalidArgument(&'static str),

    #[error("content validation failed, missing: {}", missing.join(", "))]
    ValidationFailure { missing: Vec<String> },
}

impl PlatformError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Short, stable name of the failure category.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NotFound",
            Self::Io { .. } => "IOFailure",
            Self::NotInitialized(_) => "NotInitialized",
            Self::AlreadyInitialized => "AlreadyInitialized",
            Self::InvalidArgument(_) => "InvalidArgument",
            Self::ValidationFailure { .. } => "ValidationFailure",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlatformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_paths() {
        let err = PlatformError::NotFound {
            relative: "XNBs/missing.xnb".into(),
            resolved: PathBuf::from("/base/Content/XNBs/missing.xnb"),
        };
        let text = err.to_string();
        assert!(text.contains("XNBs/missing.xnb"));
        assert!(text.contains("/base/Content/XNBs/missing.xnb"));
        assert_eq!(err.kind(), "NotFound");
    }

    #[test]
    fn test_validation_failure_lists_missing() {
        let err = PlatformError::ValidationFailure {
            missing: vec!["Atlases".into(), "FMOD".into()],
        };
        assert_eq!(
            err.to_string(),
            "content validation failed, missing: Atlases, FMOD"
        );
    }
}
