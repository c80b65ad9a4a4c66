//! Error types for readsets.
//!
//! Per-file problems (an empty path, an undeterminable read direction, a
//! missing mate) are not errors: they are collected as
//! [`Warning`](crate::readset::Warning)s on the resolution. The types here
//! cover the failures that stop an invocation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in readsets operations.
#[derive(Debug, Error)]
pub enum ReadSetError {
    /// Both single-end and paired-end inputs were supplied.
    #[error("conflicting inputs: {single} single-end and {paired} paired-end files given; supply only one kind")]
    ConflictingMode { single: usize, paired: usize },

    /// Neither single-end nor paired-end inputs were supplied.
    #[error("no read files supplied; give single-end or paired-end inputs")]
    NoInput,

    /// A forward or reverse designator was rejected.
    #[error(transparent)]
    InvalidDesignator(#[from] DesignatorError),

    /// Failed to write output.
    #[error("failed to write output: {source}")]
    WriteError {
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON: {source}")]
    JsonError {
        #[source]
        source: serde_json::Error,
    },

    /// The submission program could not be started or fed.
    #[error("failed to run submission program '{program}': {source}")]
    SubmitSpawn {
        #[source]
        source: std::io::Error,
        program: String,
    },

    /// The submission program rejected a job.
    #[error("submission program '{program}' rejected job for sample '{sample}' ({status})")]
    Submission {
        program: String,
        sample: String,
        status: std::process::ExitStatus,
    },

    /// An external tool could not be found or has the wrong version.
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Building a reference index failed.
    #[error("failed to index reference '{path}': {details}")]
    IndexBuild { details: String, path: PathBuf },
}

/// Error for a path that cannot be decomposed into directory, stem and extension.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid read file path '{path}': {reason}")]
pub struct InvalidPathError {
    /// The rejected path, as given.
    pub path: String,
    /// Why it was rejected.
    pub reason: &'static str,
}

/// Error for an unusable forward/reverse designator pair.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DesignatorError {
    /// A designator was the empty string.
    #[error("{which} designator must not be empty")]
    Empty { which: &'static str },

    /// Forward and reverse designators were the same.
    #[error("forward and reverse designators are both '{designator}'")]
    Identical { designator: String },
}

/// Errors from checking an external tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool could not be executed at all.
    #[error("could not determine the version of {name}; is it installed and on PATH? ({source})")]
    Missing {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran but its output did not satisfy the requirement.
    #[error("incorrect version of {name} installed: version {required} is required")]
    WrongVersion { name: String, required: String },

    /// The tool ran but no version number could be found in its output.
    #[error("cannot find {name} version number in output of '{command}'")]
    UnknownVersion { name: String, command: String },
}

impl From<std::io::Error> for ReadSetError {
    fn from(source: std::io::Error) -> Self {
        ReadSetError::WriteError { source }
    }
}

impl From<serde_json::Error> for ReadSetError {
    fn from(source: serde_json::Error) -> Self {
        ReadSetError::JsonError { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_path_error_display() {
        let err = InvalidPathError {
            path: String::new(),
            reason: "path is empty",
        };
        assert_eq!(err.to_string(), "invalid read file path '': path is empty");
    }

    #[test]
    fn conflicting_mode_display() {
        let err = ReadSetError::ConflictingMode {
            single: 2,
            paired: 4,
        };
        assert_eq!(
            err.to_string(),
            "conflicting inputs: 2 single-end and 4 paired-end files given; supply only one kind"
        );
    }

    #[test]
    fn readset_error_from_designator_error() {
        let err: ReadSetError = DesignatorError::Empty { which: "forward" }.into();
        assert!(matches!(
            err,
            ReadSetError::InvalidDesignator(DesignatorError::Empty { which: "forward" })
        ));
        assert_eq!(err.to_string(), "forward designator must not be empty");
    }

    #[test]
    fn wrong_version_display() {
        let err = ToolError::WrongVersion {
            name: "samtools".to_string(),
            required: "0.1.18".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "incorrect version of samtools installed: version 0.1.18 is required"
        );
    }
}
