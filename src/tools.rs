//! Version checks for external tools.
//!
//! A [`ToolCheck`] runs a tool's version command and tests the text it
//! prints against a [`VersionRequirement`]. The test itself
//! ([`ToolCheck::check_output`]) needs no process and can be used on
//! captured output.

use std::{process::Command, sync::OnceLock};

use regex::Regex;

#[cfg(feature = "tracing")]
use tracing::{debug, info};

use crate::error::ToolError;

/// Samtools release required by the typing pipeline.
pub const SAMTOOLS_VERSION: &str = "0.1.18";

/// Oldest bowtie2 release supported by the typing pipeline.
pub const MINIMUM_BOWTIE2_VERSION: Version = Version {
    major: 2,
    minor: 1,
    patch: 0,
};

/// A `major.minor.patch` version number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn bowtie2_version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"bowtie2.* version (?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)")
            .unwrap_or_else(|e| unreachable!("invalid built-in pattern: {e}"))
    })
}

/// What a tool's version output must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionRequirement {
    /// The output contains this text.
    Contains(String),
    /// The output reports `bowtie2 ... version X.Y.Z` with at least this version.
    AtLeast(Version),
}

impl VersionRequirement {
    /// Human-readable requirement for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Contains(text) => text.clone(),
            Self::AtLeast(version) => format!(">= {version}"),
        }
    }
}

/// Finds the `bowtie2 ... version X.Y.Z` number in `text`.
#[must_use]
pub fn parse_bowtie2_version(text: &str) -> Option<Version> {
    let caps = bowtie2_version_regex().captures(text)?;
    let field = |name: &str| caps.name(name)?.as_str().parse::<u64>().ok();
    Some(Version {
        major: field("major")?,
        minor: field("minor")?,
        patch: field("patch")?,
    })
}

/// An external tool and the version it must report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCheck {
    pub name: String,
    pub command: Vec<String>,
    pub requirement: VersionRequirement,
    /// Version shown in error messages.
    pub required: String,
}

impl ToolCheck {
    /// Samtools prints its usage, including `Version: X`, when run bare.
    #[must_use]
    pub fn samtools() -> Self {
        Self {
            name: "samtools".to_string(),
            command: vec!["samtools".to_string()],
            requirement: VersionRequirement::Contains(format!("Version: {SAMTOOLS_VERSION}")),
            required: SAMTOOLS_VERSION.to_string(),
        }
    }

    #[must_use]
    pub fn bowtie2() -> Self {
        let requirement = VersionRequirement::AtLeast(MINIMUM_BOWTIE2_VERSION);
        Self {
            name: "bowtie2".to_string(),
            command: vec!["bowtie2".to_string(), "--version".to_string()],
            required: requirement.describe(),
            requirement,
        }
    }

    /// Tests captured version output against the requirement.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::UnknownVersion`] if an `AtLeast` requirement finds
    /// no version number, and [`ToolError::WrongVersion`] if the requirement
    /// is not met.
    ///
    /// # Example
    ///
    /// ```rust
    /// use readsets::tools::ToolCheck;
    ///
    /// let bowtie2 = ToolCheck::bowtie2();
    /// assert!(bowtie2.check_output("/usr/bin/bowtie2-align-s version 2.4.5\n").is_ok());
    /// assert!(bowtie2.check_output("/usr/bin/bowtie2-align-s version 2.0.6\n").is_err());
    /// ```
    pub fn check_output(&self, text: &str) -> Result<(), ToolError> {
        let satisfied = match &self.requirement {
            VersionRequirement::Contains(needle) => text.contains(needle.as_str()),
            VersionRequirement::AtLeast(minimum) => {
                let found = parse_bowtie2_version(text).ok_or_else(|| ToolError::UnknownVersion {
                    name: self.name.clone(),
                    command: self.command.join(" "),
                })?;

                #[cfg(feature = "tracing")]
                debug!(tool = %self.name, %found, %minimum, "Found tool version");

                found >= *minimum
            }
        };

        if satisfied {
            Ok(())
        } else {
            Err(ToolError::WrongVersion {
                name: self.name.clone(),
                required: self.required.clone(),
            })
        }
    }

    /// Runs the version command and checks its combined stdout and stderr.
    ///
    /// A non-zero exit status is not an error in itself: some tools (samtools
    /// among them) exit non-zero when printing their version.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Missing`] if the command cannot be run, otherwise
    /// as [`check_output`](Self::check_output).
    pub fn verify(&self) -> Result<(), ToolError> {
        let missing = |source| ToolError::Missing {
            name: self.name.clone(),
            source,
        };
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| missing(std::io::Error::other("empty version command")))?;

        let output = Command::new(program).args(args).output().map_err(missing)?;
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        self.check_output(&text)?;

        #[cfg(feature = "tracing")]
        info!(tool = %self.name, "Tool version accepted");

        Ok(())
    }
}
