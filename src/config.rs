use clap::ValueEnum;
use serde::Serialize;

use crate::{
    cli::{Args, OutputFormat},
    command::JobTemplate,
    error::{DesignatorError, ReadSetError},
    resolve::ReadInput,
};

/// Default forward read designator, as in `sample_1.fastq.gz`.
pub const DEFAULT_FORWARD: &str = "_1";
/// Default reverse read designator, as in `sample_2.fastq.gz`.
pub const DEFAULT_REVERSE: &str = "_2";

/// Literal stem suffixes marking forward and reverse reads.
///
/// Only consulted for names that do not follow the Illumina convention.
/// Suffixes are compared byte for byte; characters such as `.` or `*` carry
/// no pattern meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Designators {
    forward: String,
    reverse: String,
}

impl Designators {
    /// Creates a validated designator pair.
    ///
    /// # Errors
    ///
    /// Returns [`DesignatorError`] if either designator is empty or both are equal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use readsets::config::Designators;
    ///
    /// let designators = Designators::new("_R1", "_R2")?;
    /// assert_eq!(designators.forward(), "_R1");
    ///
    /// assert!(Designators::new("_1", "_1").is_err());
    /// # Ok::<(), readsets::error::DesignatorError>(())
    /// ```
    pub fn new(forward: &str, reverse: &str) -> Result<Self, DesignatorError> {
        if forward.is_empty() {
            return Err(DesignatorError::Empty { which: "forward" });
        }
        if reverse.is_empty() {
            return Err(DesignatorError::Empty { which: "reverse" });
        }
        if forward == reverse {
            return Err(DesignatorError::Identical {
                designator: forward.to_string(),
            });
        }

        Ok(Self {
            forward: forward.to_string(),
            reverse: reverse.to_string(),
        })
    }

    #[must_use]
    pub fn forward(&self) -> &str {
        &self.forward
    }

    #[must_use]
    pub fn reverse(&self) -> &str {
        &self.reverse
    }
}

impl Default for Designators {
    fn default() -> Self {
        Self {
            forward: DEFAULT_FORWARD.to_string(),
            reverse: DEFAULT_REVERSE.to_string(),
        }
    }
}

/// Key used for an Illumina-shaped paired-end file whose read marker is
/// neither `_R1` nor `_R2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackKey {
    /// The full file stem, e.g. `weird_S1_L001_R3_001`.
    ///
    /// Differs from the sample name used for every other Illumina-shaped
    /// file, but matches the keys produced by earlier SRST2 tooling.
    #[default]
    Stem,
    /// The sample name extracted from the Illumina pattern, e.g. `weird`.
    Sample,
}

impl std::fmt::Display for FallbackKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stem => write!(f, "stem"),
            Self::Sample => write!(f, "sample"),
        }
    }
}

/// Validated settings for one command-line invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: ReadInput,
    pub designators: Designators,
    pub fallback_key: FallbackKey,
    pub format: OutputFormat,
    /// Present when downstream commands should be generated.
    pub jobs: Option<JobTemplate>,
    pub submit: Option<String>,
    pub prepare_index: bool,
    pub quiet: bool,
}

impl Config {
    /// Validates parsed command-line arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ReadSetError::ConflictingMode`] or [`ReadSetError::NoInput`]
    /// for unusable input combinations, and
    /// [`ReadSetError::InvalidDesignator`] for bad designators.
    pub fn new(args: Args) -> Result<Self, ReadSetError> {
        let input = ReadInput::from_options(args.input_se, args.input_pe)?;
        let designators = Designators::new(&args.forward, &args.reverse)?;

        let jobs = args.output.map(|label| JobTemplate {
            script: args.script,
            label,
            other_args: args.other_args.unwrap_or_default(),
        });

        Ok(Self {
            input,
            designators,
            fallback_key: args.fallback_key,
            format: args.format,
            jobs,
            submit: args.submit,
            prepare_index: args.prepare_index,
            quiet: args.quiet,
        })
    }
}
