//! Reference database indexing.
//!
//! The typing pipeline aligns reads against FASTA databases that must be
//! indexed for bowtie2 and samtools before any job runs. This module finds
//! the databases named in the pass-through arguments and builds whatever
//! index is missing.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

#[cfg(feature = "tracing")]
use tracing::{info, info_span};

use crate::{error::ReadSetError, tools::ToolCheck};

/// Extracts database paths from a pass-through argument string.
///
/// Takes the single path after `--mlst_db` and every path after `--gene_db`
/// up to the next `--` option.
///
/// # Example
///
/// ```rust
/// use readsets::index::reference_databases;
///
/// let dbs = reference_databases("--mlst_db Ecoli.fasta --mlst_delimiter _ --gene_db res.fasta vir.fasta");
/// assert_eq!(dbs, ["Ecoli.fasta", "res.fasta", "vir.fasta"]);
/// ```
#[must_use]
pub fn reference_databases(other_args: &str) -> Vec<String> {
    let mut databases = Vec::new();
    let mut tokens = other_args.split_whitespace().peekable();

    while let Some(token) = tokens.next() {
        match token {
            "--mlst_db" => {
                if let Some(db) = tokens.next_if(|t| !t.starts_with("--")) {
                    databases.push(db.to_string());
                }
            }
            "--gene_db" => {
                while let Some(db) = tokens.next_if(|t| !t.starts_with("--")) {
                    databases.push(db.to_string());
                }
            }
            _ => {}
        }
    }

    databases
}

/// An external indexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexTool {
    Bowtie2,
    Samtools,
}

impl IndexTool {
    /// The file whose presence shows `fasta` is already indexed.
    #[must_use]
    pub fn index_path(self, fasta: &Path) -> PathBuf {
        let suffix = match self {
            Self::Bowtie2 => ".1.bt2",
            Self::Samtools => ".fai",
        };
        let mut path = fasta.as_os_str().to_owned();
        path.push(suffix);
        PathBuf::from(path)
    }

    /// Program that builds this tool's index.
    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::Bowtie2 => "bowtie2-build",
            Self::Samtools => "samtools",
        }
    }

    /// Arguments that index `fasta`; bowtie2 writes its index next to the
    /// fasta, under the fasta's own name.
    #[must_use]
    pub fn build_args(self, fasta: &Path) -> Vec<OsString> {
        match self {
            Self::Bowtie2 => vec![fasta.into(), fasta.into()],
            Self::Samtools => vec!["faidx".into(), fasta.into()],
        }
    }

    /// Command that builds the index for `fasta`.
    #[must_use]
    pub fn build_command(self, fasta: &Path) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.build_args(fasta));
        command
    }

    /// Version check to pass before indexing.
    #[must_use]
    pub fn version_check(self) -> ToolCheck {
        match self {
            Self::Bowtie2 => ToolCheck::bowtie2(),
            Self::Samtools => ToolCheck::samtools(),
        }
    }
}

impl std::fmt::Display for IndexTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bowtie2 => write!(f, "bowtie2"),
            Self::Samtools => write!(f, "samtools"),
        }
    }
}

/// What happened to one database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOutcome {
    AlreadyBuilt,
    Built,
}

/// Builds the indexes of one [`IndexTool`].
///
/// [`Indexer::new`] runs the tool's own program and version check; both can
/// be replaced, e.g. to go through a wrapper script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indexer {
    tool: IndexTool,
    program: String,
    check: ToolCheck,
}

impl Indexer {
    #[must_use]
    pub fn new(tool: IndexTool) -> Self {
        Self {
            tool,
            program: tool.program().to_string(),
            check: tool.version_check(),
        }
    }

    /// Runs `program` with the tool's build arguments instead.
    #[must_use]
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Replaces the version check run by [`prepare`](Self::prepare).
    #[must_use]
    pub fn version_check(mut self, check: ToolCheck) -> Self {
        self.check = check;
        self
    }

    #[must_use]
    pub const fn tool(&self) -> IndexTool {
        self.tool
    }

    /// Command that builds the index for `fasta`.
    #[must_use]
    pub fn build_command(&self, fasta: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.tool.build_args(fasta));
        command
    }

    /// Makes sure `fasta` has an index, building it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`ReadSetError::IndexBuild`] if the indexer cannot be run or
    /// exits unsuccessfully.
    pub fn ensure(&self, fasta: &Path) -> Result<IndexOutcome, ReadSetError> {
        let tool = self.tool;
        if tool.index_path(fasta).exists() {
            #[cfg(feature = "tracing")]
            info!(%tool, fasta = %fasta.display(), "Index already built");
            return Ok(IndexOutcome::AlreadyBuilt);
        }

        #[cfg(feature = "tracing")]
        info!(%tool, program = %self.program, fasta = %fasta.display(), "Building index");

        let status = self
            .build_command(fasta)
            .status()
            .map_err(|e| ReadSetError::IndexBuild {
                details: format!("could not run {tool} indexer `{}`: {e}", self.program),
                path: fasta.to_path_buf(),
            })?;

        if status.success() {
            Ok(IndexOutcome::Built)
        } else {
            Err(ReadSetError::IndexBuild {
                details: format!("{tool} indexer failed ({status})"),
                path: fasta.to_path_buf(),
            })
        }
    }

    /// Verifies the tool's version, then indexes every database in turn.
    ///
    /// The version check is skipped when there is nothing to index.
    ///
    /// # Errors
    ///
    /// Returns [`ReadSetError::Tool`] if the version check fails, or the first
    /// indexing error.
    pub fn prepare<P: AsRef<Path>>(&self, databases: &[P]) -> Result<Vec<IndexOutcome>, ReadSetError> {
        if databases.is_empty() {
            return Ok(Vec::new());
        }

        #[cfg(feature = "tracing")]
        let _span = info_span!("prepare_indexes", tool = %self.tool, databases = databases.len()).entered();

        self.check.verify()?;

        databases.iter().map(|fasta| self.ensure(fasta.as_ref())).collect()
    }
}

/// Makes sure `fasta` has an index from `tool`, building it if absent.
///
/// # Errors
///
/// As [`Indexer::ensure`].
pub fn ensure_indexed(tool: IndexTool, fasta: &Path) -> Result<IndexOutcome, ReadSetError> {
    Indexer::new(tool).ensure(fasta)
}

/// Verifies `tool`'s version, then indexes every database in turn.
///
/// # Errors
///
/// As [`Indexer::prepare`].
pub fn prepare_indexes<P: AsRef<Path>>(
    tool: IndexTool,
    databases: &[P],
) -> Result<Vec<IndexOutcome>, ReadSetError> {
    Indexer::new(tool).prepare(databases)
}
