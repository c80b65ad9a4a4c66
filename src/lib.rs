//! Discover sequencing read sets from FASTQ file names.
//!
//! Given a flat list of read files, `readsets` works out which sample each
//! file belongs to and, for paired-end data, which files are mates. Two
//! naming conventions are understood:
//!
//! - Illumina/MiSeq names such as `sample_S1_L001_R1_001.fastq.gz`, where
//!   `_R1`/`_R2` mark the forward and reverse reads;
//! - plain names such as `sample_1.fastq.gz`, where configurable literal
//!   suffixes (`_1`/`_2` by default) mark the mates.
//!
//! Problems with individual files never abort a run; they are returned as
//! [`readset::Warning`]s next to the read sets.
//!
//! # Example
//!
//! ```rust
//! use readsets::builder::Resolver;
//! use readsets::readset::ReadSet;
//!
//! let resolution = Resolver::new().resolve_paired(&[
//!     "reads/sample_S1_L001_R1_001.fastq.gz",
//!     "reads/sample_S1_L001_R2_001.fastq.gz",
//!     "reads/other_1.fastq.gz",
//! ]);
//!
//! assert!(matches!(resolution.get("sample"), Some(ReadSet::Paired { .. })));
//! assert_eq!(resolution.paired_count(), 1);
//! assert_eq!(resolution.single_count(), 1);
//! assert_eq!(resolution.warnings().len(), 1);
//! ```
//!
//! # Feature Flags
//!
//! - `tracing` (default): emit `tracing` spans and events while resolving,
//!   submitting and indexing.

pub mod builder;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod filename;
pub mod index;
pub mod naming;
pub mod readset;
pub mod report;
pub mod resolve;
pub mod sink;
pub mod tools;
