//! Command-line interface definition.

use clap::{Parser, ValueEnum};

use crate::config::{FallbackKey, DEFAULT_FORWARD, DEFAULT_REVERSE};

/// Discover paired-end and single-end read sets from FASTQ file names.
#[derive(Parser, Debug)]
#[command(name = "readsets")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// Single-end read file(s) (may be gzipped)
    #[arg(long, num_args = 1.., value_name = "FILE")]
    pub input_se: Option<Vec<String>>,

    /// Paired-end read files (may be gzipped)
    #[arg(long, num_args = 1.., value_name = "FILE")]
    pub input_pe: Option<Vec<String>>,

    /// Designator for forward reads when names are NOT in MiSeq format
    /// (sample_S1_L001_R1_001.fastq.gz); e.g. sample_1.fastq.gz
    #[arg(long, default_value = DEFAULT_FORWARD, allow_hyphen_values = true)]
    pub forward: String,

    /// Designator for reverse reads when names are NOT in MiSeq format
    /// (sample_S1_L001_R2_001.fastq.gz); e.g. sample_2.fastq.gz
    #[arg(long, default_value = DEFAULT_REVERSE, allow_hyphen_values = true)]
    pub reverse: String,

    /// Key for MiSeq-shaped paired files whose read marker is not R1 or R2
    #[arg(long, value_enum, default_value = "stem")]
    pub fallback_key: FallbackKey,

    /// Report format (ignored when generating commands)
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Identifier for outputs; generates one command per read set, with
    /// outputs named <sample>_<OUTPUT>
    #[arg(long, value_name = "OUTPUT")]
    pub output: Option<String>,

    /// Typing pipeline executable used in generated commands
    #[arg(long, default_value = "srst2")]
    pub script: String,

    /// All other arguments to pass through to the typing pipeline
    #[arg(long, allow_hyphen_values = true)]
    pub other_args: Option<String>,

    /// Program that receives each generated command as a `#!/bin/sh` script
    /// on stdin (e.g. sbatch); commands are printed to stdout when omitted
    #[arg(long, value_name = "PROGRAM", requires = "output")]
    pub submit: Option<String>,

    /// Check bowtie2/samtools and index the databases named in --other-args
    #[arg(long, requires = "output")]
    pub prepare_index: bool,

    /// Suppress warnings and summary on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for resolution reports.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listing, one read set per line
    #[default]
    Text,
    /// Tab-separated values (sample\tkind\tread1\tread2)
    Tsv,
    /// JSON object with read sets, counts and warnings
    Json,
}
