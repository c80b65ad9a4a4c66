//! Destinations for generated job commands.
//!
//! A [`JobSink`] receives each [`JobCommand`] once. [`WriterSink`] prints
//! commands (a dry run); [`ProgramSink`] hands each command, wrapped in a
//! minimal shell script, to an external submission program such as a
//! cluster scheduler's submit command, on its standard input.

use std::{
    io::{self, Write},
    process::{Command, Stdio},
};

#[cfg(feature = "tracing")]
use tracing::{debug, info};

use crate::{command::JobCommand, error::ReadSetError};

/// Receives generated job commands.
pub trait JobSink {
    /// Submits one job.
    ///
    /// # Errors
    ///
    /// Returns a [`ReadSetError`] if the job could not be delivered.
    fn submit(&mut self, job: &JobCommand) -> Result<(), ReadSetError>;
}

/// Writes one command line per job.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> JobSink for WriterSink<W> {
    fn submit(&mut self, job: &JobCommand) -> Result<(), ReadSetError> {
        writeln!(self.writer, "{job}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Interpreter line that starts every script piped to a submission program.
pub const SCRIPT_SHEBANG: &str = "#!/bin/sh";

/// The script [`ProgramSink`] pipes for `job`: [`SCRIPT_SHEBANG`], then the
/// command line.
#[must_use]
pub fn job_script(job: &JobCommand) -> String {
    format!("{SCRIPT_SHEBANG}\n{job}\n")
}

/// Runs `program` once per job, writing [`job_script`] to its stdin.
///
/// Schedulers such as `sbatch` refuse scripts without an interpreter line.
/// The child is always waited on; a program that exits successfully without
/// reading its input is not an error.
#[derive(Debug, Clone)]
pub struct ProgramSink {
    program: String,
    args: Vec<String>,
}

impl ProgramSink {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Adds arguments passed to the program on every run.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn spawn_error(&self, source: io::Error) -> ReadSetError {
        ReadSetError::SubmitSpawn {
            source,
            program: self.program.clone(),
        }
    }
}

impl JobSink for ProgramSink {
    fn submit(&mut self, job: &JobCommand) -> Result<(), ReadSetError> {
        #[cfg(feature = "tracing")]
        debug!(program = %self.program, sample = %job.sample(), "Submitting job");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let written = child
            .stdin
            .take()
            .map_or(Ok(()), |mut stdin| stdin.write_all(job_script(job).as_bytes()));

        let status = child.wait().map_err(|e| self.spawn_error(e))?;
        if !status.success() {
            return Err(ReadSetError::Submission {
                program: self.program.clone(),
                sample: job.sample().to_string(),
                status,
            });
        }

        if let Err(e) = written {
            if e.kind() != io::ErrorKind::BrokenPipe {
                return Err(self.spawn_error(e));
            }
        }

        #[cfg(feature = "tracing")]
        info!(sample = %job.sample(), "Job submitted");

        Ok(())
    }
}

/// Submits every job in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first error reported by `sink`.
pub fn submit_all<S: JobSink + ?Sized>(sink: &mut S, jobs: &[JobCommand]) -> Result<usize, ReadSetError> {
    for job in jobs {
        sink.submit(job)?;
    }
    Ok(jobs.len())
}
