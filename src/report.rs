//! Rendering a [`Resolution`] for people and pipelines.

use std::{collections::BTreeMap, io::Write};

use serde::Serialize;

use crate::{
    cli::OutputFormat,
    error::ReadSetError,
    readset::{ReadSet, Resolution, SampleKey, Warning},
};

/// JSON shape of a report.
#[derive(Serialize)]
struct Report<'a> {
    paired_count: usize,
    single_count: usize,
    read_sets: &'a BTreeMap<SampleKey, ReadSet>,
    warnings: &'a [Warning],
}

/// Writes `resolution` to `writer` in the requested format.
///
/// - `Text`: `sample (kind): file [file]` per read set, then totals.
/// - `Tsv`: a `sample  kind  read1  read2` table with a header row.
/// - `Json`: an object with counts, read sets and warnings.
///
/// # Errors
///
/// Returns [`ReadSetError::WriteError`] or [`ReadSetError::JsonError`] if
/// output fails.
pub fn write_report<W: Write>(
    resolution: &Resolution,
    format: OutputFormat,
    mut writer: W,
) -> Result<(), ReadSetError> {
    match format {
        OutputFormat::Text => {
            for (sample, set) in resolution {
                let files: Vec<_> = set.files().iter().map(|f| f.path()).collect();
                writeln!(writer, "{sample} ({}): {}", set.kind(), files.join(" "))?;
            }
            write_summary(resolution, &mut writer)?;
        }
        OutputFormat::Tsv => {
            writeln!(writer, "sample\tkind\tread1\tread2")?;
            for (sample, set) in resolution {
                let files = set.files();
                let read1 = files.first().map_or("", |f| f.path());
                let read2 = files.get(1).map_or("", |f| f.path());
                writeln!(writer, "{sample}\t{}\t{read1}\t{read2}", set.kind())?;
            }
        }
        OutputFormat::Json => {
            let report = Report {
                paired_count: resolution.paired_count(),
                single_count: resolution.single_count(),
                read_sets: resolution.sets(),
                warnings: resolution.warnings(),
            };
            serde_json::to_writer_pretty(&mut writer, &report)?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Writes the paired and single totals, omitting a zero total.
///
/// # Errors
///
/// Returns [`ReadSetError::WriteError`] if output fails.
pub fn write_summary<W: Write>(resolution: &Resolution, mut writer: W) -> Result<(), ReadSetError> {
    let paired = resolution.paired_count();
    let single = resolution.single_count();
    if paired > 0 {
        writeln!(writer, "Total paired readsets found: {paired}")?;
    }
    if single > 0 {
        writeln!(writer, "Total single reads found: {single}")?;
    }
    Ok(())
}
