use std::{
    io::{self, stdout, BufWriter},
    process,
};

use clap::Parser;
use colored::Colorize;
use readsets::{
    cli::Args,
    command::job_commands,
    config::Config,
    error::ReadSetError,
    index::{prepare_indexes, reference_databases, IndexOutcome, IndexTool},
    report::{write_report, write_summary},
    resolve::resolve,
    sink::{submit_all, ProgramSink, WriterSink},
};

fn main() {
    let args = Args::parse();

    #[cfg(feature = "tracing")]
    init_tracing();

    let config = Config::new(args).unwrap_or_else(|e| {
        eprintln!();
        eprintln!(
            "{}\n {}",
            "Problem parsing arguments:".blue().bold(),
            e.to_string().blue()
        );
        eprintln!();
        eprintln!(
            "{}\n {}\n  {}\n   {}",
            "Help menu:".blue().bold(),
            "$ cargo run -- --help".bold(),
            "or".underline(),
            "$ readsets --help".bold()
        );
        eprintln!();
        process::exit(1);
    });

    if let Err(e) = run(&config) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the default of errors only.
#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(config: &Config) -> Result<(), ReadSetError> {
    let resolution = resolve(&config.input, &config.designators, config.fallback_key);

    if !config.quiet {
        for warning in resolution.warnings() {
            eprintln!("{} {warning}", "warning:".yellow().bold());
        }
    }

    let Some(template) = &config.jobs else {
        return write_report(&resolution, config.format, BufWriter::new(stdout()));
    };

    if !config.quiet {
        write_summary(&resolution, io::stderr())?;
    }

    if config.prepare_index {
        let databases = reference_databases(&template.other_args);
        for tool in [IndexTool::Bowtie2, IndexTool::Samtools] {
            let outcomes = prepare_indexes(tool, &databases)?;
            if !config.quiet {
                for (db, outcome) in databases.iter().zip(outcomes) {
                    let status = match outcome {
                        IndexOutcome::AlreadyBuilt => "already built",
                        IndexOutcome::Built => "built",
                    };
                    eprintln!("{} index for {}: {status}", tool.to_string().bold(), db.underline());
                }
            }
        }
    }

    let jobs = job_commands(&resolution, template, &config.designators);
    match &config.submit {
        Some(program) => {
            let submitted = submit_all(&mut ProgramSink::new(program.as_str()), &jobs)?;
            if !config.quiet {
                eprintln!(
                    "{}: {}",
                    "jobs submitted".bold(),
                    submitted.to_string().blue().bold()
                );
            }
        }
        None => {
            submit_all(&mut WriterSink::new(stdout().lock()), &jobs)?;
        }
    }

    Ok(())
}
