use std::process::Command;

fn readsets_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_readsets"))
}

#[test]
fn cli_help_flag() {
    let output = readsets_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("readsets"));
    assert!(stdout.contains("--input-pe"));
}

#[test]
fn cli_version_flag() {
    let output = readsets_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_no_inputs_fails() {
    let output = readsets_cmd().output().expect("Failed to execute");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no read files supplied"));
}

#[test]
fn cli_both_modes_fails() {
    let output = readsets_cmd()
        .args(["--input-se", "a.fq", "--input-pe", "b_1.fq", "b_2.fq"])
        .output()
        .expect("Failed to execute");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("conflicting inputs"));
}

#[test]
fn cli_identical_designators_fail() {
    let output = readsets_cmd()
        .args(["--input-pe", "a_1.fq", "--forward", "_1", "--reverse", "_1"])
        .output()
        .expect("Failed to execute");
    assert!(!output.status.success());
}

#[test]
fn cli_paired_text_report() {
    let output = readsets_cmd()
        .args([
            "--input-pe",
            "reads/sample_S1_L001_R1_001.fastq.gz",
            "reads/sample_S1_L001_R2_001.fastq.gz",
        ])
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sample (paired): reads/sample_S1_L001_R1_001.fastq.gz"));
    assert!(stdout.contains("Total paired readsets found: 1"));
    assert!(output.stderr.is_empty());
}

#[test]
fn cli_warnings_go_to_stderr() {
    let output = readsets_cmd()
        .args(["--input-pe", "sampleA_1.fastq.gz", "mystery.fastq"])
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not find pair for forward read: sampleA_1.fastq.gz"));
    assert!(stderr.contains("could not determine forward/reverse read status for input file mystery.fastq"));
}

#[test]
fn cli_quiet_suppresses_warnings() {
    let output = readsets_cmd()
        .args(["--input-pe", "sampleA_1.fastq.gz", "--quiet"])
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn cli_format_tsv() {
    let output = readsets_cmd()
        .args(["--input-se", "x.fq", "y.fq", "--format", "tsv"])
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "sample\tkind\tread1\tread2",
            "x\tsingle\tx.fq\t",
            "y\tsingle\ty.fq\t"
        ]
    );
}

#[test]
fn cli_format_json() {
    let output = readsets_cmd()
        .args([
            "--input-pe",
            "s_R1.fq",
            "s_R2.fq",
            "--forward",
            "_R1",
            "--reverse",
            "_R2",
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["paired_count"], 1);
    assert_eq!(json["read_sets"]["s"]["reverse"]["path"], "s_R2.fq");
}

#[test]
fn cli_fallback_key_sample() {
    let output = readsets_cmd()
        .args([
            "--input-pe",
            "weird_S1_L001_R3_001.fastq.gz",
            "--fallback-key",
            "sample",
            "--format",
            "tsv",
            "--quiet",
        ])
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("weird\tsingle\tweird_S1_L001_R3_001.fastq.gz"));
}

#[test]
fn cli_generates_commands() {
    let output = readsets_cmd()
        .args([
            "--input-pe",
            "d/a_1.fq.gz",
            "d/a_2.fq.gz",
            "d/b_1.fq.gz",
            "--output",
            "run1",
            "--other-args",
            "--mlst_db Ecoli.fasta --mlst_definitions ecoli.txt",
        ])
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "srst2 --input_pe d/a_1.fq.gz d/a_2.fq.gz --forward _1 --reverse _2 --output a_run1 --log --mlst_db Ecoli.fasta --mlst_definitions ecoli.txt",
            "srst2 --input_se d/b_1.fq.gz --output b_run1 --log --mlst_db Ecoli.fasta --mlst_definitions ecoli.txt",
        ]
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Total paired readsets found: 1"));
    assert!(stderr.contains("Total single reads found: 1"));
}

#[test]
fn cli_submit_requires_output() {
    let output = readsets_cmd()
        .args(["--input-se", "a.fq", "--submit", "cat"])
        .output()
        .expect("Failed to execute");
    assert!(!output.status.success());
}

#[cfg(unix)]
#[test]
fn cli_submit_pipes_each_job() {
    let output = readsets_cmd()
        .args([
            "--input-se",
            "a.fq",
            "b.fq",
            "--output",
            "x",
            "--submit",
            "cat",
        ])
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    // `cat` echoes each piped job script to the shared stdout.
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "#!/bin/sh");
    assert!(lines[1].starts_with("srst2 --input_se a.fq"));
    assert_eq!(lines[2], "#!/bin/sh");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("jobs submitted"));
}

#[test]
fn cli_failed_submission_exits_nonzero() {
    let output = readsets_cmd()
        .args([
            "--input-se",
            "a.fq",
            "--output",
            "x",
            "--submit",
            "readsets-no-such-submit-program",
        ])
        .output()
        .expect("Failed to execute");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Application error"));
}
