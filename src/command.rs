//! Downstream typing-pipeline commands, one per read set.

use crate::{
    config::Designators,
    readset::{ReadSet, Resolution, SampleKey},
};

/// The parts of a downstream command shared by every sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTemplate {
    /// Executable to invoke, e.g. `srst2`.
    pub script: String,
    /// Output identifier; each sample writes to `<sample>_<label>`.
    pub label: String,
    /// Extra arguments appended verbatim.
    pub other_args: String,
}

/// A downstream command for one sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCommand {
    sample: SampleKey,
    args: Vec<String>,
}

impl JobCommand {
    /// Builds the command for `sample`.
    ///
    /// Paired read sets are passed with `--input_pe` and the designators;
    /// single and unpaired ones with `--input_se`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use readsets::command::{JobCommand, JobTemplate};
    /// use readsets::config::Designators;
    /// use readsets::filename::FileSpec;
    /// use readsets::readset::{ReadSet, SampleKey};
    ///
    /// let template = JobTemplate {
    ///     script: "srst2".into(),
    ///     label: "run1".into(),
    ///     other_args: String::new(),
    /// };
    /// let set = ReadSet::Single { file: FileSpec::parse("s.fq.gz")? };
    /// let job = JobCommand::new(&template, &Designators::default(), &SampleKey::new("s"), &set);
    /// assert_eq!(job.to_string(), "srst2 --input_se s.fq.gz --output s_run1 --log");
    /// # Ok::<(), readsets::error::InvalidPathError>(())
    /// ```
    #[must_use]
    pub fn new(
        template: &JobTemplate,
        designators: &Designators,
        sample: &SampleKey,
        set: &ReadSet,
    ) -> Self {
        let mut args = vec![template.script.clone()];

        match set {
            ReadSet::Paired { forward, reverse } => {
                args.extend([
                    "--input_pe".to_string(),
                    forward.path().to_string(),
                    reverse.path().to_string(),
                    "--forward".to_string(),
                    designators.forward().to_string(),
                    "--reverse".to_string(),
                    designators.reverse().to_string(),
                ]);
            }
            ReadSet::Single { file } | ReadSet::Unpaired { file, .. } => {
                args.extend(["--input_se".to_string(), file.path().to_string()]);
            }
        }

        args.extend([
            "--output".to_string(),
            format!("{sample}_{}", template.label),
            "--log".to_string(),
        ]);
        if !template.other_args.trim().is_empty() {
            args.push(template.other_args.trim().to_string());
        }

        Self {
            sample: sample.clone(),
            args,
        }
    }

    #[must_use]
    pub const fn sample(&self) -> &SampleKey {
        &self.sample
    }

    /// Program followed by its arguments; the pass-through arguments are
    /// kept as one element.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl std::fmt::Display for JobCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.args.join(" "))
    }
}

/// Builds one command per read set, in sample order.
#[must_use]
pub fn job_commands(
    resolution: &Resolution,
    template: &JobTemplate,
    designators: &Designators,
) -> Vec<JobCommand> {
    resolution
        .iter()
        .map(|(sample, set)| JobCommand::new(template, designators, sample, set))
        .collect()
}
