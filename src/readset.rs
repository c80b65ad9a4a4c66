//! Resolved read sets and the diagnostics gathered while resolving them.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{error::InvalidPathError, filename::FileSpec, naming::Direction};

/// Identifies a sample; the key of a [`Resolution`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SampleKey(String);

impl SampleKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SampleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for SampleKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The read file(s) belonging to one sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReadSet {
    /// A single-end read file.
    Single { file: FileSpec },
    /// Both mates of a paired-end sample.
    Paired { forward: FileSpec, reverse: FileSpec },
    /// One mate of a paired-end sample whose partner was not found.
    Unpaired { file: FileSpec, direction: Direction },
}

impl ReadSet {
    /// Returns `true` for [`ReadSet::Paired`].
    #[must_use]
    pub const fn is_paired(&self) -> bool {
        matches!(self, Self::Paired { .. })
    }

    /// The files in this set, forward mate first.
    #[must_use]
    pub fn files(&self) -> Vec<&FileSpec> {
        match self {
            Self::Single { file } | Self::Unpaired { file, .. } => vec![file],
            Self::Paired { forward, reverse } => vec![forward, reverse],
        }
    }

    /// Short name of the variant, as used in reports.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Single { .. } => "single",
            Self::Paired { .. } => "paired",
            Self::Unpaired { .. } => "unpaired",
        }
    }
}

/// Why a file's read direction could not be determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "cause", rename_all = "snake_case")]
pub enum AmbiguityCause {
    /// The name follows the Illumina convention but the read marker is not
    /// `_R1` or `_R2`.
    IlluminaReadMarker { marker: String },
    /// No naming scheme recognised the name.
    NoDesignator,
}

/// A per-file problem found during resolution.
///
/// Warnings never stop a resolution; each describes a file that was dropped
/// or handled differently from its neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "warning", rename_all = "snake_case")]
pub enum Warning {
    /// The path could not be decomposed; the file is skipped.
    InvalidPath { path: String, reason: String },
    /// The read direction could not be determined.
    AmbiguousDirection {
        path: String,
        #[serde(flatten)]
        cause: AmbiguityCause,
    },
    /// A mate was found without its partner.
    MissingMate { path: String, direction: Direction },
    /// The file mapped to a sample (and mate) that was already taken; the
    /// file is skipped.
    DuplicateSample { path: String, sample: SampleKey },
}

impl From<InvalidPathError> for Warning {
    fn from(err: InvalidPathError) -> Self {
        Self::InvalidPath {
            path: err.path,
            reason: err.reason.to_string(),
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPath { path, reason } => {
                write!(f, "skipping invalid input '{path}': {reason}")
            }
            Self::AmbiguousDirection {
                path,
                cause: AmbiguityCause::IlluminaReadMarker { marker },
            } => write!(
                f,
                "could not determine forward/reverse read status for input file {path}: \
                 it matches the MiSeq naming convention (samplename_S1_L001_[R1]_001) \
                 but has read marker '{marker}' instead of R1 or R2"
            ),
            Self::AmbiguousDirection {
                path,
                cause: AmbiguityCause::NoDesignator,
            } => write!(
                f,
                "could not determine forward/reverse read status for input file {path}"
            ),
            Self::MissingMate { path, direction } => {
                write!(f, "could not find pair for {direction} read: {path}")
            }
            Self::DuplicateSample { path, sample } => {
                write!(f, "sample '{sample}' already has this read; ignoring {path}")
            }
        }
    }
}

/// Read sets keyed by sample, with the warnings raised while building them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub(crate) sets: BTreeMap<SampleKey, ReadSet>,
    pub(crate) warnings: Vec<Warning>,
}

impl Resolution {
    /// Read sets, ordered by sample key.
    #[must_use]
    pub const fn sets(&self) -> &BTreeMap<SampleKey, ReadSet> {
        &self.sets
    }

    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    #[must_use]
    pub fn get(&self, sample: &str) -> Option<&ReadSet> {
        self.sets.get(sample)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Number of [`ReadSet::Paired`] entries.
    #[must_use]
    pub fn paired_count(&self) -> usize {
        self.sets.values().filter(|set| set.is_paired()).count()
    }

    /// Number of [`ReadSet::Single`] and [`ReadSet::Unpaired`] entries.
    #[must_use]
    pub fn single_count(&self) -> usize {
        self.sets.len() - self.paired_count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SampleKey, &ReadSet)> {
        self.sets.iter()
    }

    /// Inserts `set` under `sample` unless the key is taken, in which case a
    /// [`Warning::DuplicateSample`] is recorded for each of its files.
    pub(crate) fn insert(&mut self, sample: SampleKey, set: ReadSet) {
        if self.sets.contains_key(&sample) {
            for file in set.files() {
                self.warnings.push(Warning::DuplicateSample {
                    path: file.path().to_string(),
                    sample: sample.clone(),
                });
            }
        } else {
            self.sets.insert(sample, set);
        }
    }

    pub(crate) fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }
}

impl<'a> IntoIterator for &'a Resolution {
    type Item = (&'a SampleKey, &'a ReadSet);
    type IntoIter = std::collections::btree_map::Iter<'a, SampleKey, ReadSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str) -> FileSpec {
        FileSpec::parse(path).unwrap()
    }

    #[test]
    fn counts_follow_entries() {
        let mut resolution = Resolution::default();
        resolution.insert(
            SampleKey::new("a"),
            ReadSet::Paired {
                forward: file("a_1.fq"),
                reverse: file("a_2.fq"),
            },
        );
        resolution.insert(SampleKey::new("b"), ReadSet::Single { file: file("b.fq") });
        resolution.insert(
            SampleKey::new("c"),
            ReadSet::Unpaired {
                file: file("c_2.fq"),
                direction: Direction::Reverse,
            },
        );

        assert_eq!(resolution.len(), 3);
        assert_eq!(resolution.paired_count(), 1);
        assert_eq!(resolution.single_count(), 2);
    }

    #[test]
    fn duplicate_insert_keeps_first() {
        let mut resolution = Resolution::default();
        resolution.insert(SampleKey::new("a"), ReadSet::Single { file: file("x/a.fq") });
        resolution.insert(SampleKey::new("a"), ReadSet::Single { file: file("y/a.fq") });

        assert_eq!(
            resolution.get("a"),
            Some(&ReadSet::Single { file: file("x/a.fq") })
        );
        assert_eq!(
            resolution.warnings(),
            &[Warning::DuplicateSample {
                path: "y/a.fq".to_string(),
                sample: SampleKey::new("a"),
            }]
        );
    }

    #[test]
    fn paired_files_forward_first() {
        let set = ReadSet::Paired {
            forward: file("a_1.fq"),
            reverse: file("a_2.fq"),
        };
        let paths: Vec<_> = set.files().iter().map(|f| f.path()).collect();
        assert_eq!(paths, ["a_1.fq", "a_2.fq"]);
        assert_eq!(set.kind(), "paired");
    }

    #[test]
    fn missing_mate_display() {
        let warning = Warning::MissingMate {
            path: "s_1.fq".to_string(),
            direction: Direction::Forward,
        };
        assert_eq!(warning.to_string(), "could not find pair for forward read: s_1.fq");
    }

    #[test]
    fn warning_json_shape() {
        let warning = Warning::AmbiguousDirection {
            path: "w.fq".to_string(),
            cause: AmbiguityCause::IlluminaReadMarker {
                marker: "_R3".to_string(),
            },
        };
        let json = serde_json::to_string(&warning).unwrap();
        assert_eq!(
            json,
            r#"{"warning":"ambiguous_direction","path":"w.fq","cause":"illumina_read_marker","marker":"_R3"}"#
        );
    }
}
