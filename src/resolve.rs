//! Read set resolution.
//!
//! This module turns a list of read file paths into a [`Resolution`]: read
//! sets keyed by sample, with warnings for every file that could not be
//! placed cleanly.

use std::collections::BTreeMap;

#[cfg(feature = "tracing")]
use tracing::{debug, info, info_span, warn};

use crate::{
    config::{Designators, FallbackKey},
    error::ReadSetError,
    filename::FileSpec,
    naming::{classify, Classification, Direction, IlluminaName},
    readset::{AmbiguityCause, ReadSet, Resolution, SampleKey, Warning},
};

/// How the reads in a [`ReadInput`] were sequenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Single-end read files; each becomes its own read set.
    Single,
    /// Paired-end read files, to be matched into forward/reverse pairs.
    Paired,
}

/// A non-empty list of read files for one resolution, tagged with its
/// [`ReadMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadInput {
    mode: ReadMode,
    files: Vec<String>,
}

impl ReadInput {
    /// Single-end input.
    ///
    /// # Errors
    ///
    /// Returns [`ReadSetError::NoInput`] if `files` is empty.
    pub fn single(files: Vec<String>) -> Result<Self, ReadSetError> {
        Self::new(ReadMode::Single, files)
    }

    /// Paired-end input.
    ///
    /// # Errors
    ///
    /// Returns [`ReadSetError::NoInput`] if `files` is empty.
    pub fn paired(files: Vec<String>) -> Result<Self, ReadSetError> {
        Self::new(ReadMode::Paired, files)
    }

    fn new(mode: ReadMode, files: Vec<String>) -> Result<Self, ReadSetError> {
        if files.is_empty() {
            return Err(ReadSetError::NoInput);
        }
        Ok(Self { mode, files })
    }

    /// Picks the input mode from optional single-end and paired-end lists.
    ///
    /// Empty lists count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ReadSetError::ConflictingMode`] if both lists hold files and
    /// [`ReadSetError::NoInput`] if neither does.
    ///
    /// # Example
    ///
    /// ```rust
    /// use readsets::resolve::{ReadInput, ReadMode};
    ///
    /// let input = ReadInput::from_options(None, Some(vec!["a_1.fq".into(), "a_2.fq".into()]))?;
    /// assert_eq!(input.mode(), ReadMode::Paired);
    ///
    /// assert!(ReadInput::from_options(Some(vec!["a.fq".into()]), Some(vec!["b_1.fq".into()])).is_err());
    /// # Ok::<(), readsets::error::ReadSetError>(())
    /// ```
    pub fn from_options(
        single: Option<Vec<String>>,
        paired: Option<Vec<String>>,
    ) -> Result<Self, ReadSetError> {
        let single = single.filter(|files| !files.is_empty());
        let paired = paired.filter(|files| !files.is_empty());

        match (single, paired) {
            (Some(single), Some(paired)) => Err(ReadSetError::ConflictingMode {
                single: single.len(),
                paired: paired.len(),
            }),
            (Some(single), None) => Self::single(single),
            (None, Some(paired)) => Self::paired(paired),
            (None, None) => Err(ReadSetError::NoInput),
        }
    }

    /// The file paths, in the order given.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    #[must_use]
    pub const fn mode(&self) -> ReadMode {
        self.mode
    }

    /// Returns `true` for paired-end input.
    #[must_use]
    pub const fn is_paired(&self) -> bool {
        matches!(self.mode, ReadMode::Paired)
    }
}

/// Resolves `input` into read sets.
///
/// Dispatches to [`resolve_single`] or [`resolve_paired`].
#[must_use]
pub fn resolve(input: &ReadInput, designators: &Designators, fallback_key: FallbackKey) -> Resolution {
    let resolution = match input.mode {
        ReadMode::Single => resolve_single(&input.files),
        ReadMode::Paired => resolve_paired(&input.files, designators, fallback_key),
    };

    #[cfg(feature = "tracing")]
    {
        for warning in resolution.warnings() {
            warn!("{warning}");
        }
        info!(
            paired = resolution.paired_count(),
            single = resolution.single_count(),
            warnings = resolution.warnings().len(),
            "Read set resolution complete"
        );
    }

    resolution
}

/// Resolves single-end read files.
///
/// Each file becomes a [`ReadSet::Single`], keyed by its Illumina sample name
/// when the stem follows that convention (whatever its read marker) and by
/// the whole stem otherwise.
///
/// # Example
///
/// ```rust
/// use readsets::resolve::resolve_single;
///
/// let resolution = resolve_single(&["run/strainA.fastq.gz", "strainB_S3_L001_R1_001.fq"]);
/// assert!(resolution.get("strainA").is_some());
/// assert!(resolution.get("strainB").is_some());
/// assert_eq!(resolution.single_count(), 2);
/// ```
#[must_use]
pub fn resolve_single<S: AsRef<str>>(files: &[S]) -> Resolution {
    #[cfg(feature = "tracing")]
    let _span = info_span!("resolve_single", files = files.len()).entered();

    let mut resolution = Resolution::default();

    for path in files {
        let file = match FileSpec::parse(path.as_ref()) {
            Ok(file) => file,
            Err(err) => {
                resolution.warn(err.into());
                continue;
            }
        };

        let key = IlluminaName::parse(file.stem()).map_or(file.stem(), |name| name.sample);
        let key = SampleKey::new(key);

        #[cfg(feature = "tracing")]
        debug!(sample = %key, path = file.path(), "Single-end read");

        resolution.insert(key, ReadSet::Single { file });
    }

    resolution
}

/// Resolves paired-end read files into forward/reverse pairs.
///
/// Each file is classified by name (see [`crate::naming`]). Samples with both
/// mates become [`ReadSet::Paired`]; samples with only one become
/// [`ReadSet::Unpaired`] with a [`Warning::MissingMate`]. Files whose
/// direction cannot be determined are left out with a
/// [`Warning::AmbiguousDirection`], except Illumina-shaped names with an
/// unexpected read marker, which become a [`ReadSet::Single`] keyed according
/// to `fallback_key`.
///
/// # Example
///
/// ```rust
/// use readsets::config::{Designators, FallbackKey};
/// use readsets::readset::ReadSet;
/// use readsets::resolve::resolve_paired;
///
/// let files = ["reads/sampleA_1.fastq.gz", "reads/sampleA_2.fastq.gz"];
/// let resolution = resolve_paired(&files, &Designators::default(), FallbackKey::Stem);
///
/// assert!(matches!(resolution.get("sampleA"), Some(ReadSet::Paired { .. })));
/// assert_eq!(resolution.paired_count(), 1);
/// assert!(resolution.warnings().is_empty());
/// ```
#[must_use]
pub fn resolve_paired<S: AsRef<str>>(
    files: &[S],
    designators: &Designators,
    fallback_key: FallbackKey,
) -> Resolution {
    #[cfg(feature = "tracing")]
    let _span = info_span!("resolve_paired", files = files.len()).entered();

    let mut resolution = Resolution::default();
    let mut forward: BTreeMap<SampleKey, FileSpec> = BTreeMap::new();
    let mut reverse: BTreeMap<SampleKey, FileSpec> = BTreeMap::new();

    for path in files {
        let file = match FileSpec::parse(path.as_ref()) {
            Ok(file) => file,
            Err(err) => {
                resolution.warn(err.into());
                continue;
            }
        };

        match classify(file.stem(), designators) {
            Classification::Mate { sample, direction } => {
                let key = SampleKey::new(sample);

                #[cfg(feature = "tracing")]
                debug!(sample = %key, %direction, path = file.path(), "Classified mate");

                let mates = match direction {
                    Direction::Forward => &mut forward,
                    Direction::Reverse => &mut reverse,
                };
                if mates.contains_key(&key) {
                    resolution.warn(Warning::DuplicateSample {
                        path: file.path().to_string(),
                        sample: key,
                    });
                } else {
                    mates.insert(key, file);
                }
            }
            Classification::UnknownReadMarker(name) => {
                let key = match fallback_key {
                    FallbackKey::Stem => SampleKey::new(file.stem()),
                    FallbackKey::Sample => SampleKey::new(name.sample),
                };
                resolution.warn(Warning::AmbiguousDirection {
                    path: file.path().to_string(),
                    cause: AmbiguityCause::IlluminaReadMarker {
                        marker: name.read.to_string(),
                    },
                });
                resolution.insert(key, ReadSet::Single { file });
            }
            Classification::Undetermined => {
                resolution.warn(Warning::AmbiguousDirection {
                    path: file.path().to_string(),
                    cause: AmbiguityCause::NoDesignator,
                });
            }
        }
    }

    for (key, file) in forward {
        match reverse.remove(&key) {
            Some(mate) => resolution.insert(
                key,
                ReadSet::Paired {
                    forward: file,
                    reverse: mate,
                },
            ),
            None => insert_unpaired(&mut resolution, key, file, Direction::Forward),
        }
    }
    for (key, file) in reverse {
        insert_unpaired(&mut resolution, key, file, Direction::Reverse);
    }

    resolution
}

fn insert_unpaired(resolution: &mut Resolution, key: SampleKey, file: FileSpec, direction: Direction) {
    resolution.warn(Warning::MissingMate {
        path: file.path().to_string(),
        direction,
    });
    resolution.insert(key, ReadSet::Unpaired { file, direction });
}
