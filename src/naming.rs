//! Read file naming conventions.
//!
//! A stem is classified by trying each [`Scheme`] in order:
//!
//! 1. [`Scheme::Illumina`]: `<sample>_S<..>_L<..>_R<..>_<..>`, the default
//!    output naming of Illumina sequencers such as the MiSeq.
//! 2. [`Scheme::Designator`]: `<sample><designator>`, where the designator is
//!    a configured literal suffix such as `_1` or `_2`.
//!
//! The first scheme that recognises the stem decides its classification.

use serde::Serialize;

use crate::config::Designators;

/// Which mate of a pair a read file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Reverse,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Reverse => write!(f, "reverse"),
        }
    }
}

/// A naming convention that may recognise a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Illumina,
    Designator,
}

impl Scheme {
    /// Schemes in the order they are tried.
    pub const ORDER: [Self; 2] = [Self::Illumina, Self::Designator];

    /// Returns the classification this scheme gives `stem`, or `None` if the
    /// stem does not follow the scheme.
    #[must_use]
    pub fn classify<'a>(self, stem: &'a str, designators: &Designators) -> Option<Classification<'a>> {
        match self {
            Self::Illumina => IlluminaName::parse(stem).map(|name| match name.direction() {
                Some(direction) => Classification::Mate {
                    sample: name.sample,
                    direction,
                },
                None => Classification::UnknownReadMarker(name),
            }),
            Self::Designator => {
                if let Some(sample) = stem.strip_suffix(designators.forward()) {
                    Some(Classification::Mate {
                        sample,
                        direction: Direction::Forward,
                    })
                } else {
                    stem.strip_suffix(designators.reverse())
                        .map(|sample| Classification::Mate {
                            sample,
                            direction: Direction::Reverse,
                        })
                }
            }
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Illumina => write!(f, "illumina"),
            Self::Designator => write!(f, "designator"),
        }
    }
}

/// Outcome of classifying a paired-end stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<'a> {
    /// One mate of the named sample.
    Mate { sample: &'a str, direction: Direction },
    /// Illumina-shaped, but the read marker is neither `_R1` nor `_R2`.
    UnknownReadMarker(IlluminaName<'a>),
    /// No scheme recognised the stem.
    Undetermined,
}

/// Classifies a paired-end stem by trying each scheme in [`Scheme::ORDER`].
///
/// # Example
///
/// ```
/// use readsets::config::Designators;
/// use readsets::naming::{classify, Classification, Direction};
///
/// let designators = Designators::default();
/// assert_eq!(
///     classify("sample_S1_L001_R2_001", &designators),
///     Classification::Mate { sample: "sample", direction: Direction::Reverse }
/// );
/// assert_eq!(
///     classify("sampleA_1", &designators),
///     Classification::Mate { sample: "sampleA", direction: Direction::Forward }
/// );
/// assert_eq!(classify("sampleA", &designators), Classification::Undetermined);
/// ```
#[must_use]
pub fn classify<'a>(stem: &'a str, designators: &Designators) -> Classification<'a> {
    Scheme::ORDER
        .iter()
        .find_map(|scheme| scheme.classify(stem, designators))
        .unwrap_or(Classification::Undetermined)
}

/// The segments of an Illumina-style stem.
///
/// Every segment after `sample` keeps its leading marker, so for
/// `sample_S1_L001_R1_001` the read segment is `_R1` and the tail is `_001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IlluminaName<'a> {
    pub sample: &'a str,
    pub sample_number: &'a str,
    pub lane: &'a str,
    pub read: &'a str,
    pub tail: &'a str,
}

const ILLUMINA_MARKERS: [&str; 4] = ["_S", "_L", "_R", "_"];

impl<'a> IlluminaName<'a> {
    /// Splits `stem` at the markers `_S`, `_L`, `_R` and `_`, in that order.
    ///
    /// When a marker occurs more than once, the split is made at the
    /// right-most occurrence that still leaves room for the remaining
    /// markers, so earlier segments are as long as possible:
    /// `my_Sample_S1_L001_R1_001` yields the sample `my_Sample`.
    #[must_use]
    pub fn parse(stem: &'a str) -> Option<Self> {
        let mut cuts = [0usize; 4];
        if !split_greedy(stem, 0, &ILLUMINA_MARKERS, &mut cuts) {
            return None;
        }
        let [s, l, r, t] = cuts;

        Some(Self {
            sample: &stem[..s],
            sample_number: &stem[s..l],
            lane: &stem[l..r],
            read: &stem[r..t],
            tail: &stem[t..],
        })
    }

    /// `Forward` for an `_R1` segment, `Reverse` for `_R2`, else `None`.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self.read {
            "_R1" => Some(Direction::Forward),
            "_R2" => Some(Direction::Reverse),
            _ => None,
        }
    }
}

/// Records in `cuts` the positions of `markers` in `s`, each found at or
/// after the end of the previous one, preferring right-most positions.
fn split_greedy(s: &str, from: usize, markers: &[&str], cuts: &mut [usize]) -> bool {
    let Some((marker, rest)) = markers.split_first() else {
        return true;
    };

    for (pos, _) in s.rmatch_indices(marker) {
        if pos < from {
            break;
        }
        if split_greedy(s, pos + marker.len(), rest, &mut cuts[1..]) {
            cuts[0] = pos;
            return true;
        }
    }
    false
}
