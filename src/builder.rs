//! Builder pattern API for read set resolution.
//!
//! # Example
//!
//! ```rust
//! use readsets::builder::Resolver;
//!
//! let resolution = Resolver::new()
//!     .forward("_R1")?
//!     .reverse("_R2")?
//!     .resolve_paired(&["sample_R1.fq.gz", "sample_R2.fq.gz"]);
//!
//! assert_eq!(resolution.paired_count(), 1);
//! # Ok::<(), readsets::error::DesignatorError>(())
//! ```

use crate::{
    config::{Designators, FallbackKey},
    error::DesignatorError,
    readset::Resolution,
    resolve::{resolve, resolve_paired, resolve_single, ReadInput},
};

/// A builder for configuring read set resolution.
///
/// A `Resolver` holds only configuration; every call to a `resolve*` method
/// is independent.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    designators: Designators,
    fallback_key: FallbackKey,
}

impl Resolver {
    /// Creates a resolver with the default `_1`/`_2` designators and
    /// [`FallbackKey::Stem`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the forward read designator.
    ///
    /// The new value is checked against the current reverse designator, so
    /// swapping the two needs [`designator_pair`](Self::designator_pair).
    ///
    /// # Errors
    ///
    /// Returns [`DesignatorError`] if `forward` is empty or equals the
    /// current reverse designator.
    pub fn forward(mut self, forward: &str) -> Result<Self, DesignatorError> {
        self.designators = Designators::new(forward, self.designators.reverse())?;
        Ok(self)
    }

    /// Sets the reverse read designator.
    ///
    /// # Errors
    ///
    /// Returns [`DesignatorError`] if `reverse` is empty or equals the
    /// current forward designator.
    pub fn reverse(mut self, reverse: &str) -> Result<Self, DesignatorError> {
        self.designators = Designators::new(self.designators.forward(), reverse)?;
        Ok(self)
    }

    /// Sets both designators at once, checking only the final pair.
    ///
    /// # Errors
    ///
    /// Returns [`DesignatorError`] if either is empty or they are equal.
    pub fn designator_pair(mut self, forward: &str, reverse: &str) -> Result<Self, DesignatorError> {
        self.designators = Designators::new(forward, reverse)?;
        Ok(self)
    }

    /// Sets both designators from a pre-validated pair.
    #[must_use]
    pub fn designators(mut self, designators: Designators) -> Self {
        self.designators = designators;
        self
    }

    /// Sets the key used for Illumina-shaped files with an unknown read marker.
    #[must_use]
    pub fn fallback_key(mut self, fallback_key: FallbackKey) -> Self {
        self.fallback_key = fallback_key;
        self
    }

    /// Resolves single-end or paired-end input.
    #[must_use]
    pub fn resolve(&self, input: &ReadInput) -> Resolution {
        resolve(input, &self.designators, self.fallback_key)
    }

    /// Resolves paired-end read files.
    #[must_use]
    pub fn resolve_paired<S: AsRef<str>>(&self, files: &[S]) -> Resolution {
        resolve_paired(files, &self.designators, self.fallback_key)
    }

    /// Resolves single-end read files. Designators play no part here.
    #[must_use]
    pub fn resolve_single<S: AsRef<str>>(&self, files: &[S]) -> Resolution {
        resolve_single(files)
    }

    #[must_use]
    pub const fn get_designators(&self) -> &Designators {
        &self.designators
    }

    #[must_use]
    pub const fn get_fallback_key(&self) -> FallbackKey {
        self.fallback_key
    }
}
