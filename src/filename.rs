//! Read file name decomposition.
//!
//! Splits a read file path into its directory, stem and full extension,
//! treating a trailing `.gz` as part of the extension. This is a pure string
//! operation: the file is never touched.
//!
//! # Example
//!
//! ```
//! use readsets::filename::FileSpec;
//!
//! let spec = FileSpec::parse("runs/2024/sample_1.fastq.gz")?;
//! assert_eq!(spec.directory(), "runs/2024");
//! assert_eq!(spec.stem(), "sample_1");
//! assert_eq!(spec.extension(), ".fastq.gz");
//! # Ok::<(), readsets::error::InvalidPathError>(())
//! ```

use serde::Serialize;

use crate::error::InvalidPathError;

const GZIP_SUFFIX: &str = ".gz";

/// A read file path and the parts derived from it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FileSpec {
    path: String,
    directory: String,
    stem: String,
    extension: String,
}

impl FileSpec {
    /// Decomposes `path` into directory, stem and extension.
    ///
    /// - The directory is everything before the last `/` (`""` when there is
    ///   none, `"/"` for files at the root).
    /// - A trailing `.gz` is removed first and appended to the extension.
    /// - The remaining name is split at its last `.`; leading dots never start
    ///   an extension, so `.hidden` has no extension.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPathError`] if `path` is empty or ends in `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use readsets::filename::FileSpec;
    ///
    /// let spec = FileSpec::parse("sample_S1_L001_R1_001.fastq.gz")?;
    /// assert_eq!(spec.stem(), "sample_S1_L001_R1_001");
    /// assert_eq!(spec.extension(), ".fastq.gz");
    ///
    /// let spec = FileSpec::parse("/data/reads.fq")?;
    /// assert_eq!(spec.directory(), "/data");
    /// assert_eq!(spec.extension(), ".fq");
    /// # Ok::<(), readsets::error::InvalidPathError>(())
    /// ```
    pub fn parse(path: &str) -> Result<Self, InvalidPathError> {
        if path.is_empty() {
            return Err(InvalidPathError {
                path: path.to_string(),
                reason: "path is empty",
            });
        }

        let (directory, file_name) = match path.rfind('/') {
            Some(0) => ("/", &path[1..]),
            Some(i) => (&path[..i], &path[i + 1..]),
            None => ("", path),
        };

        if file_name.is_empty() {
            return Err(InvalidPathError {
                path: path.to_string(),
                reason: "path has no file name",
            });
        }

        let (name, gzip) = match file_name.strip_suffix(GZIP_SUFFIX) {
            Some(name) => (name, GZIP_SUFFIX),
            None => (file_name, ""),
        };
        let (stem, ext) = split_extension(name);

        Ok(Self {
            path: path.to_string(),
            directory: directory.to_string(),
            stem: stem.to_string(),
            extension: format!("{ext}{gzip}"),
        })
    }

    /// The path exactly as it was given.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// File name without compression suffix and primary extension.
    #[must_use]
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Primary extension plus `.gz` when compressed, e.g. `.fastq.gz`.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Returns `true` if the file name ends in `.gz`.
    #[must_use]
    pub fn is_gzipped(&self) -> bool {
        self.extension.ends_with(GZIP_SUFFIX)
    }

    /// The final path component, reassembled from stem and extension.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}{}", self.stem, self.extension)
    }
}

impl std::fmt::Display for FileSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// Splits at the last `.` that is not part of a leading run of dots.
fn split_extension(name: &str) -> (&str, &str) {
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(i) => name.split_at(leading + i),
        None => (name, ""),
    }
}
