//! Last-Modified Resolvers
//!
//! The application tells the validation stage when its content last changed
//! through a [`LastModifiedResolver`]. It is called synchronously on every
//! request, so slow lookups add to request latency.

use std::path::{Path, PathBuf};

use crate::error::ResolverError;
use crate::validators::{LastModifiedValue, Timestamp};

/// Source of the last-modification time for the served content.
pub trait LastModifiedResolver: Send + Sync {
    /// Returns the current last-modification time.
    fn last_modified(&self) -> Result<LastModifiedValue, ResolverError>;
}

impl<F> LastModifiedResolver for F
where
    F: Fn() -> Result<LastModifiedValue, ResolverError> + Send + Sync,
{
    fn last_modified(&self) -> Result<LastModifiedValue, ResolverError> {
        self()
    }
}

// == Fixed Resolver ==
/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedResolver(pub LastModifiedValue);

impl FixedResolver {
    /// Creates a new FixedResolver reporting `value`.
    pub fn new(value: impl Into<LastModifiedValue>) -> Self {
        Self(value.into())
    }

    /// Creates a new FixedResolver from a Unix timestamp.
    pub fn from_timestamp(secs: Timestamp) -> Self {
        Self(LastModifiedValue::Timestamp(secs))
    }
}

impl LastModifiedResolver for FixedResolver {
    fn last_modified(&self) -> Result<LastModifiedValue, ResolverError> {
        Ok(self.0)
    }
}

// == File Mtime Resolver ==
/// Reports the modification time of a file on disk.
///
/// The file is stat'ed on every call. A missing file is a resolver error.
#[derive(Debug, Clone)]
pub struct FileMtimeResolver {
    path: PathBuf,
}

impl FileMtimeResolver {
    /// Creates a new FileMtimeResolver watching `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the watched file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LastModifiedResolver for FileMtimeResolver {
    fn last_modified(&self) -> Result<LastModifiedValue, ResolverError> {
        let modified = std::fs::metadata(&self.path)
            .and_then(|meta| meta.modified())
            .map_err(|e| ResolverError::new(format!("{}: {}", self.path.display(), e)))?;

        Ok(modified.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_fixed_resolver() {
        let resolver = FixedResolver::from_timestamp(603559834);
        assert_eq!(
            resolver.last_modified().unwrap(),
            LastModifiedValue::Timestamp(603559834)
        );
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = || -> Result<LastModifiedValue, ResolverError> {
            Ok(LastModifiedValue::Timestamp(42))
        };
        assert_eq!(
            resolver.last_modified().unwrap(),
            LastModifiedValue::Timestamp(42)
        );

        let failing = || -> Result<LastModifiedValue, ResolverError> {
            Err(ResolverError::new("lookup failed"))
        };
        assert!(failing.last_modified().is_err());
    }

    #[test]
    fn test_file_mtime_resolver() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.txt");
        let file = File::create(&path).unwrap();
        file.set_modified(UNIX_EPOCH + Duration::from_secs(603559834))
            .unwrap();

        let resolver = FileMtimeResolver::new(&path);
        assert_eq!(resolver.path(), path.as_path());
        assert_eq!(
            resolver.last_modified().unwrap(),
            LastModifiedValue::Timestamp(603559834)
        );
    }

    #[test]
    fn test_file_mtime_resolver_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = FileMtimeResolver::new(dir.path().join("missing"));

        let err = resolver.last_modified().unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}
