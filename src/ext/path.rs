use std::path::Path;

use crate::error::{Error, Result};

/// Extension trait for Path to provide checked string conversions
pub trait PathExt {
    /// Returns the final path segment as UTF-8.
    ///
    /// Fails for paths without a final segment (`/`, `..`) and for non-Unicode names.
    ///
    /// # Examples
    /// ```
    /// use pj_init::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("/work/my-app");
    /// assert_eq!(path.file_name_checked().unwrap(), "my-app");
    /// ```
    fn file_name_checked(&self) -> Result<&str>;
}

impl PathExt for Path {
    fn file_name_checked(&self) -> Result<&str> {
        let name = self.file_name().ok_or_else(|| Error::InvalidPath {
            path: self.display().to_string(),
            reason: "has no final path segment".to_string(),
        })?;
        name.to_str().ok_or_else(|| Error::InvalidPath {
            path: self.display().to_string(),
            reason: "file name contains invalid Unicode characters".to_string(),
        })
    }
}
