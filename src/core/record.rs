//! Config record types.
//!
//! A config record is a named snapshot of one file: the bytes it held, the
//! program it belongs to, and the base name it is restored under.

/// A stored configuration snapshot.
///
/// Records are created once by `add-config` and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use confstash::core::ConfigRecord;
///
/// let record = ConfigRecord::new("nvim", "neovim", "init.lua", b"set nu".to_vec());
/// assert_eq!(record.size(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRecord {
    /// User-chosen lookup key, unique within the store.
    pub name: String,

    /// Free-form tag naming the owning application.
    pub program: String,

    /// Base name of the original file.
    pub file_name: String,

    /// Original file bytes.
    pub content: Vec<u8>,
}

impl ConfigRecord {
    /// Creates a record from its parts.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        program: impl Into<String>,
        file_name: impl Into<String>,
        content: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            file_name: file_name.into(),
            content,
        }
    }

    /// Returns the content size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Returns the first missing required field, if any.
    ///
    /// Content may be empty; name, program and file name may not.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.is_empty() {
            Some("name")
        } else if self.program.is_empty() {
            Some("program")
        } else if self.file_name.is_empty() {
            Some("file_name")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = ConfigRecord::new("cfg1", "app1", "f.txt", b"hello".to_vec());
        assert_eq!(record.name, "cfg1");
        assert_eq!(record.program, "app1");
        assert_eq!(record.file_name, "f.txt");
        assert_eq!(record.size(), 5);
        assert!(record.missing_field().is_none());
    }

    #[test]
    fn test_empty_content_is_valid() {
        let record = ConfigRecord::new("cfg1", "app1", "empty", Vec::new());
        assert!(record.missing_field().is_none());
    }

    #[test]
    fn test_missing_fields() {
        let record = ConfigRecord::new("", "app1", "f.txt", Vec::new());
        assert_eq!(record.missing_field(), Some("name"));

        let record = ConfigRecord::new("cfg1", "", "f.txt", Vec::new());
        assert_eq!(record.missing_field(), Some("program"));

        let record = ConfigRecord::new("cfg1", "app1", "", Vec::new());
        assert_eq!(record.missing_field(), Some("file_name"));
    }
}
