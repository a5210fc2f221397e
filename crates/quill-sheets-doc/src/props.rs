//! Workbook file properties and protection settings

use chrono::Utc;
use quill_sheets_core::{Error, Result};
use serde::Serialize;

/// Timestamp format required for the Created/Modified properties
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Workbook file properties
///
/// The key set is fixed; [`FileProperties::set`] rejects anything else at
/// the call, never at serialize time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileProperties {
    pub category: String,
    pub content_status: String,
    pub created: String,
    pub creator: String,
    pub description: String,
    pub identifier: String,
    pub keywords: String,
    pub last_modified_by: String,
    pub modified: String,
    pub revision: String,
    pub subject: String,
    pub title: String,
    pub language: String,
    pub version: String,
}

impl Default for FileProperties {
    fn default() -> Self {
        let now = Utc::now().format(TIMESTAMP_FORMAT).to_string();
        Self {
            category: String::new(),
            content_status: String::new(),
            created: now.clone(),
            creator: "quill-sheets".into(),
            description: String::new(),
            identifier: "xlsx".into(),
            keywords: "spreadsheet".into(),
            last_modified_by: "quill-sheets".into(),
            modified: now,
            revision: "0".into(),
            subject: String::new(),
            title: String::new(),
            language: "en-US".into(),
            version: String::new(),
        }
    }
}

impl FileProperties {
    /// Set a property by its wire key
    ///
    /// Recognized keys: Category, ContentStatus, Created, Creator,
    /// Description, Identifier, Keywords, LastModifiedBy, Modified,
    /// Revision, Subject, Title, Language, Version. Any other key fails
    /// [`Error::PropertyKey`].
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let slot = match key {
            "Category" => &mut self.category,
            "ContentStatus" => &mut self.content_status,
            "Created" => &mut self.created,
            "Creator" => &mut self.creator,
            "Description" => &mut self.description,
            "Identifier" => &mut self.identifier,
            "Keywords" => &mut self.keywords,
            "LastModifiedBy" => &mut self.last_modified_by,
            "Modified" => &mut self.modified,
            "Revision" => &mut self.revision,
            "Subject" => &mut self.subject,
            "Title" => &mut self.title,
            "Language" => &mut self.language,
            "Version" => &mut self.version,
            _ => return Err(Error::PropertyKey(key.to_string())),
        };
        *slot = value.to_string();
        Ok(())
    }

    /// Read a property by its wire key
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "Category" => &self.category,
            "ContentStatus" => &self.content_status,
            "Created" => &self.created,
            "Creator" => &self.creator,
            "Description" => &self.description,
            "Identifier" => &self.identifier,
            "Keywords" => &self.keywords,
            "LastModifiedBy" => &self.last_modified_by,
            "Modified" => &self.modified,
            "Revision" => &self.revision,
            "Subject" => &self.subject,
            "Title" => &self.title,
            "Language" => &self.language,
            "Version" => &self.version,
            _ => return None,
        };
        Some(value)
    }
}

/// Algorithms accepted for workbook protection
pub const PROTECTION_ALGORITHMS: &[&str] = &[
    "XOR", "MD4", "MD5", "SHA-1", "SHA-256", "SHA-384", "SHA-512",
];

/// Workbook protection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorkbookProtection {
    pub algorithm: String,
    pub password: String,
    pub lock_structure: bool,
    pub lock_windows: bool,
}

impl WorkbookProtection {
    /// Create protection settings, validating the algorithm
    pub fn new(
        algorithm: &str,
        password: &str,
        lock_structure: bool,
        lock_windows: bool,
    ) -> Result<Self> {
        if !PROTECTION_ALGORITHMS.contains(&algorithm) {
            return Err(Error::InvalidProtection(algorithm.to_string()));
        }
        Ok(Self {
            algorithm: algorithm.to_string(),
            password: password.to_string(),
            lock_structure,
            lock_windows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_have_utc_timestamps() {
        let props = FileProperties::default();
        // 2024-05-01T12:30:00Z
        assert_eq!(props.created.len(), 20);
        assert!(props.created.ends_with('Z'));
        assert_eq!(props.created, props.modified);
        assert_eq!(props.creator, "quill-sheets");
    }

    #[test]
    fn test_set_known_keys() {
        let mut props = FileProperties::default();
        props.set("Creator", "Hello").unwrap();
        props.set("Title", "Report").unwrap();
        assert_eq!(props.get("Creator"), Some("Hello"));
        assert_eq!(props.get("Title"), Some("Report"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut props = FileProperties::default();
        assert!(matches!(
            props.set("Test", "Test"),
            Err(Error::PropertyKey(_))
        ));
        // Keys are exact; no case folding
        assert!(props.set("creator", "x").is_err());
    }

    #[test]
    fn test_protection_algorithm_allow_list() {
        assert!(WorkbookProtection::new("SHA-512", "pw", true, false).is_ok());
        assert!(matches!(
            WorkbookProtection::new("ROT13", "pw", true, false),
            Err(Error::InvalidProtection(_))
        ));
    }
}
