// src/api/entry.rs
//! One record of a directory listing as sent by the backend.

use serde::{Deserialize, Serialize};

/// A single child of a listed directory.
///
/// Field names follow the backend's camelCase JSON (`isDir`, `modTime`).
/// Extra fields the backend may attach are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// Display label
    pub name: String,
    /// Byte count, only meaningful for files
    pub size: u64,
    /// Selects the folder rendering and whether Enter descends
    pub is_dir: bool,
    /// Opaque timestamp string, shown as-is
    pub mod_time: String,
    /// Location relative to the navigation root
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_field_names() {
        let json = r#"{"name":"docs","size":0,"isDir":true,"modTime":"2024-01-01","path":"docs"}"#;

        let entry: FileEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.name, "docs");
        assert!(entry.is_dir);
        assert_eq!(entry.mod_time, "2024-01-01");
        assert_eq!(entry.path, "docs");
    }

    #[test]
    fn ignores_extra_backend_fields() {
        let json = r#"[{"name":"a.txt","size":2048,"isDir":false,"modTime":"2024-01-02",
            "path":"docs/a.txt","formattedSize":"2.0 KB","fileType":"subtitles"}]"#;

        let entries: Vec<FileEntry> = serde_json::from_str(json).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].size, 2048);
    }

    #[test]
    fn rejects_negative_size() {
        let json = r#"{"name":"x","size":-1,"isDir":false,"modTime":"","path":"x"}"#;

        assert!(serde_json::from_str::<FileEntry>(json).is_err());
    }
}
