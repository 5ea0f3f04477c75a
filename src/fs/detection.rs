// src/fs/detection.rs
//! File category detection from the entry name.
//!
//! Only the name is available on the client, so detection is extension based:
//! a few well-known groups first, then the MIME top-level type.

use std::{fmt, path::Path};

use mime_guess::MimeGuess;

/// High-level file categories.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FileCategory {
    Audio,
    Video,
    Archive,
    Image,
    Subtitles,
    Document,
    Other,
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileCategory::Audio => "Audio",
            FileCategory::Video => "Video",
            FileCategory::Archive => "Archive",
            FileCategory::Image => "Image",
            FileCategory::Subtitles => "Subtitles",
            FileCategory::Document => "Document",
            FileCategory::Other => "Other",
        };
        write!(f, "{}", s)
    }
}

const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "rar", "7z", "tar", "gz"];
const SUBTITLE_EXTENSIONS: &[&str] = &["srt", "ass", "vtt", "sub", "ssa", "txt"];

/// Detect the category for a file name.
pub fn detect_category(name: &str) -> FileCategory {
    let ext = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if ARCHIVE_EXTENSIONS.contains(&ext.as_str()) {
        return FileCategory::Archive;
    }
    if SUBTITLE_EXTENSIONS.contains(&ext.as_str()) {
        return FileCategory::Subtitles;
    }

    let Some(mime) = MimeGuess::from_ext(&ext).first() else {
        return FileCategory::Other;
    };

    match mime.type_().as_str() {
        "audio" => FileCategory::Audio,
        "video" => FileCategory::Video,
        "image" => FileCategory::Image,
        "text" => FileCategory::Document,
        _ if mime.subtype().as_str() == "pdf" => FileCategory::Document,
        _ => FileCategory::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_by_mime_type() {
        assert_eq!(detect_category("song.MP3"), FileCategory::Audio);
        assert_eq!(detect_category("clip.mkv"), FileCategory::Video);
        assert_eq!(detect_category("photo.jpeg"), FileCategory::Image);
    }

    #[test]
    fn archives_and_subtitles_by_extension() {
        assert_eq!(detect_category("backup.tar"), FileCategory::Archive);
        assert_eq!(detect_category("backup.tar.gz"), FileCategory::Archive);
        assert_eq!(detect_category("movie.srt"), FileCategory::Subtitles);
        assert_eq!(detect_category("notes.txt"), FileCategory::Subtitles);
    }

    #[test]
    fn unknown_or_missing_extension_is_other() {
        assert_eq!(detect_category("Makefile"), FileCategory::Other);
        assert_eq!(detect_category("blob.nope"), FileCategory::Other);
    }
}
