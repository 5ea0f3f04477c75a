// src/fs/size.rs
//! Human readable byte sizes.

use crate::api::FileEntry;

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Format a byte count with 1024-based units.
///
/// Bytes are shown without decimals, KB/MB/GB with exactly one.
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else if bytes < GIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GIB as f64)
    }
}

/// Sum of `size` over every entry, directories included.
pub fn total_size(entries: &[FileEntry]) -> u64 {
    entries.iter().map(|e| e.size).fold(0, u64::saturating_add)
}

/// Aggregate size in GiB, unrounded.
pub fn total_size_gb(entries: &[FileEntry]) -> f64 {
    total_size(entries) as f64 / GIB as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(size: u64, is_dir: bool) -> FileEntry {
        FileEntry {
            name: "x".into(),
            size,
            is_dir,
            mod_time: String::new(),
            path: "x".into(),
        }
    }

    #[test]
    fn bytes_have_no_decimals() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn unit_thresholds() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(MIB - 1), "1024.0 KB");
        assert_eq!(format_size(MIB), "1.0 MB");
        assert_eq!(format_size(GIB - 1), "1024.0 MB");
        assert_eq!(format_size(GIB), "1.0 GB");
        assert_eq!(format_size(5 * 1024 * GIB), "5120.0 GB");
    }

    #[test]
    fn one_decimal_rounding() {
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1126), "1.1 KB");
        assert_eq!(format_size(3 * MIB + MIB / 3), "3.3 MB");
    }

    #[test]
    fn total_counts_directories_too() {
        let entries = [entry(GIB, true), entry(GIB / 2, false)];

        assert_eq!(total_size(&entries), GIB + GIB / 2);
        assert_eq!(total_size_gb(&entries), 1.5);
    }

    #[test]
    fn empty_listing_totals_zero() {
        assert_eq!(total_size_gb(&[]), 0.0);
    }
}
