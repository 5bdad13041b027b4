//! File utility functions.

use crate::error::{Result, TooltipError};
use crate::models::ParsedItem;
use crate::parsers::parse_item;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const UTF8_BOM: &str = "\u{FEFF}";

/// Recursively find files with given extension in a directory.
pub fn find_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(TooltipError::NotFound(format!(
            "Directory not found: {}",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            if let Some(ext) = entry.path().extension() {
                if ext == extension {
                    files.push(entry.path().to_path_buf());
                }
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Read a saved tooltip. UTF-8 is taken as-is; anything else is decoded
/// as Windows-1252.
pub fn read_tooltip_file(path: &Path) -> Result<String> {
    if path.is_dir() {
        return Err(TooltipError::InvalidInput(format!(
            "Expected a file, found directory: {}",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)?;
    Ok(decode_tooltip_bytes(&bytes))
}

/// Decode raw tooltip bytes, dropping a leading UTF-8 byte order mark.
/// Windows-1252 maps every byte, so decoding cannot fail.
pub fn decode_tooltip_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string(),
        Err(_) => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
    }
}

/// Read and parse a saved tooltip.
pub fn parse_item_file(path: &Path) -> Result<ParsedItem> {
    let text = read_tooltip_file(path)?;
    Ok(parse_item(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rarity;

    #[test]
    fn test_decode_utf8_with_bom() {
        let bytes = "\u{FEFF}Rarity: Rare\nName".as_bytes();
        assert_eq!(decode_tooltip_bytes(bytes), "Rarity: Rare\nName");
    }

    #[test]
    fn test_decode_windows_1252_fallback() {
        // 0x97 is an em dash in Windows-1252 and invalid as UTF-8
        let bytes = b"\x97 Izaro";
        assert_eq!(decode_tooltip_bytes(bytes), "\u{2014} Izaro");
    }

    #[test]
    fn test_find_files_with_extension() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(dir.path().join("a.txt"), "A").unwrap();
        std::fs::write(nested.join("b.txt"), "B").unwrap();
        std::fs::write(dir.path().join("c.json"), "{}").unwrap();

        let files = find_files_with_extension(dir.path(), "txt").unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "txt"));
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(matches!(
            find_files_with_extension(&missing, "txt"),
            Err(TooltipError::NotFound(_))
        ));
    }

    #[test]
    fn test_parse_item_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ring.txt");
        std::fs::write(&path, "Rarity: Rare\r\nDoom Loop\r\nRuby Ring\r\n--------\r\n+10 to Strength\r\n").unwrap();

        let item = parse_item_file(&path).unwrap();
        assert_eq!(item.rarity, Rarity::Rare);
        assert_eq!(item.mods, vec!["+10 to Strength"]);
        assert!(matches!(
            read_tooltip_file(dir.path()),
            Err(TooltipError::InvalidInput(_))
        ));
    }
}
