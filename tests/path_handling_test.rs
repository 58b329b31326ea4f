//! Tests for path handling: non-ASCII names, special characters and directory splitting.

use seiri::path_utils::*;
use std::path::{Path, PathBuf};

#[test]
fn test_get_file_name_lossy() {
    let path = Path::new("folder/Yoko Tsuno - 05 - La Frontiere de la vie.cbz");
    let result = get_file_name_lossy(path);
    assert_eq!(result, "Yoko Tsuno - 05 - La Frontiere de la vie.cbz");

    // Test with empty path
    let empty_path = Path::new("");
    assert_eq!(get_file_name_lossy(empty_path), "");
}

#[test]
fn test_path_to_string_lossy() {
    let path = Path::new("Bandes Dessinées/Astérix/file.cbr");
    let result = path_to_string_lossy(path);
    assert!(result.contains("Bandes Dessinées"));
    assert!(result.contains("Astérix"));
    assert!(result.contains("file.cbr"));
}

#[test]
fn test_split_file_name_nested() {
    let (directory, name) = split_file_name(Path::new("comics/XIII/XIII 01.cbr"));
    assert_eq!(Path::new(&directory), Path::new("comics/XIII"));
    assert_eq!(name, "XIII 01.cbr");
}

#[test]
fn test_validate_path_with_invalid_characters() {
    // Test paths with problematic characters
    let invalid_chars = ["<", ">", "\"", "|", "?", "*"];

    for invalid_char in &invalid_chars {
        let invalid_path = PathBuf::from(format!("comics{}dir", invalid_char));
        assert!(
            validate_path(&invalid_path).is_err(),
            "Path with '{}' should be invalid",
            invalid_char
        );
    }
}

#[test]
fn test_validate_path_with_valid_characters() {
    let valid_paths = [
        "Les Bidochon",
        "Tif et Tondu - 026#045",
        "Terres Lointaines (of 5)",
        "[BD-FR] Sang des Porphyre",
        "Yoko.Tsuno",
        "Valérian",
        "ファイル",
        "file~tilde",
    ];

    for valid_path in &valid_paths {
        assert!(
            validate_path(&PathBuf::from(valid_path)).is_ok(),
            "Path '{}' should be valid",
            valid_path
        );
    }
}

#[test]
fn test_is_hidden_file() {
    // Test hidden files (starting with dot)
    assert!(is_hidden_file(Path::new(".hidden")));
    assert!(is_hidden_file(Path::new("folder/.DS_Store")));

    // Test non-hidden files
    assert!(!is_hidden_file(Path::new("Yoko.Tsuno_05.cbz")));
    assert!(!is_hidden_file(Path::new("folder/file.with.dots.cbr"))); // Only starting dot counts
}

#[test]
fn test_non_ascii_names_are_folded() {
    let fields = seiri::decompose_path("Assassin Royal/Assassin Royal - 01 - Le Bâtard.cbr");
    assert_eq!(fields.directory, "Assassin Royal");
    assert_eq!(fields.series, "Assassin.Royal");
    assert_eq!(fields.title, "Le.Batard");
}

#[cfg(windows)]
#[test]
fn test_windows_long_path_is_rejected() {
    let mut long_path = PathBuf::from("C:");
    for i in 0..20 {
        long_path.push(format!("very_long_directory_name_that_exceeds_limits_{}", i));
    }
    long_path.push("XIII 01.cbr");

    assert!(validate_path(&long_path).is_err());
}
