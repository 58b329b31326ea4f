//! Rendering of decomposed fields into the canonical `Series/Series_01_Title.ext` name.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

use crate::types::ParsedFields;

lazy_static! {
    static ref DECIMAL_DIGIT_REGEX: Regex = Regex::new(r"^\d$").unwrap();
}

fn is_decimal_digit(c: char) -> bool {
    let mut buffer = [0; 4];
    DECIMAL_DIGIT_REGEX.is_match(c.encode_utf8(&mut buffer))
}

/// Value of a decimal digit from any script (`'7'`, `'٣'`, `'７'`).
///
/// Unicode encodes every decimal digit set as a contiguous `0..=9` run, so the
/// value is the distance to the start of the run, modulo ten for adjacent sets.
fn digit_value(c: char) -> Option<u64> {
    if let Some(value) = c.to_digit(10) {
        return Some(u64::from(value));
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut zero = c as u32;
    while let Some(previous) = zero
        .checked_sub(1)
        .and_then(char::from_u32)
        .filter(|p| is_decimal_digit(*p))
    {
        zero = previous as u32;
    }
    Some(u64::from((c as u32 - zero) % 10))
}

/// Parses a run of decimal digits, whatever their script.
fn parse_decimal(number: &str) -> Option<u64> {
    if number.is_empty() {
        return None;
    }
    number.chars().try_fold(0u64, |total, c| {
        total.checked_mul(10)?.checked_add(digit_value(c)?)
    })
}

/// Renders the number part, underscore included.
///
/// `HS` markers keep their sub-number (`HS1` -> `_HS1`); plain numbers are
/// zero-padded to two digits and never truncated (`7` -> `_07`, `123` -> `_123`).
pub fn format_number(number: &str) -> String {
    match number.get(..2) {
        Some(marker) if marker.eq_ignore_ascii_case("hs") => format!("_HS{}", &number[2..]),
        _ => match parse_decimal(number) {
            Some(value) => format!("_{:02}", value),
            None => format!("_{}", number),
        },
    }
}

/// Last component of a directory path, used as a series when none was parsed.
fn directory_base(directory: &str) -> String {
    Path::new(directory)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| directory.to_string())
}

/// Builds the canonical file name, without its directory.
///
/// Returns `None` when no number was found.
pub fn format_file_name(fields: &ParsedFields) -> Option<String> {
    if !fields.has_number() {
        return None;
    }

    let mut name = if fields.series.is_empty() {
        directory_base(&fields.directory)
    } else {
        fields.series.clone()
    };

    name.push_str(&format_number(&fields.number));

    if !fields.title.is_empty() {
        name.push('_');
        name.push_str(&fields.title);
    }

    name.push('.');
    name.push_str(&fields.suffix);
    Some(name)
}

/// Builds the canonical name, or `None` when no number was found.
///
/// With an empty `directory` only the file name is returned.
pub fn format_name(fields: &ParsedFields) -> Option<String> {
    let name = format_file_name(fields)?;
    if fields.directory.is_empty() {
        Some(name)
    } else {
        Some(format!("{}/{}", fields.directory, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(directory: &str, series: &str, number: &str, title: &str) -> ParsedFields {
        ParsedFields {
            directory: directory.to_string(),
            series: series.to_string(),
            number: number.to_string(),
            title: title.to_string(),
            suffix: "pdf".to_string(),
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number("7"), "_07");
        assert_eq!(format_number("01"), "_01");
        assert_eq!(format_number("026"), "_26");
        assert_eq!(format_number("123"), "_123");
        assert_eq!(format_number("HS"), "_HS");
        assert_eq!(format_number("HS1"), "_HS1");
        assert_eq!(format_number("hs01"), "_HS01");
    }

    #[test]
    fn test_format_number_other_scripts() {
        assert_eq!(format_number("٣"), "_03");
        assert_eq!(format_number("۱۲"), "_12");
        assert_eq!(format_number("０７"), "_07");
    }

    #[test]
    fn test_format_number_keeps_unparsable() {
        assert_eq!(format_number("99999999999999999999999"), "_99999999999999999999999");
        assert_eq!(format_number("x1"), "_x1");
    }

    #[test]
    fn test_format_file_name_leaves_directory_out() {
        assert_eq!(
            format_file_name(&fields("comics/Series", "Series", "1", "Title")),
            Some("Series_01_Title.pdf".to_string())
        );
        assert_eq!(
            format_file_name(&fields("comics/Serenity", "", "1", "")),
            Some("Serenity_01.pdf".to_string())
        );
    }

    #[test]
    fn test_format_name() {
        assert_eq!(
            format_name(&fields("Series", "Series", "1", "Title")),
            Some("Series/Series_01_Title.pdf".to_string())
        );
        assert_eq!(
            format_name(&fields("", "Les.Bidochon", "19", "")),
            Some("Les.Bidochon_19.pdf".to_string())
        );
    }

    #[test]
    fn test_directory_replaces_missing_series() {
        assert_eq!(
            format_name(&fields("comics/Serenity", "", "1", "Title")),
            Some("comics/Serenity/Serenity_01_Title.pdf".to_string())
        );
    }

    #[test]
    fn test_no_number_no_name() {
        assert_eq!(format_name(&fields("Series", "Series", "", "Title")), None);
    }
}
