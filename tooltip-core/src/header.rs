//! Header block parsing: item class, rarity, name and base type.

use crate::models::Rarity;

const ITEM_CLASS_PREFIX: &str = "item class:";
const RARITY_PREFIX: &str = "rarity:";

/// Plural class names mapped to their singular form.
const CLASS_SINGULARS: [(&str, &str); 2] = [("Armours", "Armour"), ("Jewels", "Jewel")];

/// Fields recovered from the first block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub item_class: Option<String>,
    pub rarity: Rarity,
    pub name: Option<String>,
    pub base_type: Option<String>,
}

/// Case-insensitive ASCII prefix strip returning the remainder.
pub(crate) fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&line[prefix.len()..])
    } else {
        None
    }
}

fn normalize_item_class(value: &str) -> String {
    let value = value.trim();
    CLASS_SINGULARS
        .iter()
        .find(|(plural, _)| *plural == value)
        .map(|(_, singular)| singular.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Consume the header lines positionally.
///
/// `Item Class:` and `Rarity:` are each optional but must appear in that
/// order; the next line is the name and the one after it the base type.
pub fn parse_header(lines: &[String]) -> Header {
    let mut header = Header::default();
    let mut cursor = 0;

    if let Some(class) = lines
        .get(cursor)
        .and_then(|line| strip_prefix_ci(line, ITEM_CLASS_PREFIX))
    {
        header.item_class = Some(normalize_item_class(class));
        cursor += 1;
    }

    if let Some(rarity) = lines
        .get(cursor)
        .and_then(|line| strip_prefix_ci(line, RARITY_PREFIX))
    {
        header.rarity = Rarity::from_label(rarity.trim());
        cursor += 1;
    }

    header.name = lines.get(cursor).cloned();
    header.base_type = lines.get(cursor + 1).cloned();

    header
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_header() {
        let header = parse_header(&lines(&[
            "Item Class: Jewels",
            "Rarity: Rare",
            "Crimson Jewel",
            "Viridian Jewel",
        ]));
        assert_eq!(header.item_class.as_deref(), Some("Jewel"));
        assert_eq!(header.rarity, Rarity::Rare);
        assert_eq!(header.name.as_deref(), Some("Crimson Jewel"));
        assert_eq!(header.base_type.as_deref(), Some("Viridian Jewel"));
    }

    #[test]
    fn test_class_normalization() {
        let header = parse_header(&lines(&["item class: Armours"]));
        assert_eq!(header.item_class.as_deref(), Some("Armour"));

        let header = parse_header(&lines(&["Item Class: Body Armours"]));
        assert_eq!(header.item_class.as_deref(), Some("Body Armours"));
    }

    #[test]
    fn test_missing_class_line() {
        let header = parse_header(&lines(&["Rarity: Unique", "Headhunter", "Leather Belt"]));
        assert_eq!(header.item_class, None);
        assert_eq!(header.rarity, Rarity::Unique);
        assert_eq!(header.name.as_deref(), Some("Headhunter"));
        assert_eq!(header.base_type.as_deref(), Some("Leather Belt"));
    }

    #[test]
    fn test_name_without_base_type() {
        let header = parse_header(&lines(&["Rarity: Currency", "Chaos Orb"]));
        assert_eq!(header.rarity, Rarity::Currency);
        assert_eq!(header.name.as_deref(), Some("Chaos Orb"));
        assert_eq!(header.base_type, None);
    }

    #[test]
    fn test_unrecognised_rarity_and_no_prefixes() {
        let header = parse_header(&lines(&["Rarity: Relic", "Thing"]));
        assert_eq!(header.rarity, Rarity::Unknown);

        let header = parse_header(&lines(&["Just A Name"]));
        assert_eq!(header.rarity, Rarity::Unknown);
        assert_eq!(header.name.as_deref(), Some("Just A Name"));
        assert_eq!(header.base_type, None);
    }

    #[test]
    fn test_strip_prefix_ci_handles_multibyte() {
        assert_eq!(strip_prefix_ci("Ünïcode line", "rarity:"), None);
        assert_eq!(strip_prefix_ci("short", "rarity:"), None);
        assert_eq!(strip_prefix_ci("RARITY: Magic", "rarity:"), Some(" Magic"));
    }
}
