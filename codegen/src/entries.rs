//! Bare enum entries, one per collision pair.

use pphy_model::CollisionPair;

use crate::emit::SourceFile;

/// Renders one entry: `{a}{b}Collision = 0x{code},` with uppercase,
/// unpadded hex.
#[must_use]
pub fn entry_line(pair: &CollisionPair) -> String {
    format!("{} = 0x{:X},", pair.identifier(), pair.code)
}

/// Renders every pair as an entry line, newline-terminated.
#[must_use]
pub fn generate_entries(pairs: &[CollisionPair]) -> String {
    let mut f = SourceFile::new();
    for pair in pairs {
        f.line(&entry_line(pair));
    }
    f.finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn all_lines() -> Vec<String> {
        let pairs: Vec<CollisionPair> = CollisionPair::all().collect();
        generate_entries(&pairs)
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn known_lines() {
        let lines = all_lines();
        assert_eq!(lines.len(), 25);
        assert_eq!(lines[0], "StaticStaticCollision = 0x0,");
        assert_eq!(lines[1], "StaticClipCollision = 0x1,");
        assert_eq!(lines[5], "ClipStaticCollision = 0x100,");
        assert_eq!(lines[6], "ClipClipCollision = 0x101,");
        assert_eq!(lines[12], "CharecterCharecterCollision = 0x202,");
        assert_eq!(lines[24], "SoftSoftCollision = 0x404,");
    }

    #[test]
    fn every_line_encodes_its_index() {
        const NAMES: [&str; 5] = ["Static", "Clip", "Charecter", "Rigid", "Soft"];
        for (i, line) in all_lines().iter().enumerate() {
            let (ident, value) = line.split_once(" = 0x").unwrap();
            let code = u16::from_str_radix(value.trim_end_matches(','), 16).unwrap();
            assert_eq!(usize::from(code & 0xFF), i % 5, "line {i}: {line}");
            assert_eq!(usize::from(code >> 8), i / 5, "line {i}: {line}");
            assert_eq!(
                ident,
                format!("{}{}Collision", NAMES[i / 5], NAMES[i % 5]),
                "line {i}"
            );
        }
    }

    #[test]
    fn hex_is_uppercase_and_unpadded() {
        for line in all_lines() {
            let value = line.split_once("0x").unwrap().1;
            assert!(!value.starts_with('0') || value == "0,", "{line}");
            assert!(!value.chars().any(|c| c.is_ascii_lowercase()), "{line}");
        }
    }
}
