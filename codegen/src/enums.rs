//! Complete `CollisionType` enum definitions.
//!
//! The C++ form matches the declaration in the engine's source: tab-indented
//! entries, no comma after the last one. The Rust form carries the same
//! values on a `#[repr(u16)]` enum with a doc comment per variant.

use std::fmt::Write as FmtWrite;

use pphy_model::CollisionPair;

use crate::emit::SourceFile;
use crate::entries::entry_line;

/// Name of the generated enum in both languages.
pub const ENUM_NAME: &str = "CollisionType";

/// Generates `enum class CollisionType { ... };`.
#[must_use]
pub fn generate_cpp_enum(pairs: &[CollisionPair]) -> String {
    let mut f = SourceFile::new();
    let _ = writeln!(f.buf, "enum class {ENUM_NAME}");
    f.line("{");
    let last = pairs.len().saturating_sub(1);
    for (i, pair) in pairs.iter().enumerate() {
        let entry = entry_line(pair);
        let entry = if i == last {
            entry.trim_end_matches(',')
        } else {
            entry.as_str()
        };
        let _ = writeln!(f.buf, "\t{entry}");
    }
    f.line("};");
    f.finish()
}

/// Generates a `#[repr(u16)]` Rust enum with one variant per pair.
#[must_use]
pub fn generate_rust_enum(pairs: &[CollisionPair]) -> String {
    let mut f = SourceFile::generated_by("pphy-collisions");
    f.doc_comment("Packed collision code for an ordered pair of object types.");
    f.doc_comment("");
    f.doc_comment("The low byte is the index of the second type, the high byte the");
    f.doc_comment("index of the first.");
    f.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]");
    f.line("#[repr(u16)]");
    let _ = writeln!(f.buf, "pub enum {ENUM_NAME} {{");
    for pair in pairs {
        f.indented_doc_comment(&format!("`{}` against `{}`.", pair.first, pair.second));
        let _ = writeln!(f.buf, "    {} = 0x{:X},", pair.variant_name(), pair.code);
    }
    f.line("}");
    f.finish()
}
