//! PPhy collision enum generator.
//!
//! Enumerates every ordered pair of [`ObjectType`]s and renders one enum entry
//! per pair, packing the two type indices into the entry's value. The default
//! output is the bare entry list that gets pasted into the engine's
//! `CollisionType` enum; the complete C++ and Rust enum definitions are also
//! available.
//!
//! ```
//! use pphy_codegen::{generate, EmitOptions};
//!
//! let text = generate(&EmitOptions::default());
//! assert!(text.starts_with("StaticStaticCollision = 0x0,\n"));
//! assert_eq!(text.lines().count(), 25);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod emit;
pub mod entries;
pub mod enums;
pub mod error;

use std::fmt;
use std::io::Write;

use pphy_model::{CollisionPair, ObjectType};
use tracing::{debug, info};

pub use error::CodegenError;

/// Shape of the generated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `{a}{b}Collision = 0x{code},` line per pair.
    #[default]
    Entries,
    /// A complete `enum class CollisionType { ... };` definition.
    CppEnum,
    /// A `#[repr(u16)]` Rust `CollisionType` enum.
    RustEnum,
}

impl OutputFormat {
    /// Returns the name used on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Entries => "entries",
            OutputFormat::CppEnum => "cpp-enum",
            OutputFormat::RustEnum => "rust-enum",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Output shape.
    pub format: OutputFormat,
    /// Drop `StaticStatic` and `ClipClip`. Off by default.
    pub skip_spatial_self_pairs: bool,
}

/// Report of what was generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitReport {
    /// Format that was rendered.
    pub format: OutputFormat,
    /// Number of pairs written.
    pub emitted: usize,
    /// Number of pairs removed by the spatial self-pair filter.
    pub skipped: usize,
}

/// Returns the pairs to emit, in enumeration order.
///
/// Filtered rows keep their original index and code; nothing is renumbered.
#[must_use]
pub fn enumerate(options: &EmitOptions) -> Vec<CollisionPair> {
    CollisionPair::all()
        .filter(|pair| !(options.skip_spatial_self_pairs && pair.is_spatial_self_pair()))
        .collect()
}

/// Renders the requested format into a string.
#[must_use]
pub fn generate(options: &EmitOptions) -> String {
    let pairs = enumerate(options);
    render(options.format, &pairs)
}

/// Writes the requested format to `out`.
///
/// # Errors
///
/// Returns [`CodegenError::Write`] if writing to or flushing `out` fails.
pub fn write_to<W: Write>(out: &mut W, options: &EmitOptions) -> Result<EmitReport, CodegenError> {
    let pairs = enumerate(options);
    for pair in &pairs {
        debug!(
            index = pair.index,
            identifier = %pair.identifier(),
            code = %pair.code,
            "emitting pair"
        );
    }

    let text = render(options.format, &pairs);
    out.write_all(text.as_bytes())?;
    out.flush()?;

    let report = EmitReport {
        format: options.format,
        emitted: pairs.len(),
        skipped: CollisionPair::COUNT - pairs.len(),
    };
    info!(
        format = %report.format,
        emitted = report.emitted,
        skipped = report.skipped,
        types = ObjectType::COUNT,
        "collision codes generated"
    );
    Ok(report)
}

fn render(format: OutputFormat, pairs: &[CollisionPair]) -> String {
    match format {
        OutputFormat::Entries => entries::generate_entries(pairs),
        OutputFormat::CppEnum => enums::generate_cpp_enum(pairs),
        OutputFormat::RustEnum => enums::generate_rust_enum(pairs),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;

    use super::*;

    /// Writer that refuses every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn default_output_is_25_entry_lines() {
        let mut out = Vec::new();
        let report = write_to(&mut out, &EmitOptions::default()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 25);
        assert!(text.ends_with("SoftSoftCollision = 0x404,\n"));
        assert_eq!(
            report,
            EmitReport {
                format: OutputFormat::Entries,
                emitted: 25,
                skipped: 0,
            }
        );
    }

    #[test]
    fn written_text_matches_generated_string() {
        let options = EmitOptions {
            format: OutputFormat::CppEnum,
            skip_spatial_self_pairs: false,
        };
        let mut out = Vec::new();
        write_to(&mut out, &options).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), generate(&options));
    }

    #[test]
    fn output_is_deterministic() {
        let options = EmitOptions::default();
        assert_eq!(generate(&options), generate(&options));
    }

    #[test]
    fn spatial_filter_drops_two_rows_without_renumbering() {
        let options = EmitOptions {
            format: OutputFormat::Entries,
            skip_spatial_self_pairs: true,
        };
        let pairs = enumerate(&options);
        assert_eq!(pairs.len(), 23);
        assert_eq!(pairs[0].identifier(), "StaticClipCollision");
        assert_eq!(pairs[0].index, 1);

        let text = generate(&options);
        assert!(!text.contains("StaticStaticCollision"));
        assert!(!text.contains("ClipClipCollision"));
        assert!(text.contains("CharecterCharecterCollision = 0x202,"));

        let report = write_to(&mut Vec::<u8>::new(), &options).unwrap();
        assert_eq!(report.skipped, 2);
    }

    #[test]
    fn write_failure_is_reported() {
        let err = write_to(&mut BrokenPipe, &EmitOptions::default()).unwrap_err();
        assert!(matches!(err, CodegenError::Write(_)));
    }

    #[test]
    fn format_names() {
        assert_eq!(OutputFormat::default(), OutputFormat::Entries);
        assert_eq!(OutputFormat::CppEnum.to_string(), "cpp-enum");
        assert_eq!(OutputFormat::RustEnum.as_str(), "rust-enum");
    }
}
