//! # Content Encoding
//!
//! Turns a content string into a [`ModuleMatrix`] via the `qrcode` crate.
//! The symbol version is picked automatically: the smallest version whose
//! capacity fits the content at the requested error correction level.
//!
//! Empty input never fails: blank content encodes [`FALLBACK_CONTENT`]
//! instead, so a shell can render a placeholder while the user types.

use qrcode::QrCode;

use crate::error::SelloError;
use crate::style::EcLevel;

/// Placeholder encoded when the content is empty or whitespace-only.
pub const FALLBACK_CONTENT: &str = "Hello, World!";

/// A square grid of QR modules, `true` meaning dark.
///
/// Produced by [`encode`] and immutable afterwards; re-encoding is the only
/// way to get a different matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Edge length in modules (21 for version 1, 25 for version 2, ...).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the module at `(x, y)` is dark. Out-of-range coordinates
    /// read as light, so neighbor checks at the edge need no special case.
    pub fn is_dark(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as usize >= self.size || y as usize >= self.size {
            return false;
        }
        self.modules[y as usize * self.size + x as usize]
    }

    /// Count of dark modules, mostly useful in tests.
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|m| **m).count()
    }
}

/// Encode `content` at the given error correction level.
///
/// Leading/trailing whitespace is stripped; what remains (or
/// [`FALLBACK_CONTENT`] if nothing remains) is encoded at the smallest
/// fitting symbol version.
///
/// # Errors
///
/// [`SelloError::Encoding`] when the content exceeds the capacity of
/// version 40 at the requested level.
pub fn encode(content: &str, level: EcLevel) -> Result<ModuleMatrix, SelloError> {
    let content = match content.trim() {
        "" => FALLBACK_CONTENT,
        trimmed => trimmed,
    };

    let code = QrCode::with_error_correction_level(content, level.to_qrcode())
        .map_err(|e| SelloError::Encoding(format!("Cannot encode content: {}", e)))?;

    let size = code.width();
    let modules = code
        .to_colors()
        .into_iter()
        .map(|c| c == qrcode::Color::Dark)
        .collect();

    Ok(ModuleMatrix { size, modules })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_one_for_short_content() {
        let matrix = encode("hi", EcLevel::M).unwrap();
        assert_eq!(matrix.size(), 21);
    }

    #[test]
    fn test_version_grows_with_content() {
        // 19 bytes exceed version 1 capacity at level M (14 bytes).
        let matrix = encode("https://example.com", EcLevel::M).unwrap();
        assert_eq!(matrix.size(), 25);
    }

    #[test]
    fn test_blank_content_encodes_fallback() {
        let blank = encode("", EcLevel::M).unwrap();
        let spaces = encode("   \t", EcLevel::M).unwrap();
        let fallback = encode(FALLBACK_CONTENT, EcLevel::M).unwrap();
        assert_eq!(blank, fallback);
        assert_eq!(spaces, fallback);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let a = encode("determinism check", EcLevel::Q).unwrap();
        let b = encode("determinism check", EcLevel::Q).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_higher_level_never_shrinks_symbol() {
        let low = encode("https://example.com/some/path", EcLevel::L).unwrap();
        let high = encode("https://example.com/some/path", EcLevel::H).unwrap();
        assert!(high.size() >= low.size());
    }

    #[test]
    fn test_out_of_range_reads_light() {
        let matrix = encode("edge", EcLevel::M).unwrap();
        assert!(!matrix.is_dark(-1, 0));
        assert!(!matrix.is_dark(0, -1));
        assert!(!matrix.is_dark(matrix.size() as i32, 0));
    }

    #[test]
    fn test_finder_corner_is_dark() {
        // Top-left of the finder pattern is always dark.
        let matrix = encode("finder", EcLevel::M).unwrap();
        assert!(matrix.is_dark(0, 0));
    }

    #[test]
    fn test_oversized_content_fails() {
        // Version 40 at level L caps out at 2953 bytes.
        let fits = "a".repeat(2953);
        let overflows = "a".repeat(2954);
        assert!(encode(&fits, EcLevel::L).is_ok());
        let err = encode(&overflows, EcLevel::L).unwrap_err();
        assert!(matches!(err, SelloError::Encoding(_)));
    }
}
