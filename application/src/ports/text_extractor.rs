//! Text extractor port

/// Turns page markup into readable plain text.
///
/// Implementations drop non-content elements (scripts, styles, navigation
/// chrome, forms) and normalize whitespace. Extraction is synchronous CPU
/// work; callers decide the length cap.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, markup: &str) -> String;
}
