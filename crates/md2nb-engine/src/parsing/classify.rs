use regex::Regex;
use std::sync::OnceLock;

/// Cell boundary marker recognized on its own line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMarker {
    MarkdownOpen,
    MarkdownClose,
    CodeOpen,
    CodeClose,
}

/// Whether a line looks like a fence opener or closer.
///
/// This is a local fact only; whether the fence is honored depends on the
/// builder's state (fences are stripped inside code cell regions only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Open,
    Close,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of parsing: each line is classified independently
/// without reference to the surrounding cell state.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// Line text without its terminator.
    pub text: &'a str,
    /// Set when the trimmed line is exactly one of the four cell markers.
    pub marker: Option<CellMarker>,
    /// Set when the line matches a fence opener/closer pattern.
    pub fence: Option<FenceSig>,
}

/// Classify a line into its local facts.
pub fn classify(line: &str) -> LineClass<'_> {
    LineClass {
        text: line,
        marker: marker_sig(line),
        fence: fence_sig(line),
    }
}

fn marker_sig(line: &str) -> Option<CellMarker> {
    match line.trim() {
        "<!-- MARKDOWN_CELL -->" => Some(CellMarker::MarkdownOpen),
        "<!-- END_MARKDOWN_CELL -->" => Some(CellMarker::MarkdownClose),
        "<!-- CODE_CELL -->" => Some(CellMarker::CodeOpen),
        "<!-- END_CODE_CELL -->" => Some(CellMarker::CodeClose),
        _ => None,
    }
}

fn fence_sig(line: &str) -> Option<FenceSig> {
    static OPEN_FENCE: OnceLock<Regex> = OnceLock::new();
    static CLOSE_FENCE: OnceLock<Regex> = OnceLock::new();
    let open = OPEN_FENCE.get_or_init(|| Regex::new(r"^```go\s*$").expect("Invalid fence regex"));
    let close = CLOSE_FENCE.get_or_init(|| Regex::new(r"^```\s*$").expect("Invalid fence regex"));

    if open.is_match(line) {
        Some(FenceSig::Open)
    } else if close.is_match(line) {
        Some(FenceSig::Close)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<!-- MARKDOWN_CELL -->", CellMarker::MarkdownOpen)]
    #[case("<!-- END_MARKDOWN_CELL -->", CellMarker::MarkdownClose)]
    #[case("<!-- CODE_CELL -->", CellMarker::CodeOpen)]
    #[case("<!-- END_CODE_CELL -->", CellMarker::CodeClose)]
    fn detect_markers(#[case] line: &str, #[case] expected: CellMarker) {
        assert_eq!(classify(line).marker, Some(expected));
    }

    #[test]
    fn detect_marker_with_surrounding_whitespace() {
        assert_eq!(
            classify("   <!-- CODE_CELL -->  ").marker,
            Some(CellMarker::CodeOpen)
        );
    }

    #[test]
    fn no_marker_on_similar_text() {
        assert_eq!(classify("<!-- MARKDOWN CELL -->").marker, None);
        assert_eq!(classify("text <!-- MARKDOWN_CELL -->").marker, None);
    }

    #[test]
    fn detect_open_fence() {
        assert_eq!(classify("```go").fence, Some(FenceSig::Open));
        assert_eq!(classify("```go   ").fence, Some(FenceSig::Open));
    }

    #[test]
    fn detect_close_fence() {
        assert_eq!(classify("```").fence, Some(FenceSig::Close));
        assert_eq!(classify("```  ").fence, Some(FenceSig::Close));
    }

    #[test]
    fn no_fence() {
        assert_eq!(classify("hello").fence, None);
        // Only go-tagged fences open a fence region.
        assert_eq!(classify("```rust").fence, None);
        assert_eq!(classify("```go extra").fence, None);
        // Indented fences are ordinary content.
        assert_eq!(classify("  ```go").fence, None);
    }
}
