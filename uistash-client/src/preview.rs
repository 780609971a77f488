use percent_encoding::percent_decode_str;

/// Some deployments store snippet text percent-encoded. Decoding failures
/// (bad escape, non-UTF-8 result) keep the raw text: a best-effort visual
/// approximation beats a blank preview.
pub fn decode_source(text: &str) -> String {
    match percent_decode_str(text).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => text.to_owned(),
    }
}

/// Everything the scoped render target injects into one isolation
/// boundary: a single style text and the markup. The boundary guarantees
/// rules here never leak to the host page and host styles never leak in.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PreviewDoc {
    pub style_text: String,
    pub markup: String,
}

/// Centers the snippet in its container and lets it fill the available
/// space. Injected ahead of the author's rules so they can override it.
const BASELINE_STYLE: &str = "\
:host {
  display: flex;
  justify-content: center;
  align-items: center;
  width: 100%;
  height: 100%;
}
";

impl PreviewDoc {
    pub fn compose(markup: &str, style: &str) -> PreviewDoc {
        PreviewDoc {
            style_text: format!("{BASELINE_STYLE}{}", decode_source(style)),
            markup: decode_source(markup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_precedes_author_style() {
        let doc = PreviewDoc::compose("<b>hi</b>", "b { color: red }");
        let baseline_at = doc.style_text.find(":host").unwrap();
        let author_at = doc.style_text.find("color: red").unwrap();
        assert!(baseline_at < author_at);
        assert_eq!(doc.markup, "<b>hi</b>");
    }

    #[test]
    fn empty_inputs_still_compose() {
        let doc = PreviewDoc::compose("", "");
        assert_eq!(doc.markup, "");
        assert!(doc.style_text.contains(":host"));
    }

    #[test]
    fn percent_encoded_text_is_decoded() {
        let doc = PreviewDoc::compose("%3Cb%3Ehi%3C%2Fb%3E", "b%20%7B%7D");
        assert_eq!(doc.markup, "<b>hi</b>");
        assert!(doc.style_text.ends_with("b {}"));
    }

    #[test]
    fn malformed_encoding_falls_back_to_raw() {
        // %ff is not valid UTF-8 once decoded; keep the raw text.
        assert_eq!(decode_source("broken %ff escape"), "broken %ff escape");
        // A lone percent sign is passed through unchanged.
        assert_eq!(decode_source("width: 50%"), "width: 50%");
    }

    #[test]
    fn recompose_leaves_no_residue() {
        let first = PreviewDoc::compose("<b>one</b>", "b { color: red }");
        let second = PreviewDoc::compose("<i>two</i>", "");
        assert!(!second.markup.contains("one"));
        assert!(!second.style_text.contains("red"));
        assert_ne!(first, second);
    }
}
