use crate::api::Snippet;

/// Search + category predicate the gallery surfaces share.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GalleryFilter {
    pub search: String,
    pub category: Option<String>,
}

impl GalleryFilter {
    pub fn matches(&self, snippet: &Snippet) -> bool {
        let search_ok = self.search.is_empty()
            || snippet
                .title
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let category_ok = match &self.category {
            None => true,
            Some(c) => snippet.category.as_deref() == Some(c.as_str()),
        };
        search_ok && category_ok
    }

    /// Gallery listings only ever show published snippets.
    pub fn apply<'a>(&self, snippets: &'a [Snippet]) -> Vec<&'a Snippet> {
        snippets
            .iter()
            .filter(|s| s.is_public() && self.matches(s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{SnippetId, SnippetSource, SnippetStatus};

    fn snippet(title: &str, category: &str, status: SnippetStatus) -> Snippet {
        Snippet {
            id: SnippetId(title.to_string()),
            title: title.to_string(),
            source: SnippetSource::default(),
            react_code: None,
            vue_code: None,
            svelte_code: None,
            lit_code: None,
            category: Some(category.to_string()),
            status: Some(status),
            author: None,
            views_count: 0,
            favourites_count: 0,
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let f = GalleryFilter {
            search: "GRADIENT".into(),
            category: None,
        };
        assert!(f.matches(&snippet("Gradient button", "button", SnippetStatus::Public)));
        assert!(!f.matches(&snippet("Plain card", "card", SnippetStatus::Public)));
    }

    #[test]
    fn category_must_match_exactly_when_set() {
        let f = GalleryFilter {
            search: String::new(),
            category: Some("card".into()),
        };
        assert!(f.matches(&snippet("x", "card", SnippetStatus::Public)));
        assert!(!f.matches(&snippet("x", "button", SnippetStatus::Public)));
    }

    #[test]
    fn apply_keeps_public_snippets_only() {
        let all = vec![
            snippet("a", "card", SnippetStatus::Public),
            snippet("b", "card", SnippetStatus::Draft),
            snippet("c", "card", SnippetStatus::Review),
            snippet("d", "card", SnippetStatus::Rejected),
        ];
        let visible = GalleryFilter::default().apply(&all);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "a");
    }
}
