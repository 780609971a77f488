use crate::{AuthorRef, SnippetId, UserId};

/// Fixed set of snippet categories offered by the submission form.
pub const CATEGORIES: [&str; 10] = [
    "button",
    "toggle switch",
    "checkbox",
    "card",
    "loader",
    "input",
    "form",
    "pattern",
    "radio buttons",
    "tooltips",
];

/// One untrusted markup+style pair. Opaque text, never mutated by the
/// renderer; either blob may be empty.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SnippetSource {
    #[serde(rename = "htmlCode", default)]
    pub markup: String,
    #[serde(rename = "cssCode", default)]
    pub style: String,
}

/// Moderation workflow: draft -> review -> public/rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetStatus {
    Draft,
    Review,
    Public,
    Rejected,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(rename = "_id")]
    pub id: SnippetId,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub source: SnippetSource,
    #[serde(default)]
    pub react_code: Option<String>,
    #[serde(default)]
    pub vue_code: Option<String>,
    #[serde(default)]
    pub svelte_code: Option<String>,
    #[serde(default)]
    pub lit_code: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<SnippetStatus>,
    #[serde(default, rename = "accountId")]
    pub author: Option<AuthorRef>,
    #[serde(default)]
    pub views_count: u64,
    #[serde(default)]
    pub favourites_count: u64,
}

impl Snippet {
    pub fn is_public(&self) -> bool {
        self.status == Some(SnippetStatus::Public)
    }

    pub fn author_name(&self) -> &str {
        AuthorRef::name_of(self.author.as_ref())
    }
}

/// Submission payload; `status` selects save-as-draft vs submit-for-review.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSnippet {
    pub title: String,
    #[serde(flatten)]
    pub source: SnippetSource,
    pub react_code: String,
    pub vue_code: String,
    pub svelte_code: String,
    pub lit_code: String,
    pub category: String,
    pub status: SnippetStatus,
    #[serde(rename = "accountId", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<UserId>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavourite {
    pub component_id: SnippetId,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteStatus {
    #[serde(default)]
    pub is_favourite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_wire_shape() {
        let s: Snippet = serde_json::from_str(
            r#"{
                "_id": "64af",
                "title": "Gradient button",
                "htmlCode": "<button>go</button>",
                "cssCode": "button { color: red }",
                "category": "button",
                "status": "public",
                "accountId": {"username": "ann"},
                "viewsCount": 12,
                "favouritesCount": 3
            }"#,
        )
        .unwrap();
        assert_eq!(s.id, SnippetId("64af".into()));
        assert_eq!(s.source.markup, "<button>go</button>");
        assert!(s.is_public());
        assert_eq!(s.author_name(), "ann");
        assert_eq!(s.views_count, 12);
    }

    #[test]
    fn missing_optionals_default() {
        let s: Snippet = serde_json::from_str(r#"{"_id": "64af"}"#).unwrap();
        assert_eq!(s.source, SnippetSource::default());
        assert_eq!(s.status, None);
        assert!(!s.is_public());
        assert_eq!(s.author_name(), "Unknown");
    }

    #[test]
    fn new_snippet_serializes_camel_case() {
        let n = NewSnippet {
            title: "t".into(),
            source: SnippetSource {
                markup: "<i/>".into(),
                style: String::new(),
            },
            react_code: "r".into(),
            vue_code: "v".into(),
            svelte_code: "s".into(),
            lit_code: "l".into(),
            category: "card".into(),
            status: SnippetStatus::Draft,
            account_id: None,
        };
        let v: serde_json::Value = serde_json::to_value(&n).unwrap();
        assert_eq!(v["htmlCode"], "<i/>");
        assert_eq!(v["reactCode"], "r");
        assert_eq!(v["status"], "draft");
        assert!(v.get("accountId").is_none());
    }
}
