use crate::{AuthorRef, CommentId, SnippetId, Time};

/// A single comment as fetched from the backend. Immutable once posted.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    #[serde(rename = "_id")]
    pub id: CommentId,
    #[serde(default)]
    pub content: String,
    pub created_at: Time,
    #[serde(default, rename = "accountId")]
    pub author: Option<AuthorRef>,
    /// When present, refers to another record in the same fetched
    /// collection. The parent may be absent (deleted or not included);
    /// such orphan replies are dropped at assembly time.
    #[serde(default)]
    pub parent_id: Option<CommentId>,
}

impl CommentRecord {
    pub fn author_name(&self) -> &str {
        AuthorRef::name_of(self.author.as_ref())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    pub component_id: SnippetId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CommentId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tolerates_bare_author_and_no_parent() {
        let c: CommentRecord = serde_json::from_str(
            r#"{"_id":"c1","content":"nice","createdAt":"2026-01-05T10:00:00Z","accountId":"u9"}"#,
        )
        .unwrap();
        assert_eq!(c.parent_id, None);
        assert_eq!(c.author_name(), "Unknown");
    }

    #[test]
    fn new_comment_omits_absent_parent() {
        let n = NewComment {
            content: "hi".into(),
            component_id: SnippetId("s1".into()),
            parent_id: None,
        };
        let v = serde_json::to_value(&n).unwrap();
        assert_eq!(v["componentId"], "s1");
        assert!(v.get("parentId").is_none());

        let n = NewComment {
            parent_id: Some(CommentId("c7".into())),
            ..n
        };
        let v = serde_json::to_value(&n).unwrap();
        assert_eq!(v["parentId"], "c7");
    }
}
