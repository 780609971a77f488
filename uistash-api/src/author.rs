use crate::UserId;

/// Author field as the backend actually sends it: some endpoints embed the
/// account summary, others return the bare account id. Normalized here so
/// display logic only ever sees one shape.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum AuthorRef {
    Embedded(AuthorSummary),
    Id(UserId),
}

#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub avatar: String,
}

impl AuthorRef {
    pub fn display_name(&self) -> &str {
        match self {
            AuthorRef::Id(_) => "Unknown",
            AuthorRef::Embedded(a) if !a.full_name.is_empty() => &a.full_name,
            AuthorRef::Embedded(a) if !a.username.is_empty() => &a.username,
            AuthorRef::Embedded(_) => "Unknown",
        }
    }

    pub fn avatar_url(&self) -> &str {
        match self {
            AuthorRef::Embedded(a) if !a.avatar.is_empty() => &a.avatar,
            _ => "/default-avatar.png",
        }
    }

    /// Resolves an optional author the way every listing displays it.
    pub fn name_of(author: Option<&AuthorRef>) -> &str {
        author.map(AuthorRef::display_name).unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_embedded_object() {
        let a: AuthorRef = serde_json::from_str(
            r#"{"username":"ann","fullName":"Ann Doe","avatar":"https://cdn/x.png"}"#,
        )
        .unwrap();
        assert_eq!(
            a,
            AuthorRef::Embedded(AuthorSummary {
                username: "ann".into(),
                full_name: "Ann Doe".into(),
                avatar: "https://cdn/x.png".into(),
            })
        );
        assert_eq!(a.display_name(), "Ann Doe");
    }

    #[test]
    fn deserializes_bare_id() {
        let a: AuthorRef = serde_json::from_str(r#""64af0c1d""#).unwrap();
        assert_eq!(a, AuthorRef::Id(UserId("64af0c1d".into())));
        assert_eq!(a.display_name(), "Unknown");
    }

    #[test]
    fn falls_back_to_username_then_unknown() {
        let a: AuthorRef = serde_json::from_str(r#"{"username":"ann"}"#).unwrap();
        assert_eq!(a.display_name(), "ann");
        let a: AuthorRef = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(a.display_name(), "Unknown");
        assert_eq!(AuthorRef::name_of(None), "Unknown");
    }
}
