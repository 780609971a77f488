use crate::{Snippet, SnippetId, UserId};

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, rename = "_id")]
    pub id: Option<UserId>,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "userName")]
    pub username: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub favourites: Vec<SnippetId>,
    #[serde(default)]
    pub posts: Vec<Snippet>,
}

impl UserProfile {
    /// Profiles created through the auth redirect may have no username yet;
    /// fall back to the mailbox part of the email.
    pub fn display_username(&self) -> &str {
        if !self.username.is_empty() {
            return &self.username;
        }
        match self.email.split('@').next() {
            Some(mailbox) if !mailbox.is_empty() => mailbox,
            _ => "user",
        }
    }

    pub fn avatar_url(&self) -> String {
        if !self.avatar.is_empty() {
            return self.avatar.clone();
        }
        format!(
            "https://ui-avatars.com/api/?name={}",
            self.display_username()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_falls_back_to_email_mailbox() {
        let p: UserProfile =
            serde_json::from_str(r#"{"email":"ann@example.org"}"#).unwrap();
        assert_eq!(p.display_username(), "ann");
        assert!(p.avatar_url().contains("name=ann"));
    }

    #[test]
    fn legacy_user_name_spelling_accepted() {
        let p: UserProfile = serde_json::from_str(r#"{"userName":"ann"}"#).unwrap();
        assert_eq!(p.display_username(), "ann");
    }

    #[test]
    fn empty_profile_still_displays() {
        let p: UserProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(p.display_username(), "user");
    }
}
