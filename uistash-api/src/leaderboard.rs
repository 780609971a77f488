use crate::{AuthorRef, SnippetId, SnippetSource, UserId};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LeaderboardTab {
    Weekly,
    Creators,
    Favourites,
    Views,
}

impl LeaderboardTab {
    pub fn endpoint(&self) -> &'static str {
        match self {
            LeaderboardTab::Weekly => "leaderboard/weekly",
            LeaderboardTab::Creators => "leaderboard/creators",
            LeaderboardTab::Favourites => "leaderboard/top-users-fav",
            LeaderboardTab::Views => "leaderboard/top-users-views",
        }
    }

    pub fn is_creator_tab(&self) -> bool {
        !matches!(self, LeaderboardTab::Weekly)
    }
}

/// Weekly-highlight row. Depending on which aggregation produced the row,
/// the backend nests the snippet under `component` or inlines it, and
/// spells the counters three different ways; the accessors below collapse
/// every spelling to one value.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSnippet {
    #[serde(rename = "_id")]
    pub id: SnippetId,
    #[serde(flatten)]
    pub source: SnippetSource,
    #[serde(default)]
    pub component: Option<EmbeddedSnippet>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, alias = "viewsCount", alias = "viewCount")]
    pub weekly_views: Option<u64>,
    #[serde(default, alias = "favouritesCount", alias = "favCount")]
    pub weekly_favourites: Option<u64>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EmbeddedSnippet {
    #[serde(flatten)]
    pub source: SnippetSource,
    #[serde(default, rename = "accountId")]
    pub author: Option<AuthorRef>,
}

impl LeaderboardSnippet {
    pub fn source(&self) -> &SnippetSource {
        match &self.component {
            Some(c) => &c.source,
            None => &self.source,
        }
    }

    pub fn author_name(&self) -> &str {
        match self.component.as_ref().and_then(|c| c.author.as_ref()) {
            Some(a) => a.display_name(),
            None => self.username.as_deref().unwrap_or("Unknown"),
        }
    }

    pub fn views(&self) -> u64 {
        self.weekly_views.unwrap_or(0)
    }

    pub fn favourites(&self) -> u64 {
        self.weekly_favourites.unwrap_or(0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardCreator {
    pub user_id: UserId,
    pub username: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub posts_count: u64,
    #[serde(default)]
    pub total_points: u64,
    #[serde(default)]
    pub total_views: u64,
    #[serde(default, alias = "totalFavourites")]
    pub total_favorites: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_component_wins_over_inline_fields() {
        let row: LeaderboardSnippet = serde_json::from_str(
            r#"{
                "_id": "s1",
                "htmlCode": "<b>inline</b>",
                "component": {
                    "htmlCode": "<b>nested</b>",
                    "cssCode": "b{}",
                    "accountId": {"username": "ann"}
                },
                "weeklyViews": 10,
                "weeklyFavourites": 2
            }"#,
        )
        .unwrap();
        assert_eq!(row.source().markup, "<b>nested</b>");
        assert_eq!(row.author_name(), "ann");
        assert_eq!(row.views(), 10);
    }

    #[test]
    fn counter_spellings_collapse() {
        let row: LeaderboardSnippet =
            serde_json::from_str(r#"{"_id":"s2","viewCount":7,"favCount":1,"username":"bob"}"#)
                .unwrap();
        assert_eq!(row.views(), 7);
        assert_eq!(row.favourites(), 1);
        assert_eq!(row.author_name(), "bob");
        assert_eq!(row.source().markup, "");
    }

    #[test]
    fn missing_counters_read_as_zero() {
        let row: LeaderboardSnippet = serde_json::from_str(r#"{"_id":"s3"}"#).unwrap();
        assert_eq!(row.views(), 0);
        assert_eq!(row.favourites(), 0);
        assert_eq!(row.author_name(), "Unknown");
    }
}
