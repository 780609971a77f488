mod author;
mod comment;
mod error;
mod ids;
mod leaderboard;
mod snippet;
mod user;

pub use author::{AuthorRef, AuthorSummary};
pub use comment::{CommentRecord, NewComment};
pub use error::ApiError;
pub use ids::{AuthToken, CommentId, SnippetId, UserId};
pub use leaderboard::{LeaderboardCreator, LeaderboardSnippet, LeaderboardTab};
pub use snippet::{
    FavouriteStatus, NewSnippet, Snippet, SnippetSource, SnippetStatus, ToggleFavourite,
    CATEGORIES,
};
pub use user::UserProfile;

pub type Time = chrono::DateTime<chrono::Utc>;
