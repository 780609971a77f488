use gloo_storage::{LocalStorage, Storage};
use uistash_client::api::{
    ApiError, CommentRecord, FavouriteStatus, LeaderboardCreator, LeaderboardSnippet,
    LeaderboardTab, NewComment, NewSnippet, Snippet, SnippetId, ToggleFavourite, UserProfile,
};

use crate::session::Session;

const DEFAULT_API_HOST: &str = "http://localhost:3000";
const KEY_API_HOST: &str = "api-host";

/// Deployments can point the client at another backend by setting this key
/// once; it is read per request so no restart is needed.
pub fn api_host() -> String {
    LocalStorage::get(KEY_API_HOST).unwrap_or_else(|_| DEFAULT_API_HOST.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Turns a non-success response into an `ApiError`, surfacing the optional
/// `{message}` body verbatim.
async fn check(resp: reqwest::Response) -> FetchResult<reqwest::Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.bytes().await.unwrap_or_default();
    Err(ApiError::from_parts(status, &body).into())
}

async fn get_json<R>(path: &str, session: Option<&Session>) -> FetchResult<R>
where
    R: for<'de> serde::Deserialize<'de>,
{
    let mut req = crate::CLIENT.get(format!("{}/{}", api_host(), path));
    if let Some(s) = session {
        req = req.bearer_auth(&s.token.0);
    }
    Ok(check(req.send().await?).await?.json().await?)
}

async fn send_json<B>(
    method: reqwest::Method,
    path: &str,
    session: &Session,
    body: Option<&B>,
) -> FetchResult<reqwest::Response>
where
    B: serde::Serialize,
{
    let mut req = crate::CLIENT
        .request(method, format!("{}/{}", api_host(), path))
        .bearer_auth(&session.token.0);
    if let Some(body) = body {
        req = req.json(body);
    }
    check(req.send().await?).await
}

pub async fn fetch_snippets() -> FetchResult<Vec<Snippet>> {
    get_json("components", None).await
}

pub async fn fetch_snippet(id: &SnippetId) -> FetchResult<Snippet> {
    get_json(&format!("components/{id}"), None).await
}

pub async fn fetch_comments(id: &SnippetId) -> FetchResult<Vec<CommentRecord>> {
    get_json(&format!("components/{id}/comments"), None).await
}

pub async fn fetch_review_queue(session: &Session) -> FetchResult<Vec<Snippet>> {
    get_json("components/review", Some(session)).await
}

pub async fn fetch_favourites(session: &Session) -> FetchResult<Vec<Snippet>> {
    get_json("favourites/list", Some(session)).await
}

pub async fn favourite_status(session: &Session, id: &SnippetId) -> FetchResult<FavouriteStatus> {
    get_json(&format!("favourites/status/{id}"), Some(session)).await
}

pub async fn fetch_profile(session: &Session) -> FetchResult<UserProfile> {
    get_json("profile/me", Some(session)).await
}

pub async fn fetch_leaderboard_snippets(
    tab: LeaderboardTab,
) -> FetchResult<Vec<LeaderboardSnippet>> {
    get_json(tab.endpoint(), None).await
}

pub async fn fetch_leaderboard_creators(
    tab: LeaderboardTab,
) -> FetchResult<Vec<LeaderboardCreator>> {
    get_json(tab.endpoint(), None).await
}

pub async fn submit_snippet(session: &Session, snippet: &NewSnippet) -> FetchResult<()> {
    send_json(reqwest::Method::POST, "components", session, Some(snippet)).await?;
    Ok(())
}

pub async fn post_comment(session: &Session, comment: &NewComment) -> FetchResult<CommentRecord> {
    Ok(
        send_json(reqwest::Method::POST, "comments", session, Some(comment))
            .await?
            .json()
            .await?,
    )
}

pub async fn toggle_favourite(
    session: &Session,
    id: &SnippetId,
) -> FetchResult<FavouriteStatus> {
    let body = ToggleFavourite {
        component_id: id.clone(),
    };
    Ok(
        send_json(reqwest::Method::POST, "favourites/toggle", session, Some(&body))
            .await?
            .json()
            .await?,
    )
}

pub async fn approve(session: &Session, id: &SnippetId) -> FetchResult<()> {
    send_json::<()>(
        reqwest::Method::PUT,
        &format!("components/{id}/approve"),
        session,
        None,
    )
    .await?;
    Ok(())
}

pub async fn reject(session: &Session, id: &SnippetId) -> FetchResult<()> {
    send_json::<()>(
        reqwest::Method::PUT,
        &format!("components/{id}/reject"),
        session,
        None,
    )
    .await?;
    Ok(())
}

/// View tracking is best-effort: a failure is logged and never surfaced.
pub async fn track_view(id: &SnippetId) {
    let res = crate::CLIENT
        .post(format!("{}/components/{id}/view", api_host()))
        .send()
        .await;
    match res {
        Err(e) => tracing::debug!("failed to track view: {e:?}"),
        Ok(resp) if !resp.status().is_success() => {
            tracing::debug!(status = %resp.status(), "view tracking rejected")
        }
        Ok(_) => (),
    }
}
