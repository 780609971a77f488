use uistash_client::api::{Snippet, SnippetId, SnippetStatus, UserProfile};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{api, session::Session, ui};

#[derive(Clone, PartialEq, Properties)]
pub struct ProfileProps {
    pub session: Session,
    pub on_open: Callback<SnippetId>,
    pub on_create: Callback<()>,
}

#[derive(Clone, Copy, PartialEq)]
enum ProfileTab {
    Posts,
    InReview,
    Rejected,
    Drafts,
}

impl ProfileTab {
    const ALL: [ProfileTab; 4] = [
        ProfileTab::Posts,
        ProfileTab::InReview,
        ProfileTab::Rejected,
        ProfileTab::Drafts,
    ];

    fn label(&self) -> &'static str {
        match self {
            ProfileTab::Posts => "Posts",
            ProfileTab::InReview => "In Review",
            ProfileTab::Rejected => "Rejected",
            ProfileTab::Drafts => "Drafts",
        }
    }

    fn status(&self) -> SnippetStatus {
        match self {
            ProfileTab::Posts => SnippetStatus::Public,
            ProfileTab::InReview => SnippetStatus::Review,
            ProfileTab::Rejected => SnippetStatus::Rejected,
            ProfileTab::Drafts => SnippetStatus::Draft,
        }
    }
}

#[function_component(Profile)]
pub fn profile(p: &ProfileProps) -> Html {
    let user = use_state(|| None::<UserProfile>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let active_tab = use_state(|| ProfileTab::Posts);

    {
        let user = user.clone();
        let loading = loading.clone();
        let error = error.clone();
        let session = p.session.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::fetch_profile(&session).await {
                        Ok(profile) => user.set(Some(profile)),
                        Err(e) => error.set(Some(e.to_string())),
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    if *loading {
        return html! { <div class="page-status">{ "Loading profile..." }</div> };
    }
    let user = match (user.as_ref(), error.as_ref()) {
        (Some(user), _) => user.clone(),
        (None, Some(e)) => return html! { <div class="page-error">{ e }</div> },
        (None, None) => return html! { <div class="page-error">{ "User not found" }</div> },
    };

    let posts: Vec<&Snippet> = user
        .posts
        .iter()
        .filter(|post| post.status == Some(active_tab.status()))
        .collect();

    let post_grid = if posts.is_empty() {
        let empty_text = match *active_tab {
            ProfileTab::Posts => "Looks like you haven't made any posts yet.",
            ProfileTab::InReview => "Nothing waiting for review.",
            ProfileTab::Rejected => "No rejected posts.",
            ProfileTab::Drafts => "No drafts saved.",
        };
        html! {
            <div class="empty-state">
                <h2>{ "Nothing here yet" }</h2>
                <p>{ empty_text }</p>
                <button
                    type="button"
                    class="create-btn"
                    onclick={ p.on_create.reform(|_| ()) }
                >
                    { "＋ Create" }
                </button>
            </div>
        }
    } else {
        html! {
            <div class="grid">
                { for posts.into_iter().map(|post| {
                    let open = {
                        let id = post.id.clone();
                        p.on_open.reform(move |_: MouseEvent| id.clone())
                    };
                    html! {
                        <div class="post-card" onclick={ open }>
                            <ui::SnippetPreview
                                markup={ post.source.markup.clone() }
                                style={ post.source.style.clone() }
                            />
                            <h3>{ &post.title }</h3>
                        </div>
                    }
                }) }
            </div>
        }
    };

    html! {
        <div class="profile-page">
            <div class="profile-header">
                <img class="profile-avatar" src={ user.avatar_url() } alt={ user.display_username().to_string() } />
                <div class="profile-info">
                    <h1>{ user.display_username() }</h1>
                    <p class="profile-email">{ &user.email }</p>
                </div>
            </div>
            <div class="profile-tabs">
                { for ProfileTab::ALL.iter().map(|t| {
                    let t = *t;
                    let active = (*active_tab == t).then(|| "active");
                    let active_tab = active_tab.clone();
                    html! {
                        <button
                            type="button"
                            class={ classes!("profile-tab", active) }
                            onclick={ Callback::from(move |_| active_tab.set(t)) }
                        >
                            { t.label() }
                        </button>
                    }
                }) }
            </div>
            <div class="profile-content">
                { post_grid }
            </div>
        </div>
    }
}
