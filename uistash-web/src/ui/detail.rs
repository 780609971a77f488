use uistash_client::{
    api::{CommentId, CommentRecord, NewComment, Snippet, SnippetId},
    assemble, prepend_root, CommentNode, Framework,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{api, session::Session, ui, ui::SourceTab};

#[derive(Clone, PartialEq, Properties)]
pub struct DetailProps {
    pub id: SnippetId,
    pub session: Option<Session>,
    pub on_back: Callback<()>,
}

pub enum DetailMsg {
    Loaded(u32, Box<Snippet>),
    LoadFailed(u32, String),
    CommentsLoaded(u32, Vec<CommentRecord>),
    CommentsFailed(u32, String),
    FavouriteLoaded(u32, bool),
    ToggleFavourite,
    FavouriteToggled(u32, bool),
    FavouriteFailed(u32, String),
    SetTab(SourceTab),
    OpenExport(Framework),
    CloseExport,
    SetReplyTo(Option<CommentId>),
    DraftChanged(String),
    SubmitComment,
    CommentPosted(u32, Box<CommentRecord>),
    CommentPostFailed(u32, String),
}

/// Snippet detail: isolated preview, source tabs, favourite toggle, export
/// popup and the threaded comments.
///
/// The snippet, comment and favourite-status fetches are independent and
/// may resolve in any order; each renders as it arrives. Every async
/// message carries the epoch it was started under so a response arriving
/// after navigation to another snippet is discarded instead of applied.
pub struct Detail {
    epoch: u32,
    loading: bool,
    snippet: Option<Snippet>,
    load_error: Option<String>,
    comments: Vec<CommentNode>,
    comments_error: Option<String>,
    is_favourite: bool,
    favourite_error: Option<String>,
    active_tab: SourceTab,
    export: Option<Framework>,
    reply_to: Option<CommentId>,
    draft: String,
    posting: bool,
    comment_error: Option<String>,
}

impl Component for Detail {
    type Message = DetailMsg;
    type Properties = DetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        let this = Detail {
            epoch: 0,
            loading: true,
            snippet: None,
            load_error: None,
            comments: Vec::new(),
            comments_error: None,
            is_favourite: false,
            favourite_error: None,
            active_tab: SourceTab::Markup,
            export: None,
            reply_to: None,
            draft: String::new(),
            posting: false,
            comment_error: None,
        };
        this.spawn_fetches(ctx);
        this
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id != old_props.id {
            self.epoch += 1;
            self.loading = true;
            self.snippet = None;
            self.load_error = None;
            self.comments = Vec::new();
            self.comments_error = None;
            self.is_favourite = false;
            self.favourite_error = None;
            self.active_tab = SourceTab::Markup;
            self.export = None;
            self.reply_to = None;
            self.draft = String::new();
            self.posting = false;
            self.comment_error = None;
            self.spawn_fetches(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DetailMsg::Loaded(epoch, snippet) => {
                if epoch != self.epoch {
                    return false;
                }
                self.loading = false;
                self.snippet = Some(*snippet);
            }
            DetailMsg::LoadFailed(epoch, message) => {
                if epoch != self.epoch {
                    return false;
                }
                self.loading = false;
                self.load_error = Some(message);
            }
            DetailMsg::CommentsLoaded(epoch, records) => {
                if epoch != self.epoch {
                    return false;
                }
                self.comments = assemble(records);
            }
            DetailMsg::CommentsFailed(epoch, message) => {
                if epoch != self.epoch {
                    return false;
                }
                self.comments_error = Some(message);
            }
            DetailMsg::FavouriteLoaded(epoch, fav) => {
                if epoch != self.epoch {
                    return false;
                }
                self.is_favourite = fav;
            }
            DetailMsg::ToggleFavourite => {
                let Some(session) = ctx.props().session.clone() else {
                    return false;
                };
                let id = ctx.props().id.clone();
                let epoch = self.epoch;
                ctx.link().send_future(async move {
                    match api::toggle_favourite(&session, &id).await {
                        Ok(status) => DetailMsg::FavouriteToggled(epoch, status.is_favourite),
                        Err(e) => DetailMsg::FavouriteFailed(epoch, e.to_string()),
                    }
                });
                return false;
            }
            DetailMsg::FavouriteToggled(epoch, fav) => {
                if epoch != self.epoch {
                    return false;
                }
                if let Some(snippet) = &mut self.snippet {
                    if fav && !self.is_favourite {
                        snippet.favourites_count += 1;
                    } else if !fav && self.is_favourite {
                        snippet.favourites_count = snippet.favourites_count.saturating_sub(1);
                    }
                }
                self.is_favourite = fav;
                self.favourite_error = None;
            }
            DetailMsg::FavouriteFailed(epoch, message) => {
                if epoch != self.epoch {
                    return false;
                }
                self.favourite_error = Some(message);
            }
            DetailMsg::SetTab(tab) => self.active_tab = tab,
            DetailMsg::OpenExport(framework) => self.export = Some(framework),
            DetailMsg::CloseExport => self.export = None,
            DetailMsg::SetReplyTo(target) => self.reply_to = target,
            DetailMsg::DraftChanged(text) => self.draft = text,
            DetailMsg::SubmitComment => {
                let Some(session) = ctx.props().session.clone() else {
                    return false;
                };
                let content = self.draft.trim().to_string();
                if content.is_empty() || self.posting {
                    return false;
                }
                self.posting = true;
                self.comment_error = None;
                let epoch = self.epoch;
                let comment = NewComment {
                    content,
                    component_id: ctx.props().id.clone(),
                    parent_id: self.reply_to.clone(),
                };
                ctx.link().send_future(async move {
                    match api::post_comment(&session, &comment).await {
                        Ok(record) => DetailMsg::CommentPosted(epoch, Box::new(record)),
                        Err(e) => DetailMsg::CommentPostFailed(epoch, e.to_string()),
                    }
                });
            }
            DetailMsg::CommentPosted(epoch, record) => {
                if epoch != self.epoch {
                    return false;
                }
                self.posting = false;
                self.draft.clear();
                self.reply_to = None;
                match record.parent_id {
                    // A fresh root comment has no children yet; prepend it
                    // without reassembling the thread.
                    None => prepend_root(&mut self.comments, *record),
                    // A reply's final position depends on server-side
                    // ordering; refetch and reassemble from scratch.
                    Some(_) => {
                        let id = ctx.props().id.clone();
                        ctx.link().send_future(async move {
                            match api::fetch_comments(&id).await {
                                Ok(records) => DetailMsg::CommentsLoaded(epoch, records),
                                Err(e) => DetailMsg::CommentsFailed(epoch, e.to_string()),
                            }
                        });
                    }
                }
            }
            DetailMsg::CommentPostFailed(epoch, message) => {
                if epoch != self.epoch {
                    return false;
                }
                self.posting = false;
                self.comment_error = Some(message);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <div class="page-status">{ "Loading component..." }</div> };
        }
        if let Some(e) = &self.load_error {
            return html! { <div class="page-error">{ e }</div> };
        }
        let Some(snippet) = &self.snippet else {
            return html! { <div class="page-status">{ "Component not found." }</div> };
        };

        html! {
            <div class="detail">
                <button
                    type="button"
                    class="back-link"
                    onclick={ ctx.props().on_back.reform(|_| ()) }
                >
                    { "⬅ Back to the list" }
                </button>
                <h1>{ &snippet.title }</h1>
                <div class="detail-row">
                    <div class="detail-preview">
                        <ui::SnippetPreview
                            markup={ snippet.source.markup.clone() }
                            style={ snippet.source.style.clone() }
                        />
                    </div>
                    <div class="detail-code-viewer">
                        { self.source_tabs(ctx, snippet) }
                    </div>
                </div>
                { self.action_bar(ctx, snippet) }
                { self.comments_section(ctx) }
                { for self.export.map(|framework| html! {
                    <ui::ExportPopup
                        framework={ framework }
                        code={ self.export_code(framework) }
                        on_close={ ctx.link().callback(|_| DetailMsg::CloseExport) }
                    />
                }) }
            </div>
        }
    }
}

impl Detail {
    /// Starts the three independent fetches plus best-effort view
    /// tracking. No ordering is assumed between them.
    fn spawn_fetches(&self, ctx: &Context<Self>) {
        let epoch = self.epoch;
        let id = ctx.props().id.clone();

        ctx.link().send_future({
            let id = id.clone();
            async move {
                match api::fetch_snippet(&id).await {
                    Ok(snippet) => DetailMsg::Loaded(epoch, Box::new(snippet)),
                    Err(e) => DetailMsg::LoadFailed(epoch, e.to_string()),
                }
            }
        });

        ctx.link().send_future({
            let id = id.clone();
            async move {
                match api::fetch_comments(&id).await {
                    Ok(records) => DetailMsg::CommentsLoaded(epoch, records),
                    Err(e) => DetailMsg::CommentsFailed(epoch, e.to_string()),
                }
            }
        });

        if let Some(session) = ctx.props().session.clone() {
            ctx.link().send_future({
                let id = id.clone();
                async move {
                    match api::favourite_status(&session, &id).await {
                        Ok(status) => DetailMsg::FavouriteLoaded(epoch, status.is_favourite),
                        Err(e) => {
                            // Not worth an inline error; the snippet still
                            // displays and the button starts unfavourited.
                            tracing::warn!("failed fetching favourite status: {e}");
                            DetailMsg::FavouriteLoaded(epoch, false)
                        }
                    }
                }
            });
        }

        spawn_local(async move { api::track_view(&id).await });
    }

    fn export_code(&self, framework: Framework) -> String {
        let Some(snippet) = &self.snippet else {
            return String::new();
        };
        let stored = match framework {
            Framework::React => snippet.react_code.clone(),
            Framework::Vue => snippet.vue_code.clone(),
            Framework::Svelte => snippet.svelte_code.clone(),
            Framework::Lit => snippet.lit_code.clone(),
        };
        stored.unwrap_or_else(|| framework.generate(&snippet.source))
    }

    fn source_tabs(&self, ctx: &Context<Self>, snippet: &Snippet) -> Html {
        let tab_button = |tab: SourceTab, label: &'static str| {
            let active = (self.active_tab == tab).then(|| "tab-active");
            html! {
                <button
                    type="button"
                    class={ classes!("tab-button", active) }
                    onclick={ ctx.link().callback(move |_| DetailMsg::SetTab(tab)) }
                >
                    { label }
                </button>
            }
        };
        let code = match self.active_tab {
            SourceTab::Markup => &snippet.source.markup,
            SourceTab::Style => &snippet.source.style,
        };
        html! {
            <div class="tabs">
                <div class="tabs-header">
                    { tab_button(SourceTab::Markup, "HTML") }
                    { tab_button(SourceTab::Style, "CSS") }
                </div>
                <div class="tabs-content">
                    <pre class="code-block"><code>{ code }</code></pre>
                </div>
            </div>
        }
    }

    fn action_bar(&self, ctx: &Context<Self>, snippet: &Snippet) -> Html {
        let favourite = ctx.props().session.is_some().then(|| {
            let label = match self.is_favourite {
                true => format!("★ Favourited ({})", snippet.favourites_count),
                false => format!("⭐ Favourite ({})", snippet.favourites_count),
            };
            html! {
                <button
                    type="button"
                    class="favourite-btn"
                    onclick={ ctx.link().callback(|_| DetailMsg::ToggleFavourite) }
                >
                    { label }
                </button>
            }
        });
        html! {
            <div class="detail-actions">
                { for favourite }
                <span class="detail-views">
                    { format!("{} views", snippet.views_count) }
                </span>
                { for Framework::ALL.iter().map(|f| {
                    let f = *f;
                    html! {
                        <button
                            type="button"
                            class="export-btn"
                            onclick={ ctx.link().callback(move |_| DetailMsg::OpenExport(f)) }
                        >
                            { format!("Export {}", f.label()) }
                        </button>
                    }
                }) }
                { for self.favourite_error.as_ref().map(|e| html! {
                    <span class="inline-error">{ e }</span>
                }) }
            </div>
        }
    }

    fn comments_section(&self, ctx: &Context<Self>) -> Html {
        let form = match &ctx.props().session {
            None => html! {
                <p class="comments-signin">{ "Sign in to join the discussion." }</p>
            },
            Some(_) => {
                let reply_banner = self.reply_to.as_ref().map(|target| {
                    let author = find_author(&self.comments, target)
                        .unwrap_or_else(|| "a comment".to_string());
                    html! {
                        <div class="reply-banner">
                            { format!("Replying to {author}") }
                            <button
                                type="button"
                                class="reply-cancel"
                                onclick={ ctx.link().callback(|_| DetailMsg::SetReplyTo(None)) }
                            >
                                { "Cancel" }
                            </button>
                        </div>
                    }
                });
                html! {
                    <div class="comment-form">
                        { for reply_banner }
                        <textarea
                            placeholder="Add a comment..."
                            value={ self.draft.clone() }
                            oninput={ ctx.link().callback(|e: InputEvent| {
                                let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                                DetailMsg::DraftChanged(area.value())
                            }) }
                        />
                        <button
                            type="button"
                            class="comment-submit"
                            disabled={ self.posting }
                            onclick={ ctx.link().callback(|_| DetailMsg::SubmitComment) }
                        >
                            { if self.posting { "Posting..." } else { "Post" } }
                        </button>
                        { for self.comment_error.as_ref().map(|e| html! {
                            <div class="inline-error">{ e }</div>
                        }) }
                    </div>
                }
            }
        };

        html! {
            <div class="detail-comments">
                <h2>{ "Comments" }</h2>
                { form }
                { for self.comments_error.as_ref().map(|e| html! {
                    <div class="inline-error">{ e }</div>
                }) }
                <ui::CommentThread
                    nodes={ self.comments.clone() }
                    can_reply={ ctx.props().session.is_some() }
                    on_reply={ ctx.link().callback(|id| DetailMsg::SetReplyTo(Some(id))) }
                />
            </div>
        }
    }
}

fn find_author(nodes: &[CommentNode], id: &CommentId) -> Option<String> {
    for node in nodes {
        if node.record.id == *id {
            return Some(node.record.author_name().to_string());
        }
        if let Some(found) = find_author(&node.replies, id) {
            return Some(found);
        }
    }
    None
}
