use uistash_client::api::{Snippet, SnippetId};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{api, session::Session, ui};

#[derive(Clone, PartialEq, Properties)]
pub struct ReviewProps {
    pub session: Session,
    pub on_open: Callback<SnippetId>,
}

/// Moderation queue: every snippet submitted for review, with approve and
/// reject actions that remove the row once the backend confirms.
#[function_component(Review)]
pub fn review(p: &ReviewProps) -> Html {
    let queue = use_state(Vec::<Snippet>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let queue = queue.clone();
        let loading = loading.clone();
        let error = error.clone();
        let session = p.session.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::fetch_review_queue(&session).await {
                        Ok(list) => queue.set(list),
                        Err(e) => error.set(Some(e.to_string())),
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let moderate = |approve: bool| {
        let queue = queue.clone();
        let error = error.clone();
        let session = p.session.clone();
        Callback::from(move |id: SnippetId| {
            let queue = queue.clone();
            let error = error.clone();
            let session = session.clone();
            spawn_local(async move {
                let res = match approve {
                    true => api::approve(&session, &id).await,
                    false => api::reject(&session, &id).await,
                };
                match res {
                    Ok(()) => {
                        let remaining: Vec<Snippet> = queue
                            .iter()
                            .filter(|s| s.id != id)
                            .cloned()
                            .collect();
                        queue.set(remaining);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };
    let on_approve = moderate(true);
    let on_reject = moderate(false);

    if *loading {
        return html! { <div class="page-status">{ "Loading..." }</div> };
    }

    let content = if queue.is_empty() {
        html! {
            <p class="review-empty">{ "No components awaiting review 🎉" }</p>
        }
    } else {
        html! {
            <div class="review-list">
                { for queue.iter().map(|s| {
                    let open = {
                        let id = s.id.clone();
                        p.on_open.reform(move |_: MouseEvent| id.clone())
                    };
                    let approve = {
                        let id = s.id.clone();
                        on_approve.reform(move |_: MouseEvent| id.clone())
                    };
                    let reject = {
                        let id = s.id.clone();
                        on_reject.reform(move |_: MouseEvent| id.clone())
                    };
                    html! {
                        <div class="review-card">
                            <div class="review-card-preview" onclick={ open }>
                                <ui::SnippetPreview
                                    markup={ s.source.markup.clone() }
                                    style={ s.source.style.clone() }
                                />
                            </div>
                            <div class="review-card-meta">
                                <strong>{ s.author_name() }</strong>
                                <span class="review-card-title">{ &s.title }</span>
                                <div class="review-card-actions">
                                    <button type="button" class="review-approve" onclick={ approve }>
                                        { "✅ Approve" }
                                    </button>
                                    <button type="button" class="review-reject" onclick={ reject }>
                                        { "❌ Reject" }
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        }
    };

    html! {
        <div class="review-dashboard">
            <h1>{ "🧾 Elements in Review" }</h1>
            { for error.as_ref().map(|e| html! { <div class="page-error">{ e }</div> }) }
            { content }
        </div>
    }
}
