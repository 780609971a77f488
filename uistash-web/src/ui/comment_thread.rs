use uistash_client::{api::CommentId, CommentNode};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentThreadProps {
    pub nodes: Vec<CommentNode>,
    pub can_reply: bool,
    pub on_reply: Callback<CommentId>,
}

/// Nested display of an assembled comment forest. Depth is unbounded; the
/// indentation class is all that distinguishes reply levels.
#[function_component(CommentThread)]
pub fn comment_thread(p: &CommentThreadProps) -> Html {
    if p.nodes.is_empty() {
        return html! {
            <p class="comments-empty">{ "No comments yet. Be the first to comment!" }</p>
        };
    }
    html! {
        <div class="comment-thread">
            { for p.nodes.iter().map(|n| node_html(n, p)) }
        </div>
    }
}

fn node_html(node: &CommentNode, p: &CommentThreadProps) -> Html {
    let reply_button = p.can_reply.then(|| {
        let id = node.record.id.clone();
        html! {
            <button
                type="button"
                class="comment-reply-btn"
                onclick={ p.on_reply.reform(move |_| id.clone()) }
            >
                { "Reply" }
            </button>
        }
    });

    html! {
        <div class="comment">
            <div class="comment-head">
                <strong>{ node.record.author_name() }</strong>
                <span class="comment-date">
                    { node.record.created_at.format("%Y-%m-%d %H:%M").to_string() }
                </span>
            </div>
            <p class="comment-body">{ &node.record.content }</p>
            { for reply_button }
            <div class="comment-replies">
                { for node.replies.iter().map(|n| node_html(n, p)) }
            </div>
        </div>
    }
}
