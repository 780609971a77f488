use uistash_client::{
    api::{Snippet, SnippetId},
    compact_number,
};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct SnippetCardProps {
    pub snippet: Snippet,
    pub on_open: Callback<SnippetId>,
    #[prop_or(true)]
    pub show_meta: bool,
}

#[function_component(SnippetCard)]
pub fn snippet_card(p: &SnippetCardProps) -> Html {
    let open = {
        let id = p.snippet.id.clone();
        p.on_open.reform(move |_: MouseEvent| id.clone())
    };

    let meta = p.show_meta.then(|| {
        html! {
            <div class="card-meta">
                <strong class="card-author">{ p.snippet.author_name() }</strong>
                <div class="card-stats">
                    <span>{ format!("{} views", compact_number(p.snippet.views_count)) }</span>
                    <span>{ format!("⭐ {}", compact_number(p.snippet.favourites_count)) }</span>
                </div>
            </div>
        }
    });

    html! {
        <div class="card-wrapper">
            <div class="card" onclick={ open }>
                <ui::SnippetPreview
                    markup={ p.snippet.source.markup.clone() }
                    style={ p.snippet.source.style.clone() }
                />
            </div>
            { for meta }
        </div>
    }
}
