use uistash_client::api::{Snippet, SnippetId};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{api, session::Session, ui};

#[derive(Clone, PartialEq, Properties)]
pub struct FavouritesProps {
    pub session: Session,
    pub on_open: Callback<SnippetId>,
}

#[function_component(Favourites)]
pub fn favourites(p: &FavouritesProps) -> Html {
    let list = use_state(Vec::<Snippet>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let list = list.clone();
        let loading = loading.clone();
        let error = error.clone();
        let session = p.session.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::fetch_favourites(&session).await {
                        Ok(favs) => list.set(favs),
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
        return html! { <div class="page-status">{ "Loading favourites..." }</div> };
    }
    if let Some(e) = error.as_ref() {
        return html! { <div class="page-error">{ e }</div> };
    }

    let content = if list.is_empty() {
        html! {
            <div class="empty-state">
                <p>{ "You haven't added any favourites yet." }</p>
            </div>
        }
    } else {
        html! {
            <div class="grid">
                { for list.iter().map(|s| html! {
                    <ui::SnippetCard
                        snippet={ s.clone() }
                        on_open={ p.on_open.clone() }
                    />
                }) }
            </div>
        }
    };

    html! {
        <div class="favourites-page">
            <h1>{ "My Favorites" }</h1>
            { content }
        </div>
    }
}
