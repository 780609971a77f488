use uistash_client::{
    api::{Snippet, SnippetId},
    GalleryFilter,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{api, ui};

#[derive(Clone, PartialEq, Properties)]
pub struct HomeProps {
    pub on_open: Callback<SnippetId>,
}

#[function_component(Home)]
pub fn home(p: &HomeProps) -> Html {
    let snippets = use_state(Vec::<Snippet>::new);
    let search = use_state(String::new);
    let error = use_state(|| None::<String>);

    {
        let snippets = snippets.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::fetch_snippets().await {
                        Ok(list) => snippets.set(list),
                        Err(e) => error.set(Some(e.to_string())),
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let filter = GalleryFilter {
        search: (*search).clone(),
        category: None,
    };
    let visible = filter.apply(&snippets);

    html! {
        <div class="home">
            <section class="hero">
                <h1 class="hero-title">{ "The Largest Library of Open-Source UI" }</h1>
                <p class="hero-subtitle">
                    { "Community-built library of UI elements. Copy as HTML/CSS, React, Vue, Svelte and Lit." }
                </p>
                <div class="hero-search">
                    <input
                        type="text"
                        placeholder="Search for components, styles, creators..."
                        value={ (*search).clone() }
                        oninput={ on_search }
                    />
                </div>
            </section>
            { for error.as_ref().map(|e| html! { <div class="page-error">{ e }</div> }) }
            <div class="grid">
                { for visible.into_iter().map(|s| html! {
                    <ui::SnippetCard
                        snippet={ s.clone() }
                        on_open={ p.on_open.clone() }
                        show_meta={ false }
                    />
                }) }
            </div>
        </div>
    }
}
