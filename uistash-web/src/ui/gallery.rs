use uistash_client::{
    api::{Snippet, SnippetId, CATEGORIES},
    GalleryFilter,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{api, ui};

#[derive(Clone, PartialEq, Properties)]
pub struct GalleryProps {
    pub on_open: Callback<SnippetId>,
}

#[function_component(Gallery)]
pub fn gallery(p: &GalleryProps) -> Html {
    let snippets = use_state(Vec::<Snippet>::new);
    let search = use_state(String::new);
    let category = use_state(|| "all".to_string());
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

    let on_category = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };

    let filter = GalleryFilter {
        search: (*search).clone(),
        category: (*category != "all").then(|| (*category).clone()),
    };
    let visible = filter.apply(&snippets);

    html! {
        <div class="elements-page">
            <h1>{ "All Elements" }</h1>
            <div class="filters">
                <input
                    type="text"
                    placeholder="🔍 Search element..."
                    value={ (*search).clone() }
                    oninput={ on_search }
                />
                <select onchange={ on_category }>
                    <option value="all">{ "All Categories" }</option>
                    { for CATEGORIES.iter().map(|c| html! {
                        <option value={ *c }>{ *c }</option>
                    }) }
                </select>
            </div>
            { for error.as_ref().map(|e| html! { <div class="page-error">{ e }</div> }) }
            <div class="grid">
                { for visible.into_iter().map(|s| html! {
                    <ui::SnippetCard
                        snippet={ s.clone() }
                        on_open={ p.on_open.clone() }
                    />
                }) }
            </div>
        </div>
    }
}
