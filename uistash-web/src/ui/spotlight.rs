use uistash_client::{
    api::{LeaderboardCreator, LeaderboardSnippet, LeaderboardTab, SnippetId},
    compact_number,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{api, ui};

#[derive(Clone, PartialEq, Properties)]
pub struct SpotlightProps {
    pub on_open: Callback<SnippetId>,
}

#[derive(Clone, PartialEq)]
enum Rows {
    Snippets(Vec<LeaderboardSnippet>),
    Creators(Vec<LeaderboardCreator>),
}

fn tab_subtitle(tab: LeaderboardTab) -> &'static str {
    match tab {
        LeaderboardTab::Weekly => "The most appreciated posts this week",
        LeaderboardTab::Creators => "Our most active contributors",
        LeaderboardTab::Favourites => "Creators with the most favorited elements",
        LeaderboardTab::Views => "Creators with the most viewed elements",
    }
}

fn creator_score(tab: LeaderboardTab, u: &LeaderboardCreator) -> String {
    match tab {
        LeaderboardTab::Creators => format!("{} Points", compact_number(u.total_points)),
        LeaderboardTab::Views => format!("{} views", compact_number(u.total_views)),
        LeaderboardTab::Favourites => format!("⭐ {}", compact_number(u.total_favorites)),
        LeaderboardTab::Weekly => String::new(),
    }
}

#[function_component(Spotlight)]
pub fn spotlight(p: &SpotlightProps) -> Html {
    let tab = use_state(|| LeaderboardTab::Weekly);
    let rows = use_state(|| Rows::Snippets(Vec::new()));
    let loading = use_state(|| true);

    {
        let rows = rows.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |tab: &LeaderboardTab| {
                let tab = *tab;
                loading.set(true);
                spawn_local(async move {
                    if tab.is_creator_tab() {
                        match api::fetch_leaderboard_creators(tab).await {
                            Ok(creators) => rows.set(Rows::Creators(creators)),
                            Err(e) => {
                                tracing::error!("failed fetching leaderboard: {e}");
                                rows.set(Rows::Creators(Vec::new()));
                            }
                        }
                    } else {
                        match api::fetch_leaderboard_snippets(tab).await {
                            Ok(snippets) => rows.set(Rows::Snippets(snippets)),
                            Err(e) => {
                                tracing::error!("failed fetching leaderboard: {e}");
                                rows.set(Rows::Snippets(Vec::new()));
                            }
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
            *tab,
        );
    }

    let tabs = [
        (LeaderboardTab::Weekly, "Weekly Highlights"),
        (LeaderboardTab::Creators, "Top Creators"),
        (LeaderboardTab::Favourites, "Most Favorites"),
        (LeaderboardTab::Views, "Most Views"),
    ];

    let content = if *loading {
        let count = match *tab {
            LeaderboardTab::Weekly => 3,
            _ => 16,
        };
        html! {
            <div class="spotlight-grid">
                { for (0..count).map(|_| html! { <div class="spotlight-skeleton"></div> }) }
            </div>
        }
    } else {
        match &*rows {
            Rows::Snippets(items) => html! {
                <div class="spotlight-grid spotlight-grid-weekly">
                    { for items.iter().map(|row| {
                        let open = {
                            let id = row.id.clone();
                            p.on_open.reform(move |_: MouseEvent| id.clone())
                        };
                        html! {
                            <div class="spotlight-card-wrapper">
                                <div class="spotlight-card" onclick={ open }>
                                    <ui::SnippetPreview
                                        markup={ row.source().markup.clone() }
                                        style={ row.source().style.clone() }
                                    />
                                </div>
                                <div class="spotlight-meta">
                                    <strong>{ row.author_name() }</strong>
                                    <div class="spotlight-stats">
                                        <span>{ format!("{} views", compact_number(row.views())) }</span>
                                        <span>{ format!("⭐ {}", compact_number(row.favourites())) }</span>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            },
            Rows::Creators(creators) => html! {
                <div class="spotlight-grid spotlight-grid-creators">
                    { for creators.iter().map(|u| html! {
                        <div class="spotlight-creator-card">
                            <img
                                class="spotlight-creator-avatar"
                                src={ u.avatar.clone() }
                                alt={ format!("{} avatar", u.username) }
                            />
                            <div class="spotlight-creator-info">
                                <strong>{ &u.username }</strong>
                                <div class="spotlight-creator-stats">
                                    <span>{ format!("{} posts", u.posts_count) }</span>
                                    <span>{ creator_score(*tab, u) }</span>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            },
        }
    };

    html! {
        <div class="spotlight">
            <h1 class="spotlight-title">{ "Spotlight" }</h1>
            <p class="spotlight-subtitle-main">
                { "Celebrating our community's finest creators and their work" }
            </p>
            <div class="spotlight-tabs">
                { for tabs.iter().map(|(key, label)| {
                    let key = *key;
                    let active = (*tab == key).then(|| "spotlight-tab-active");
                    let tab = tab.clone();
                    html! {
                        <button
                            type="button"
                            class={ classes!("spotlight-tab", active) }
                            onclick={ Callback::from(move |_| tab.set(key)) }
                        >
                            { *label }
                        </button>
                    }
                }) }
            </div>
            <p class="spotlight-subtitle">{ tab_subtitle(*tab) }</p>
            { content }
        </div>
    }
}
