use uistash_client::api::UserProfile;
use yew::prelude::*;

use crate::ui::Page;

#[derive(Clone, PartialEq, Properties)]
pub struct NavbarProps {
    pub logged_in: bool,
    pub is_admin: bool,
    pub profile: Option<UserProfile>,
    pub on_navigate: Callback<Page>,
    pub on_login: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(p: &NavbarProps) -> Html {
    let dropdown_open = use_state(|| false);

    let nav = |page: Page| p.on_navigate.reform(move |_: MouseEvent| page.clone());

    let on_create = match p.logged_in {
        true => nav(Page::Submit),
        false => p.on_login.reform(|_| ()),
    };

    let admin_link = p.is_admin.then(|| {
        html! {
            <button type="button" class="nav-link" onclick={ nav(Page::Review) }>
                { "Review" }
            </button>
        }
    });

    let account = match p.logged_in {
        false => html! {
            <button type="button" class="nav-login" onclick={ p.on_login.reform(|_| ()) }>
                { "Sign in" }
            </button>
        },
        true => {
            let avatar = p
                .profile
                .as_ref()
                .map(|profile| profile.avatar_url())
                .unwrap_or_else(|| "/default-avatar.png".to_string());
            let toggle = {
                let dropdown_open = dropdown_open.clone();
                Callback::from(move |_| dropdown_open.set(!*dropdown_open))
            };
            let menu = dropdown_open.then(|| {
                let close_then = |cb: Callback<MouseEvent>| {
                    let dropdown_open = dropdown_open.clone();
                    cb.reform(move |e| {
                        dropdown_open.set(false);
                        e
                    })
                };
                html! {
                    <div class="nav-dropdown">
                        <button type="button" onclick={ close_then(nav(Page::Profile)) }>
                            { "Profile" }
                        </button>
                        <button type="button" onclick={ close_then(nav(Page::Favourites)) }>
                            { "My Favorites" }
                        </button>
                        <button type="button" onclick={ close_then(p.on_logout.reform(|_| ())) }>
                            { "Log out" }
                        </button>
                    </div>
                }
            });
            html! {
                <div class="nav-account">
                    <img class="nav-avatar" src={ avatar } alt="profile" onclick={ toggle } />
                    { for menu }
                </div>
            }
        }
    };

    html! {
        <nav class="navbar">
            <button type="button" class="nav-brand" onclick={ nav(Page::Home) }>
                { "uistash" }
            </button>
            <div class="nav-links">
                <button type="button" class="nav-link" onclick={ nav(Page::Gallery) }>
                    { "Elements" }
                </button>
                <button type="button" class="nav-link" onclick={ nav(Page::Spotlight) }>
                    { "Spotlight" }
                </button>
                { for admin_link }
            </div>
            <div class="nav-actions">
                <button type="button" class="nav-create" onclick={ on_create }>
                    { "＋ Create" }
                </button>
                { account }
            </div>
        </nav>
    }
}
