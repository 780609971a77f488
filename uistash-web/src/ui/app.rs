use uistash_client::api::{AuthToken, SnippetId, UserProfile};
use yew::prelude::*;

use crate::{
    api,
    session::{Role, Session},
    ui, util,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Home,
    Gallery,
    Detail(SnippetId),
    Submit,
    Profile,
    Favourites,
    Spotlight,
    Review,
}

pub enum AppMsg {
    Navigate(Page),
    OpenLogin,
    CloseLogin,
    Logout,
    ProfileLoaded(Box<UserProfile>),
    ProfileFailed { unauthorized: bool },
}

pub struct App {
    page: Page,
    session: Option<Session>,
    profile: Option<UserProfile>,
    show_login: bool,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        // The auth redirect lands on "/?token=...&role=admin": persist the
        // session and reload onto a clean URL before anything else runs.
        if let Some(location) = web_sys::window().map(|w| w.location()) {
            if let Ok(search) = location.search() {
                if let Some(token) = util::query_param(&search, "token") {
                    let role = match util::query_param(&search, "role").as_deref() {
                        Some("admin") => Role::Admin,
                        _ => Role::User,
                    };
                    Session::new(AuthToken(token), role).store();
                    if let Err(e) = location.replace("/") {
                        tracing::error!(?e, "failed clearing auth redirect query");
                    }
                }
            }
        }

        let session = Session::load();
        if let Some(session) = session.clone() {
            ctx.link().send_future(async move {
                match api::fetch_profile(&session).await {
                    Ok(profile) => AppMsg::ProfileLoaded(Box::new(profile)),
                    Err(e) => {
                        let unauthorized = matches!(
                            &e,
                            api::FetchError::Api(api_err) if api_err.is_unauthorized()
                        );
                        tracing::warn!("failed fetching profile: {e}");
                        AppMsg::ProfileFailed { unauthorized }
                    }
                }
            });
        }

        App {
            page: Page::Home,
            session,
            profile: None,
            show_login: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Navigate(page) => {
                let needs_session = matches!(
                    page,
                    Page::Submit | Page::Profile | Page::Favourites
                );
                if needs_session && self.session.is_none() {
                    self.show_login = true;
                    return true;
                }
                if matches!(page, Page::Review)
                    && !self.session.as_ref().is_some_and(Session::is_admin)
                {
                    tracing::warn!("review page requires an admin session");
                    self.page = Page::Home;
                    return true;
                }
                self.page = page;
            }
            AppMsg::OpenLogin => self.show_login = true,
            AppMsg::CloseLogin => self.show_login = false,
            AppMsg::Logout => {
                Session::clear();
                self.session = None;
                self.profile = None;
                self.page = Page::Home;
            }
            AppMsg::ProfileLoaded(profile) => {
                if let Some(session) = &mut self.session {
                    if session.account_id != profile.id {
                        session.account_id = profile.id.clone();
                        session.store();
                    }
                }
                self.profile = Some(*profile);
            }
            AppMsg::ProfileFailed { unauthorized } => {
                // An invalid token would poison every authorized call;
                // drop the stored session and fall back to browsing.
                if unauthorized {
                    Session::clear();
                    self.session = None;
                    self.profile = None;
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_open = ctx
            .link()
            .callback(|id: SnippetId| AppMsg::Navigate(Page::Detail(id)));
        let to_gallery = ctx.link().callback(|_| AppMsg::Navigate(Page::Gallery));

        let page = match &self.page {
            Page::Home => html! { <ui::Home on_open={ on_open.clone() } /> },
            Page::Gallery => html! { <ui::Gallery on_open={ on_open.clone() } /> },
            Page::Spotlight => html! { <ui::Spotlight on_open={ on_open.clone() } /> },
            Page::Detail(id) => html! {
                <ui::Detail
                    id={ id.clone() }
                    session={ self.session.clone() }
                    on_back={ to_gallery.clone() }
                />
            },
            Page::Submit => match self.session.clone() {
                Some(session) => html! {
                    <ui::Editor
                        session={ session }
                        on_done={ to_gallery.clone() }
                        on_back={ to_gallery.clone() }
                    />
                },
                None => html! { <ui::Home on_open={ on_open.clone() } /> },
            },
            Page::Profile => match self.session.clone() {
                Some(session) => html! {
                    <ui::Profile
                        session={ session }
                        on_open={ on_open.clone() }
                        on_create={ ctx.link().callback(|_| AppMsg::Navigate(Page::Submit)) }
                    />
                },
                None => html! { <ui::Home on_open={ on_open.clone() } /> },
            },
            Page::Favourites => match self.session.clone() {
                Some(session) => html! {
                    <ui::Favourites session={ session } on_open={ on_open.clone() } />
                },
                None => html! { <ui::Home on_open={ on_open.clone() } /> },
            },
            Page::Review => match self.session.clone() {
                Some(session) => html! {
                    <ui::Review session={ session } on_open={ on_open.clone() } />
                },
                None => html! { <ui::Home on_open={ on_open.clone() } /> },
            },
        };

        let login_modal = self.show_login.then(|| {
            html! {
                <ui::LoginModal on_close={ ctx.link().callback(|_| AppMsg::CloseLogin) } />
            }
        });

        html! {
            <>
                <ui::Navbar
                    logged_in={ self.session.is_some() }
                    is_admin={ self.session.as_ref().is_some_and(Session::is_admin) }
                    profile={ self.profile.clone() }
                    on_navigate={ ctx.link().callback(AppMsg::Navigate) }
                    on_login={ ctx.link().callback(|_| AppMsg::OpenLogin) }
                    on_logout={ ctx.link().callback(|_| AppMsg::Logout) }
                />
                <main class="page">
                    { page }
                </main>
                { for login_modal }
            </>
        }
    }
}
