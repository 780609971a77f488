use yew::prelude::*;

use crate::api;

#[derive(Clone, PartialEq, Properties)]
pub struct LoginModalProps {
    pub on_close: Callback<()>,
}

/// The backend owns the OAuth flows; this modal only forwards the browser
/// to the provider endpoint. The redirect lands back with `?token=`.
#[function_component(LoginModal)]
pub fn login_modal(p: &LoginModalProps) -> Html {
    let provider_login = |provider: &'static str| {
        Callback::from(move |_| {
            let url = format!("{}/auth/{provider}", api::api_host());
            if let Some(location) = web_sys::window().map(|w| w.location()) {
                if let Err(e) = location.set_href(&url) {
                    tracing::error!(?e, "failed navigating to auth provider");
                }
            }
        })
    };

    html! {
        <div class="popup-overlay">
            <div class="login-modal">
                <button
                    type="button"
                    class="login-modal-close"
                    onclick={ p.on_close.reform(|_| ()) }
                >
                    { "×" }
                </button>
                <h2>{ "Join the Community" }</h2>
                <p>{ "Create beautiful UI elements and share them with developers" }</p>
                <div class="login-modal-buttons">
                    <button type="button" class="login-github" onclick={ provider_login("github") }>
                        { "Continue with GitHub" }
                    </button>
                    <button type="button" class="login-google" onclick={ provider_login("google") }>
                        { "Continue with Google" }
                    </button>
                </div>
                <p class="login-modal-footer">
                    { "By continuing, you agree to our Terms and Privacy Policy" }
                </p>
            </div>
        </div>
    }
}
