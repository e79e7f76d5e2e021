use crate::context::use_app;
use crate::routes::Route;
use crate::views::{Authorize, Settings};
use beacon_core::Page;
use yew::prelude::*;
use yew_router::prelude::*;

/// Root page: settings for a valid session, the login link otherwise.
///
/// The session is evaluated when the page mounts, so every navigation to `/`
/// re-checks the stored token.
#[function_component(Home)]
pub fn home() -> Html {
    let app = use_app();
    let navigator = use_navigator();
    let view = {
        let session = app.session.clone();
        use_state(move || session.view_for(Page::Home))
    };

    let on_logout = {
        let session = app.session.clone();
        let view = view.clone();
        Callback::from(move |()| {
            let page = session.logout().unwrap_or_else(|e| {
                tracing::error!("Failed to clear session token: {e}");
                Page::Home
            });
            if let Some(navigator) = &navigator {
                navigator.push(&Route::from(page));
            }
            view.set(session.view_for(Page::Home));
        })
    };

    if view.is_authorized() {
        html! { <Settings {on_logout} /> }
    } else {
        html! { <Authorize /> }
    }
}
