//! Client-side routes

use beacon_core::{OAuthProvider, Page};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::views::{AuthCallback, Home};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/auth/callback/:provider/")]
    Callback { provider: OAuthProvider },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Self::Home,
            Page::Callback(provider) => Self::Callback { provider },
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Callback { provider } => html! { <AuthCallback {provider} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Route to render for a path the router did not match. `None` means
/// redirect home.
fn fallback_route(path: &str) -> Option<Route> {
    match Page::from_path(path)? {
        Page::Callback(provider) => Some(Route::Callback { provider }),
        Page::Home => None,
    }
}

/// Falls back to the path recogniser before redirecting home, so
/// `/auth/callback/twitch` without the trailing slash still completes login
#[function_component(NotFound)]
fn not_found() -> Html {
    let route = use_location().and_then(|location| fallback_route(location.path()));
    match route {
        Some(Route::Callback { provider }) => html! { <AuthCallback {provider} /> },
        _ => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_match_pages() {
        for page in [Page::Home, Page::Callback(OAuthProvider::Twitch)] {
            assert_eq!(Route::from(page).to_path(), page.path());
        }
    }

    #[test]
    fn test_recognise_home() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }

    #[test]
    fn test_recognise_callback() {
        assert_eq!(
            Route::recognize("/auth/callback/twitch/"),
            Some(Route::Callback {
                provider: OAuthProvider::Twitch
            })
        );
    }

    #[test]
    fn test_callback_without_trailing_slash_falls_back_to_callback() {
        assert_eq!(
            fallback_route("/auth/callback/twitch"),
            Some(Route::Callback {
                provider: OAuthProvider::Twitch
            })
        );
    }

    #[test]
    fn test_unknown_paths_fall_back_home() {
        for path in ["/settings", "/auth/callback/myspace/", "/auth/callback/twitch/x", "/404"] {
            assert_eq!(fallback_route(path), None, "path {path}");
        }
        // Home itself is matched by the router, never by the fallback
        assert_eq!(fallback_route("/"), None);
    }
}
