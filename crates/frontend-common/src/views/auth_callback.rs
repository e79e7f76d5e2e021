use crate::components::{ErrorNotice, Spinner};
use crate::context::use_app;
use crate::routes::Route;
use beacon_core::{CallbackState, OAuthProvider};
use beacon_http::SessionError;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AuthCallbackProps {
    pub provider: OAuthProvider,
}

/// Landing page of the provider redirect.
///
/// Forwards the query string to the API, stores the returned token and
/// navigates home.
#[function_component(AuthCallback)]
pub fn auth_callback(props: &AuthCallbackProps) -> Html {
    let app = use_app();
    let navigator = use_navigator();
    let query = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();
    let state = use_state(CallbackState::default);

    {
        let session = app.session.clone();
        let state = state.clone();
        use_effect_with(props.provider, move |provider| {
            let provider = *provider;
            wasm_bindgen_futures::spawn_local(async move {
                if provider != session.provider() {
                    state.set(CallbackState::Failed {
                        message: format!("{} login is not enabled", provider.display_name()),
                    });
                    return;
                }

                let result = session.complete_callback(&query).await;
                match &result {
                    Err(SessionError::Client(e)) if e.is_rejection() => {
                        tracing::warn!(%provider, "Provider login rejected: {e}");
                    }
                    Err(e) => tracing::error!(%provider, "Callback exchange failed: {e}"),
                    Ok(_) => {}
                }

                let next = CallbackState::from_result(result);
                state.set(next.clone());
                if let CallbackState::Completed { redirect_to } = next {
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::from(redirect_to));
                    }
                }
            });
            || ()
        });
    }

    html! {
        <div class="flex__container__center">
            {match &*state {
                CallbackState::Failed { message } => html! {
                    <ErrorNotice message={message.clone()}>
                        <Link<Route> to={Route::Home} classes="underline">{"Back to login"}</Link<Route>>
                    </ErrorNotice>
                },
                _ => html! { <Spinner text={"Signing you in..."} /> },
            }}
        </div>
    }
}
