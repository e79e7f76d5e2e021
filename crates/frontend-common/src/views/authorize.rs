use crate::components::{ErrorNotice, Spinner};
use crate::context::use_app;
use beacon_core::AuthorizeState;
use yew::prelude::*;

/// Login screen. Requests the provider consent URL once on mount; there is
/// no retry, a failure is shown as is.
#[function_component(Authorize)]
pub fn authorize() -> Html {
    let app = use_app();
    let state = use_state(AuthorizeState::default);

    {
        let session = app.session.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = session.authorization_url().await;
                if let Err(e) = &result {
                    tracing::warn!("Failed to fetch authorization URL: {e}");
                }
                state.set(AuthorizeState::from_result(result));
            });
            || ()
        });
    }

    let branding = &app.config.branding;
    let provider = app.session.provider();

    html! {
        <div class="flex__container__center">
            <div class="authorize__container text-center">
                <h1 class="text-3xl font-bold mb-2">{branding.title.clone()}</h1>
                if let Some(tagline) = &branding.tagline {
                    <p class="text-gray-500 mb-8">{tagline.clone()}</p>
                }
                {match &*state {
                    AuthorizeState::Loading => html! { <Spinner /> },
                    AuthorizeState::Ready { authorization_url } => html! {
                        <a href={authorization_url.clone()} class="authorize__login_btn">
                            {format!("Login with {}", provider.display_name())}
                        </a>
                    },
                    AuthorizeState::Failed { message } => html! {
                        <ErrorNotice message={format!("Login is unavailable right now: {message}")} />
                    },
                }}
            </div>
        </div>
    }
}
