use crate::components::{ErrorNotice, Spinner};
use crate::context::{use_app, use_session};
use beacon_core::SettingsField;
use beacon_http::{SessionError, Streamer};
use chrono::{DateTime, Local};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SettingsProps {
    pub on_logout: Callback<()>,
}

/// Settings screen for a logged-in user
#[function_component(Settings)]
pub fn settings(props: &SettingsProps) -> Html {
    let app = use_app();
    let session = app.session.current_session();

    let signed_in_as = session
        .as_ref()
        .and_then(|token| token.subject().map(str::to_string));
    let expires = session
        .as_ref()
        .and_then(|token| DateTime::from_timestamp(token.expires_at(), 0))
        .map(|at| at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string());

    let on_logout = props.on_logout.reform(|_: MouseEvent| ());

    html! {
        <div class="settings__container">
            <div class="settings__header flex justify-between items-center">
                <h1 class="text-xl font-bold">{app.config.branding.title.clone()}</h1>
                <button onclick={on_logout}>{"Logout"}</button>
            </div>
            <div class="settings__session text-sm text-gray-500">
                if let Some(subject) = signed_in_as {
                    <p>{format!("Signed in as user {subject}")}</p>
                }
                if let Some(expires) = expires {
                    <p>{format!("Session valid until {expires}")}</p>
                }
            </div>
            if app.config.show_streamers {
                <StreamerList on_signed_out={props.on_logout.clone()} />
            }
            if !app.config.settings_fields.is_empty() {
                <form class="settings__fields" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                    {for app.config.settings_fields.iter().map(|field| html! {
                        <SettingsFieldInput key={field.key.clone()} field={field.clone()} />
                    })}
                </form>
            }
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct SettingsFieldInputProps {
    field: SettingsField,
}

/// Text input persisted on every change
#[function_component(SettingsFieldInput)]
fn settings_field_input(props: &SettingsFieldInputProps) -> Html {
    let session = use_session();
    let value = {
        let settings = session.settings();
        let field = props.field.clone();
        use_state(move || {
            settings.get(&field).unwrap_or_else(|e| {
                tracing::warn!(key = %field.key, "Failed to read setting: {e}");
                None
            })
        })
    };

    let on_input = {
        let settings = session.settings();
        let field = props.field.clone();
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let new_value = input.value();
            if let Err(e) = settings.set(&field, &new_value) {
                tracing::warn!(key = %field.key, "Failed to save setting: {e}");
            }
            value.set(Some(new_value).filter(|v| !v.is_empty()));
        })
    };

    let id = format!("setting-{}", props.field.key);

    html! {
        <div class="settings__field mb-4">
            <label for={id.clone()} class="block text-sm font-medium mb-1">{props.field.label.clone()}</label>
            <input
                id={id}
                type="text"
                class="w-full px-3 py-2 border rounded-md"
                placeholder={props.field.placeholder.clone()}
                value={(*value).clone().unwrap_or_default()}
                oninput={on_input}
            />
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct StreamerListProps {
    on_signed_out: Callback<()>,
}

#[derive(Clone, PartialEq)]
enum StreamersState {
    Loading,
    Loaded(Vec<Streamer>),
    Failed(String),
}

/// Streamers linked to the signed-in account, fetched once on mount
#[function_component(StreamerList)]
fn streamer_list(props: &StreamerListProps) -> Html {
    let session = use_session();
    let state = use_state(|| StreamersState::Loading);

    {
        let state = state.clone();
        let on_signed_out = props.on_signed_out.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match session.streamers().await {
                    Ok(streamers) => state.set(StreamersState::Loaded(streamers)),
                    Err(SessionError::SignedOut) => on_signed_out.emit(()),
                    Err(SessionError::Client(e)) if e.is_unauthorized() => {
                        tracing::warn!("Session refused while listing streamers: {e}");
                        on_signed_out.emit(());
                    }
                    Err(e) => {
                        tracing::warn!("Failed to list streamers: {e}");
                        state.set(StreamersState::Failed(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let content = match &*state {
        StreamersState::Loading => html! { <Spinner text={"Loading streamers..."} /> },
        StreamersState::Failed(message) => html! { <ErrorNotice message={message.clone()} /> },
        StreamersState::Loaded(streamers) if streamers.is_empty() => html! {
            <p class="text-sm text-gray-500">{"No streamer is linked to this account yet."}</p>
        },
        StreamersState::Loaded(streamers) => html! {
            <ul class="settings__streamers_list">
                {for streamers.iter().map(|streamer| html! {
                    <li key={streamer.twitch.id.to_string()}>
                        <a href={format!("https://twitch.tv/{}", streamer.twitch.name)} class="underline">
                            {streamer.twitch.name.clone()}
                        </a>
                    </li>
                })}
            </ul>
        },
    };

    html! {
        <section class="settings__streamers mb-4">
            <h2 class="text-lg font-semibold mb-2">{"Streamers"}</h2>
            {content}
        </section>
    }
}
