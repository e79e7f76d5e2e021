use crate::components::ErrorNotice;
use crate::context::AppContext;
use crate::routes::{switch, Route};
use beacon_core::AppConfig;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BeaconAppProps {
    pub config: AppConfig,
}

#[function_component(BeaconApp)]
pub fn beacon_app(props: &BeaconAppProps) -> Html {
    let context = use_memo(props.config.clone(), |config| AppContext::new(config.clone()));

    match &*context {
        Ok(context) => html! {
            <ContextProvider<AppContext> context={context.clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<AppContext>>
        },
        Err(e) => {
            tracing::error!("Failed to initialise session: {e}");
            html! {
                <div class="flex__container__center">
                    <ErrorNotice message={e.to_string()} />
                </div>
            }
        }
    }
}
