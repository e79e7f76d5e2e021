use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ErrorNoticeProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ErrorNotice)]
pub fn error_notice(props: &ErrorNoticeProps) -> Html {
    html! {
        <div role="alert" class="max-w-md p-4 rounded-lg bg-red-50 border border-red-200 text-red-700 text-sm">
            <p class="m-0">{props.message.clone()}</p>
            {props.children.clone()}
        </div>
    }
}
