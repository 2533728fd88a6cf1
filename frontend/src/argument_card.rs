use yew::prelude::*;
use shared::animation::toggle_label;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub summary: AttrValue,
    pub details: AttrValue,
}

#[function_component(ArgumentCard)]
pub fn argument_card(props: &Props) -> Html {
    let open = use_state(|| false);
    let onclick = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };

    html! {
        <div class={CARD_SECTION}>
            <h3 class={HEADING_SM}>{&props.title}</h3>
            <p class="text-gray-300">{&props.summary}</p>
            <button type="button" class={BUTTON_LINK} {onclick}>{toggle_label(*open)}</button>
            {if *open {
                html! { <p class={combine_classes(TEXT_MUTED, "mt-2")}>{&props.details}</p> }
            } else { html! {} }}
        </div>
    }
}
