use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use crate::{
    argument_card::ArgumentCard,
    content::{ARGUMENTS, CHART_ROWS, FACTS},
    fact_counter::FactCounter,
    poll_section::PollSection,
    route_chart::RouteChart,
    styles::*,
};

fn scroll_to_poll() {
    let Some(poll) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("poll"))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    poll.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component]
pub fn Home() -> Html {
    let onclick = Callback::from(|_: MouseEvent| scroll_to_poll());

    html! {
        <div class={CONTAINER}>
            <header class="text-center mb-10">
                <h1 class={combine_classes(HEADING_LG, "text-white")}>{"Better CyRide Weekends"}</h1>
                <p class="text-gray-300 mb-6">
                    {"Weekend bus service in Ames runs fewer routes, stops earlier and comes less often. 
                    Tell us what would help you most."}
                </p>
                <button type="button" class={button_primary()} {onclick}>{"Vote now"}</button>
            </header>

            <section id="facts" class={SECTION}>
                <h2 class={HEADING_MD}>{"By the numbers"}</h2>
                <div class={GRID_FACTS}>
                    {for FACTS.iter().map(|fact| html! {
                        <FactCounter target={fact.target} label={fact.label} />
                    })}
                </div>
            </section>

            <section id="chart" class={SECTION}>
                <h2 class={HEADING_MD}>{"Routes running by day"}</h2>
                <RouteChart rows={CHART_ROWS} />
            </section>

            <section id="arguments" class={SECTION}>
                <h2 class={HEADING_MD}>{"Why it matters"}</h2>
                <div class="grid gap-4 md:grid-cols-3">
                    {for ARGUMENTS.iter().map(|arg| html! {
                        <ArgumentCard title={arg.title} summary={arg.summary} details={arg.details} />
                    })}
                </div>
            </section>

            <PollSection />
        </div>
    }
}
