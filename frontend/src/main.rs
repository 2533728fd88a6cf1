use yew::prelude::*;

mod argument_card;
mod config;
mod content;
mod fact_counter;
mod home;
mod poll_results;
mod poll_section;
mod route_chart;
mod storage;
mod styles;

use crate::{config::CONFIG, home::Home};

#[function_component(Navigation)]
fn navigation() -> Html {
    let link = |href: &'static str, text: &'static str| html! {
        <a {href} class={classes!(
            "text-base", "md:text-lg", "font-medium", "px-4", "py-2", "rounded-md",
            "transition-colors", "duration-200", "ease-in-out",
            "text-gray-200", "border", "border-transparent", "hover:border-blue-400", "hover:text-blue-400"
        )}>
            {text}
        </a>
    };

    html! {
        <nav class="bg-gray-900 shadow-lg fixed top-0 w-full z-50">
            <div class="container mx-auto px-6 py-4 flex justify-center space-x-8">
                {link("#facts", "Facts")}
                {link("#chart", "Service")}
                {link("#arguments", "Why")}
                {link("#poll", "Poll")}
            </div>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="min-h-screen bg-gray-900">
            <Navigation />
            <div class="pt-16">
                <Home />
            </div>
        </div>
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level));
    yew::Renderer::<App>::new().render();
}
