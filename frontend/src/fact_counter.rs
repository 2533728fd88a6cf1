use yew::prelude::*;
use gloo_timers::callback::Interval;
use shared::animation::CounterAnimation;
use crate::config::CONFIG;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub target: u32,
    pub label: AttrValue,
}

pub enum Msg {
    Tick,
}

pub struct FactCounter {
    animation: CounterAnimation,
    text: String,
    interval: Option<Interval>,
}

impl Component for FactCounter {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let step_ms = CounterAnimation::step_interval_ms(CONFIG.counter_duration_ms, CONFIG.counter_steps);
        let interval = Interval::new(step_ms, move || link.send_message(Msg::Tick));

        Self {
            animation: CounterAnimation::with_steps(f64::from(ctx.props().target), CONFIG.counter_steps),
            text: "0".to_string(),
            interval: Some(interval),
        }
    }

    fn update(&mut self, _: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Tick => {
                self.text = self.animation.tick();
                if self.animation.is_done() {
                    self.interval = None;
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class={combine_classes(CARD_SECTION, "text-center")}>
                <div class="text-3xl font-extrabold text-blue-400">{&self.text}</div>
                <div class={TEXT_MUTED}>{&ctx.props().label}</div>
            </div>
        }
    }
}
