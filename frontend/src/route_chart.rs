use yew::prelude::*;
use gloo_timers::callback::Timeout;
use shared::animation::chart_fill_percents;
use crate::content::ChartRow;
use crate::config::CONFIG;
use crate::styles::*;

#[derive(Properties)]
pub struct Props {
    pub rows: &'static [ChartRow],
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.rows, other.rows)
    }
}

pub enum Msg {
    Fill,
}

/// Bars start empty and widen on the next frame so the CSS transition runs.
pub struct RouteChart {
    fills: Vec<Option<f64>>,
    filled: bool,
    _timeout: Timeout,
}

impl Component for RouteChart {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let labels: Vec<&str> = ctx.props().rows.iter().map(|row| row.value).collect();
        let link = ctx.link().clone();
        Self {
            fills: chart_fill_percents(&labels),
            filled: false,
            _timeout: Timeout::new(CONFIG.chart_fill_delay_ms, move || link.send_message(Msg::Fill)),
        }
    }

    fn update(&mut self, _: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fill => {
                self.filled = true;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class={SPACE_Y_BASE}>
                {for ctx.props().rows.iter().zip(&self.fills).map(|(row, fill)| html! {
                    <div class="grid grid-cols-4 gap-3 items-center">
                        <div class="text-gray-200 font-medium">{row.day}</div>
                        <div class={combine_classes(BAR_TRACK, "col-span-2")}>
                            {match fill {
                                Some(percent) => {
                                    let width = if self.filled { *percent } else { 0.0 };
                                    html! { <div class={BAR_FILL} style={format!("width: {}%", width)} /> }
                                }
                                None => html! {},
                            }}
                        </div>
                        <div class={TEXT_MUTED}>{row.value}</div>
                    </div>
                })}
            </div>
        }
    }
}
