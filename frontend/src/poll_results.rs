use yew::prelude::*;
use shared::models::{OptionResult, PollResults, VoterRow};
use crate::styles::*;

pub fn render_results_view(results: &PollResults) -> Html {
    html! {
        <div class="mt-8">
            <h3 class={HEADING_SM}>{"Results on this device"}</h3>
            <p class={combine_classes(TEXT_MUTED, "mb-4")}>
                {format!("{} vote(s) counted", results.total)}
            </p>
            <div class={SPACE_Y_BASE}>
                {for results.options.iter().map(render_option_bar)}
            </div>
            {render_voter_table(&results.voters)}
        </div>
    }
}

fn render_option_bar(option: &OptionResult) -> Html {
    html! {
        <div>
            <div class="flex justify-between text-gray-200 mb-1">
                <span>{option.label}</span>
                <span class="font-semibold" title={option.votes_title()}>{option.width()}</span>
            </div>
            <div class={BAR_TRACK}>
                <div class={BAR_FILL} style={format!("width: {}", option.width())} />
            </div>
        </div>
    }
}

fn render_voter_table(voters: &[VoterRow]) -> Html {
    html! {
        <div class="mt-6 rounded-lg border border-gray-600 overflow-x-auto">
            <table class="w-full text-sm">
                <thead class="bg-gray-700/50">
                    <tr>
                        <th class={TABLE_CELL}>{"Name"}</th>
                        <th class={TABLE_CELL}>{"Email"}</th>
                        <th class={TABLE_CELL}>{"Choice"}</th>
                        <th class={TABLE_CELL}>{"Time"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for voters.iter().map(|row| html! {
                        <tr class="hover:bg-gray-700/30">
                            <td class={TABLE_CELL}>{&row.name}</td>
                            <td class={TABLE_CELL}>{&row.email}</td>
                            <td class={TABLE_CELL}>{&row.choice_label}</td>
                            <td class={combine_classes(TABLE_CELL, "font-mono text-xs")}>{&row.cast_at}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
