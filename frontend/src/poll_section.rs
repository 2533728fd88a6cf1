use web_sys::HtmlInputElement;
use yew::prelude::*;
use shared::{JsonVoteStore, PollController, PollMessage, PollOption, PollResults, SubmitForm};
use crate::config::CONFIG;
use crate::poll_results::render_results_view;
use crate::storage::LocalStorageSlot;
use crate::styles::*;

type Controller = PollController<JsonVoteStore<LocalStorageSlot>>;

fn controller() -> Controller {
    PollController::new(JsonVoteStore::with_key(LocalStorageSlot::new(), CONFIG.storage_key))
}

fn confirm_reset() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(CONFIG.reset_prompt).ok())
        .unwrap_or(false)
}

pub enum Msg {
    UpdateName(String),
    UpdateEmail(String),
    SelectOption(String),
    Submit,
    Reset,
}

pub struct PollSection {
    form: SubmitForm,
    message: Option<PollMessage>,
    results: PollResults,
}

impl Component for PollSection {
    type Message = Msg;
    type Properties = ();

    fn create(_: &Context<Self>) -> Self {
        Self {
            form: SubmitForm::default(),
            message: None,
            results: controller().results(),
        }
    }

    fn update(&mut self, _: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateName(value) => self.form.name = value,
            Msg::UpdateEmail(value) => self.form.email = value,
            Msg::SelectOption(value) => self.form.choice = value,
            Msg::Submit => {
                let poll = controller();
                let outcome = poll.submit(&self.form);
                self.message = Some(PollMessage::from(&outcome));
                if outcome.is_ok() {
                    self.results = poll.results();
                    self.form = SubmitForm::default();
                }
            }
            Msg::Reset => {
                let poll = controller();
                if poll.reset(confirm_reset()) {
                    self.results = poll.results();
                    self.message = Some(PollMessage::cleared());
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section id="poll" class={SECTION}>
                <h2 class={HEADING_MD}>{"What should weekend service improve first?"}</h2>
                {self.render_form(ctx)}
                {self.render_message()}
                {render_results_view(&self.results)}
                <div class="mt-6 flex justify-end">
                    <button type="button" class={button_danger()}
                        onclick={ctx.link().callback(|_| Msg::Reset)}>
                        {"Reset votes (demo)"}
                    </button>
                </div>
            </section>
        }
    }
}

impl PollSection {
    fn render_form(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <form {onsubmit} class={SPACE_Y_LG}>
                <div class="flex flex-col md:flex-row gap-4">
                    {self.render_input(ctx, "Name", "text", &self.form.name, Msg::UpdateName)}
                    {self.render_input(ctx, "ISU email", "email", &self.form.email, Msg::UpdateEmail)}
                </div>
                <fieldset class={SPACE_Y_BASE}>
                    <legend class={TEXT_LABEL}>{"Pick one"}</legend>
                    {for PollOption::ALL.iter().map(|option| self.render_option(ctx, *option))}
                </fieldset>
                <button type="submit" class={button_primary()}>{"Submit vote"}</button>
            </form>
        }
    }

    fn render_input(
        &self,
        ctx: &Context<Self>,
        label: &'static str,
        kind: &'static str,
        value: &str,
        to_msg: fn(String) -> Msg,
    ) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            to_msg(input.value())
        });

        html! {
            <div class={INPUT_GROUP}>
                <label class={TEXT_LABEL}>{label}</label>
                <input type={kind} class={INPUT_BASE} value={value.to_string()} {oninput}
                    placeholder={format!("Enter {}", label.to_lowercase())} />
            </div>
        }
    }

    fn render_option(&self, ctx: &Context<Self>, option: PollOption) -> Html {
        let onchange = ctx.link().callback(move |_: Event| Msg::SelectOption(option.key().to_string()));

        html! {
            <label class="flex items-center gap-3 text-gray-200 cursor-pointer">
                <input type="radio" name="voteOption" value={option.key()}
                    checked={self.form.choice == option.key()} {onchange} />
                <span>{option.label()}</span>
            </label>
        }
    }

    fn render_message(&self) -> Html {
        match &self.message {
            Some(message) => {
                let style = if message.is_error { "error" } else { "success" };
                html! { <div class={alert_style(style)}>{&message.text}</div> }
            }
            None => html! {},
        }
    }
}
