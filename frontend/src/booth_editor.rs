use shared::{format::format_count, parse_slot_input, Booth, SlotVotes, TimeSlot};
use shared::slots::SLOT_COUNT;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub booth: Booth,
    /// Commits the edit; an `Err` keeps the editor open with its message.
    pub on_save: Callback<Booth, shared::Result<()>>,
    pub on_close: Callback<()>,
}

pub enum Msg {
    Update(TimeSlot, String),
    Save,
    Cancel,
}

pub struct BoothEditor {
    inputs: [String; SLOT_COUNT],
    error: Option<String>,
}

impl Component for BoothEditor {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let votes = ctx.props().booth.votes;
        Self {
            inputs: TimeSlot::ALL.map(|slot| votes.get(slot).map(|v| v.to_string()).unwrap_or_default()),
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Update(slot, value) => {
                self.inputs[slot.index()] = value;
                self.error = None;
                true
            }
            Msg::Save => {
                let booth = match self.proposed(&ctx.props().booth) {
                    Ok(booth) => booth,
                    Err(e) => {
                        self.error = Some(e);
                        return true;
                    }
                };
                match ctx.props().on_save.emit(booth) {
                    Ok(()) => {
                        ctx.props().on_close.emit(());
                        false
                    }
                    Err(e) => {
                        self.error = Some(e.message);
                        true
                    }
                }
            }
            Msg::Cancel => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let booth = &ctx.props().booth;
        html! {
            <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
                <div class="bg-white rounded-2xl p-8 max-w-2xl w-full mx-4 max-h-[90vh] overflow-y-auto">
                    <div class="flex justify-between items-center mb-6">
                        <h2 class="text-2xl font-bold text-gray-900">{"Update Booth Data"}</h2>
                        <button onclick={ctx.link().callback(|_| Msg::Cancel)} class="text-gray-500 hover:text-gray-700 text-2xl">
                            {"×"}
                        </button>
                    </div>

                    <div class="mb-6">
                        <h3 class={HEADING_SM}>{&booth.name}</h3>
                        <p class="text-gray-600">{format!("Booth ID: {}", booth.id)}</p>
                        <p class="text-gray-600">{format!("Total Voters: {}", format_count(booth.total_voters.into()))}</p>
                    </div>

                    {if let Some(error) = &self.error {
                        html! { <div class={alert_style("error")}>{error}</div> }
                    } else { html! {} }}

                    <div class="space-y-4">
                        <div>
                            <h4 class="text-md font-semibold text-gray-900">{"Vote Counts by Time Slot:"}</h4>
                            <p class="text-sm text-blue-600 mt-1 mb-4">
                                {"Votes are cumulative - each time slot shows total votes up to that time"}
                            </p>
                        </div>
                        {for TimeSlot::ALL.iter().map(|slot| self.render_slot(ctx, *slot))}
                    </div>

                    <div class="flex justify-end gap-4 mt-8">
                        <button onclick={ctx.link().callback(|_| Msg::Cancel)} class={button_secondary()}>{"Cancel"}</button>
                        <button onclick={ctx.link().callback(|_| Msg::Save)} class={button_primary()}>{"Save Changes"}</button>
                    </div>
                </div>
            </div>
        }
    }
}

impl BoothEditor {
    fn proposed(&self, original: &Booth) -> Result<Booth, String> {
        let mut votes = SlotVotes::default();
        for slot in TimeSlot::ALL {
            let value = parse_slot_input(slot, &self.inputs[slot.index()]).map_err(|e| e.to_string())?;
            votes.set(slot, value);
        }
        Ok(Booth { votes, ..original.clone() })
    }

    fn minimum_for(&self, slot: TimeSlot) -> u32 {
        slot.previous()
            .and_then(|p| self.inputs[p.index()].trim().parse::<u32>().ok())
            .unwrap_or(0)
    }

    fn render_slot(&self, ctx: &Context<Self>, slot: TimeSlot) -> Html {
        let minimum = self.minimum_for(slot);
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Update(slot, input.value())
        });

        html! {
            <div key={slot.key()} class="flex items-center justify-between p-4 border rounded-lg">
                <div>
                    <label class="font-medium text-gray-700">{format!("{} ({})", slot.label(), slot.key())}</label>
                    {if minimum > 0 {
                        html! { <div class="text-xs text-gray-500 mt-1">{format!("Minimum: {} votes", minimum)}</div> }
                    } else { html! {} }}
                </div>
                <input
                    type="number"
                    min={minimum.to_string()}
                    max={ctx.props().booth.total_voters.to_string()}
                    value={self.inputs[slot.index()].clone()}
                    {oninput}
                    class={INPUT_NUMBER}
                    placeholder={minimum.to_string()}
                />
            </div>
        }
    }
}
