use shared::SlotStatus;
use yew::prelude::*;
use crate::styles::status_swatch;

#[function_component]
pub fn StatusLegend() -> Html {
    html! {
        <div class="flex flex-wrap justify-center mb-6 gap-6">
            {for SlotStatus::ALL.iter().map(|status| html! {
                <div class="flex items-center space-x-2">
                    <div class={status_swatch(*status)}></div>
                    <span class="text-sm font-medium text-gray-700">{status.legend_label()}</span>
                </div>
            })}
        </div>
    }
}
