use shared::{SlotStatus, OVERDUE_AFTER_MINUTES};
use yew::prelude::*;
use yew_router::prelude::*;
use crate::{Route, styles::*};

#[function_component]
pub fn About() -> Html {
    html! {
        <div class={CONTAINER}>
            <div class={combine_classes(CARD, "max-w-4xl mx-auto")}>
                <h1 class="text-4xl font-bold text-gray-800 mb-6">{"About the Election Monitor"}</h1>
                <div class="space-y-4 text-gray-600">
                    <p class="text-lg">
                        {"Presiding officers report the cumulative number of votes cast at their booth every two hours,
                        from 8 AM to 6 PM. This dashboard collects those reports so the constituency can see at a glance
                        which booths are on schedule."}
                    </p>

                    <h2 class="text-2xl font-semibold text-gray-800 mt-6 mb-3">{"Features"}</h2>
                    <ul class="list-disc list-inside space-y-2">
                        <li>{"Booth-wise cumulative turnout for six reporting slots"}</li>
                        <li>{"Search by booth name or ID and filter by reporting status"}</li>
                        <li>{"Presiding officers update their own booth; admins can correct any booth"}</li>
                        <li>{"Edits are checked so totals never go backwards or exceed the electorate"}</li>
                    </ul>

                    <h2 class="text-2xl font-semibold text-gray-800 mt-6 mb-3">{"Color Codes"}</h2>
                    <ul class="list-disc list-inside space-y-2">
                        <li><span class="font-semibold text-emerald-600">{"Green"}</span>{" - Data received for the slot"}</li>
                        <li>
                            <span class="font-semibold text-amber-600">{"Yellow"}</span>
                            {format!(" - Awaiting data, within {} minutes of the slot", OVERDUE_AFTER_MINUTES)}
                        </li>
                        <li>
                            <span class="font-semibold text-red-600">{"Red"}</span>
                            {format!(" - Overdue, more than {} minutes late", OVERDUE_AFTER_MINUTES)}
                        </li>
                        <li><span class="font-semibold text-gray-600">{"Gray"}</span>{" - Future slot"}</li>
                    </ul>
                    <p class={TEXT_MUTED}>
                        {format!("Statuses: {}", SlotStatus::ALL.iter().map(|s| s.legend_label()).collect::<Vec<_>>().join(", "))}
                    </p>

                    <div class="mt-8 pt-6 border-t border-gray-200">
                        <Link<Route> to={Route::Home} classes={classes!(button_primary())}>{"Back to Home"}</Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
