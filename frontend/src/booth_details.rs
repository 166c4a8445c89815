use shared::{
    classify,
    format::{format_count, format_percent},
    dataset::find_booth,
    Booth, SlotBreakdown,
};
use time::Time;
use tracing::debug;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::{
    Route,
    context::{use_app, use_booths, use_clock},
    status_legend::StatusLegend,
    styles::*,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

#[function_component]
pub fn BoothDetails(props: &Props) -> Html {
    let app = use_app();
    let now = use_clock();
    let booths = use_booths();

    let onrefresh = {
        let booths = booths.clone();
        let store = app.store.clone();
        Callback::from(move |_| {
            debug!("Manual refresh of booth details");
            booths.set(store.load_booths());
        })
    };

    let booth = props.id.trim().parse::<u32>().ok().and_then(|id| find_booth(&booths, id));
    let Some(booth) = booth else {
        return html! {
            <div class={CONTAINER}>
                <div class={combine_classes(CARD, "text-center max-w-xl mx-auto")}>
                    <h1 class={HEADING_LG}>{"Booth Not Found"}</h1>
                    <p class={combine_classes(TEXT_MUTED, "mb-6")}>
                        {format!("No booth exists with ID \"{}\".", props.id)}
                    </p>
                    <Link<Route> to={Route::Dashboard} classes={classes!(button_primary())}>{"Back to Dashboard"}</Link<Route>>
                </div>
            </div>
        };
    };

    let stat = |label: &'static str, value: String, accent: &'static str| html! {
        <div class={combine_classes(STAT_TILE, "border border-gray-200")}>
            <div class={TEXT_MUTED}>{label}</div>
            <div class={classes!("text-2xl", "font-bold", accent)}>{value}</div>
        </div>
    };

    let breakdown = booth.slot_breakdown();

    html! {
        <div class={CONTAINER}>
            <div class={combine_classes(CARD, "mb-6")}>
                <div class="flex justify-between items-start mb-6">
                    <div>
                        <h1 class={HEADING_LG}>{&booth.name}</h1>
                        <p class={TEXT_MUTED}>{format!("Booth ID: {}", booth.id)}</p>
                    </div>
                    <button onclick={onrefresh} class={button_secondary()}>{"Refresh"}</button>
                </div>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {stat("Total Voters", format_count(booth.total_voters.into()), "text-blue-900")}
                    {stat("Votes Cast", format_count(booth.votes_cast().into()), "text-purple-900")}
                    {stat("Remaining", format_count(booth.remaining_voters().into()), "text-gray-900")}
                    {stat("Turnout", format_percent(booth.turnout_percent()), "text-emerald-700")}
                </div>
            </div>

            <div class={combine_classes(CARD, "mb-6")}>
                <h2 class={HEADING_MD}>{"Turnout Trend"}</h2>
                {trend_bars(&breakdown)}
            </div>

            <div class={CARD}>
                <h2 class={HEADING_MD}>{"Time Slot Breakdown"}</h2>
                <StatusLegend />
                <div class="space-y-3">
                    {for breakdown.iter().map(|row| render_slot_row(booth, row, now))}
                </div>
            </div>
        </div>
    }
}

fn trend_bars(breakdown: &[SlotBreakdown]) -> Html {
    html! {
        <div class="flex items-end gap-4 h-48">
            {for breakdown.iter().map(|row| {
                let height = format!("height: {:.1}%", row.turnout_percent.min(100.0));
                html! {
                    <div key={row.slot.key()} class="flex-1 flex flex-col items-center justify-end h-full">
                        <span class="text-xs text-gray-600 mb-1">{format_percent(row.turnout_percent)}</span>
                        <div class="w-full bg-gradient-to-t from-blue-700 to-orange-400 rounded-t" style={height}></div>
                        <span class="text-xs font-medium text-gray-700 mt-2">{row.slot.label()}</span>
                    </div>
                }
            })}
        </div>
    }
}

fn render_slot_row(booth: &Booth, row: &SlotBreakdown, now: Time) -> Html {
    let status = classify(row.slot, row.votes, now);
    html! {
        <div key={row.slot.key()} class={CARD_SECTION}>
            <div class="flex justify-between items-center">
                <div>
                    <div class="font-semibold text-gray-900">{format!("{} ({})", row.slot.label(), row.slot.key())}</div>
                    <span class={classes!("text-xs", "px-2", "py-1", "rounded-full", status_pill(status))}>
                        {status.label()}
                    </span>
                </div>
                <div class="text-right">
                    {match row.votes {
                        Some(votes) => html! {
                            <>
                                <div class="text-xl font-bold text-gray-900">{format_count(votes.into())}</div>
                                <div class="text-sm text-emerald-700">{format!("+{}", format_count(row.increment.into()))}</div>
                                <div class={TEXT_MUTED}>
                                    {format!("{} of {}", format_percent(row.turnout_percent), format_count(booth.total_voters.into()))}
                                </div>
                            </>
                        },
                        None => html! { <div class="text-xl font-bold text-gray-400">{"—"}</div> },
                    }}
                </div>
            </div>
        </div>
    }
}
