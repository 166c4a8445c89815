use shared::{
    classify,
    format::{format_count, format_percent},
    stats::percent,
    Booth, TimeSlot,
};
use time::Time;
use yew::prelude::*;
use crate::{
    booth_editor::BoothEditor,
    context::{use_app, use_booths, use_clock},
    header::DashboardHeader,
    status_legend::StatusLegend,
    styles::*,
};

#[function_component]
pub fn OfficerDashboard() -> Html {
    let app = use_app();
    let now = use_clock();
    // Subscribes this page to store changes so a commit re-renders it.
    let _booths = use_booths();
    let editing = use_state(|| false);
    let notice = use_state(|| None::<String>);

    let Some(user) = app.user() else {
        return html! {};
    };

    let booth = match app.store.assigned_booth(&user.username) {
        Ok(booth) => booth,
        Err(e) => {
            return html! {
                <div class={CONTAINER}>
                    <div class={alert_style("error")}>{format!("Could not load your booth: {}", e)}</div>
                </div>
            };
        }
    };

    let open_editor = {
        let editing = editing.clone();
        let notice = notice.clone();
        Callback::from(move |_| {
            notice.set(None);
            editing.set(true);
        })
    };

    let on_close = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(false))
    };

    let on_save = {
        let store = app.store.clone();
        let notice = notice.clone();
        Callback::from(move |booth: Booth| -> shared::Result<()> {
            store.commit_edit(booth)?;
            notice.set(Some("Booth data saved".into()));
            Ok(())
        })
    };

    let stat = |label: &'static str, value: String, accent: &'static str| html! {
        <div class={combine_classes(STAT_TILE, "border border-gray-200")}>
            <div class={TEXT_MUTED}>{label}</div>
            <div class={classes!("text-2xl", "font-bold", accent)}>{value}</div>
        </div>
    };

    html! {
        <div class={CONTAINER}>
            <DashboardHeader {now} />

            <div class={combine_classes(CARD, "my-6")}>
                <div class="flex justify-between items-start mb-6">
                    <div>
                        <p class={TEXT_MUTED}>{format!("Welcome, {}", user.username)}</p>
                        <h1 class={HEADING_LG}>{&booth.name}</h1>
                        <p class={TEXT_MUTED}>{format!("Booth ID: {}", booth.id)}</p>
                    </div>
                    <button onclick={open_editor} class={combine_classes(BUTTON_BASE, BUTTON_ORANGE)}>{"Update Data"}</button>
                </div>

                {if let Some(message) = &*notice {
                    html! { <div class={alert_style("success")}>{message}</div> }
                } else { html! {} }}

                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {stat("Total Voters", format_count(booth.total_voters.into()), "text-blue-900")}
                    {stat("Votes Cast", format_count(booth.votes_cast().into()), "text-purple-900")}
                    {stat("Remaining", format_count(booth.remaining_voters().into()), "text-gray-900")}
                    {stat("Turnout", format_percent(booth.turnout_percent()), "text-emerald-700")}
                </div>
            </div>

            <StatusLegend />

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {for TimeSlot::ALL.iter().map(|slot| slot_card(&booth, *slot, now))}
            </div>

            {if *editing {
                html! { <BoothEditor key={booth.id} booth={booth.clone()} {on_save} {on_close} /> }
            } else { html! {} }}
        </div>
    }
}

fn slot_card(booth: &Booth, slot: TimeSlot, now: Time) -> Html {
    let votes = booth.vote_at(slot);
    let status = classify(slot, votes, now);
    html! {
        <div key={slot.key()} class={CARD_SECTION}>
            <div class="flex justify-between items-center mb-3">
                <span class={HEADING_SM}>{slot.label()}</span>
                <span class={classes!("text-xs", "px-2", "py-1", "rounded-full", status_pill(status))}>{status.label()}</span>
            </div>
            {match votes {
                Some(v) => html! {
                    <>
                        <div class="text-2xl font-bold text-gray-900">{format_count(v.into())}</div>
                        <div class={TEXT_MUTED}>{format!("{} turnout", format_percent(percent(v, booth.total_voters)))}</div>
                    </>
                },
                None => html! { <div class="text-2xl font-bold text-gray-400">{"No data"}</div> },
            }}
        </div>
    }
}
