use gloo_timers::callback::Interval;
use shared::{
    format::{format_clock, format_count, format_percent},
    Booth, BoothFilter, DashboardSummary, SlotStatus,
};
use tracing::info;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use crate::{
    booth_editor::BoothEditor,
    clock::current_time,
    config::CONFIG,
    context::{use_app, use_booths, use_clock},
    header::DashboardHeader,
    status_legend::StatusLegend,
    styles::*,
    voting_table::VotingTable,
};

#[function_component]
pub fn Dashboard() -> Html {
    let app = use_app();
    let now = use_clock();
    let booths = use_booths();
    let last_updated = use_state(current_time);
    let query = use_state(String::new);
    let status = use_state(|| None::<SlotStatus>);
    let editing = use_state(|| None::<Booth>);
    let notice = use_state(|| None::<String>);

    {
        let booths = booths.clone();
        let last_updated = last_updated.clone();
        let store = app.store.clone();
        use_effect_with_deps(move |_| {
            let interval = Interval::new(CONFIG.refresh_interval_ms, move || {
                info!("Scheduled refresh of booth data");
                booths.set(store.load_booths());
                last_updated.set(current_time());
            });
            move || drop(interval)
        }, ());
    }

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let onchange = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            status.set(SlotStatus::from_key(&select.value()));
        })
    };

    let on_edit = {
        let editing = editing.clone();
        let notice = notice.clone();
        Callback::from(move |booth: Booth| {
            notice.set(None);
            editing.set(Some(booth));
        })
    };

    let on_close = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    let on_save = {
        let store = app.store.clone();
        let notice = notice.clone();
        let last_updated = last_updated.clone();
        Callback::from(move |booth: Booth| -> shared::Result<()> {
            let name = booth.name.clone();
            store.commit_edit(booth)?;
            notice.set(Some(format!("Updated {}", name)));
            last_updated.set(current_time());
            Ok(())
        })
    };

    let filter = BoothFilter { query: (*query).clone(), status: *status };
    let visible: Vec<Booth> = filter.apply(&booths, now).into_iter().cloned().collect();
    let summary = DashboardSummary::from_booths(&booths, now);

    let tile = |label: &'static str, value: String, accent: &'static str| html! {
        <div class={combine_classes(STAT_TILE, "shadow-sm border border-gray-200")}>
            <div class={TEXT_MUTED}>{label}</div>
            <div class={classes!("text-2xl", "font-bold", accent)}>{value}</div>
        </div>
    };

    html! {
        <div class={CONTAINER}>
            <DashboardHeader {now} />
            <p class="text-right text-xs text-gray-500 mb-6">
                {format!("Last Updated: {}", format_clock(*last_updated))}
            </p>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
                {tile("Booths", summary.booth_count.to_string(), "text-gray-900")}
                {tile("Total Voters", format_count(summary.total_voters), "text-blue-900")}
                {tile("Votes Cast", format_count(summary.votes_cast), "text-purple-900")}
                {tile("Turnout", format_percent(summary.turnout_percent()), "text-emerald-700")}
            </div>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
                {for SlotStatus::ALL.iter().map(|s| html! {
                    <div class={combine_classes(STAT_TILE, status_pill(*s))}>
                        <div class="text-sm font-medium">{s.label()}</div>
                        <div class="text-2xl font-bold">{summary.count(*s)}</div>
                    </div>
                })}
            </div>

            <StatusLegend />

            {if let Some(message) = &*notice {
                html! { <div class={alert_style("success")}>{message}</div> }
            } else { html! {} }}

            <div class="flex flex-col md:flex-row gap-4 mb-6">
                <input
                    type="text"
                    value={(*query).clone()}
                    {oninput}
                    class={INPUT_BASE}
                    placeholder="Search by booth name or ID"
                />
                <select {onchange} class={combine_classes(INPUT_BASE, "md:w-64")}>
                    <option value="" selected={status.is_none()}>{"All statuses"}</option>
                    {for SlotStatus::ALL.iter().map(|s| html! {
                        <option value={s.key()} selected={*status == Some(*s)}>{s.label()}</option>
                    })}
                </select>
            </div>

            {if !filter.is_empty() {
                html! {
                    <p class={combine_classes(TEXT_MUTED, "mb-2")}>
                        {format!("Showing {} of {} booths", visible.len(), booths.len())}
                    </p>
                }
            } else { html! {} }}

            <VotingTable booths={visible} {now} on_edit={Some(on_edit)} />

            {if let Some(booth) = &*editing {
                html! { <BoothEditor key={booth.id} booth={booth.clone()} {on_save} {on_close} /> }
            } else { html! {} }}
        </div>
    }
}
