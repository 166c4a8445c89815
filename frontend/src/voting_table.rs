use shared::{classify, format::format_count, Booth, TimeSlot};
use time::Time;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::{Route, styles::*};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub booths: Vec<Booth>,
    pub now: Time,
    #[prop_or_default]
    pub on_edit: Option<Callback<Booth>>,
}

#[function_component]
pub fn VotingTable(props: &Props) -> Html {
    if props.booths.is_empty() {
        return html! {
            <div class={combine_classes(CARD, "text-center text-gray-500")}>{"No booths match the current filter."}</div>
        };
    }

    html! {
        <div class="bg-white shadow-sm border border-gray-200 overflow-hidden rounded-xl">
            <div class="overflow-x-auto">
                <table class="w-full">
                    <thead class="bg-gray-50 border-b border-gray-200">
                        <tr>
                            <th class="px-5 py-4 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"S/N"}</th>
                            <th class="px-4 py-4 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Booth Name ↗"}</th>
                            <th class={TABLE_HEAD}>{"Total Voters"}</th>
                            {for TimeSlot::ALL.iter().map(|slot| html! {
                                <th key={slot.key()} class={TABLE_HEAD}>{slot.label()}</th>
                            })}
                            <th class={TABLE_HEAD}>{"Total Votes Cast"}</th>
                            {if props.on_edit.is_some() {
                                html! { <th class={TABLE_HEAD}>{"Actions"}</th> }
                            } else { html! {} }}
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        {for props.booths.iter().enumerate().map(|(index, booth)| render_row(props, index, booth))}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn render_row(props: &Props, index: usize, booth: &Booth) -> Html {
    html! {
        <tr key={booth.id} class="hover:bg-gray-50 transition-colors">
            <td class="px-6 py-3 whitespace-nowrap text-sm text-gray-900">{format!("{}.", index + 1)}</td>
            <td class="px-6 py-3 whitespace-nowrap text-sm font-medium text-gray-900">
                <Link<Route> to={Route::Booth { id: booth.id.to_string() }} classes="hover:text-blue-700 hover:underline">
                    {&booth.name}
                </Link<Route>>
            </td>
            <td class="px-6 py-3 text-center whitespace-nowrap">
                <div class={combine_classes(TABLE_CELL_BADGE, "bg-blue-100 text-blue-900")}>
                    {format_count(booth.total_voters.into())}
                </div>
            </td>
            {for booth.votes.iter().map(|(slot, votes)| {
                let status = classify(slot, votes, props.now);
                html! {
                    <td key={slot.key()} class="px-6 py-3 text-center whitespace-nowrap" title={status.label()}>
                        <div class={classes!(TABLE_CELL_BADGE, status_cell(status), "transition-all", "duration-300")}>
                            {match votes {
                                Some(v) => format_count(v.into()),
                                None => "—".to_string(),
                            }}
                        </div>
                    </td>
                }
            })}
            <td class="px-6 py-3 text-center whitespace-nowrap">
                <div class={combine_classes(TABLE_CELL_BADGE, "bg-purple-100 text-purple-900")}>
                    {format_count(booth.latest_reported().into())}
                </div>
            </td>
            {if let Some(on_edit) = &props.on_edit {
                let on_edit = on_edit.clone();
                let booth = booth.clone();
                html! {
                    <td class="px-6 py-3 text-center whitespace-nowrap">
                        <button onclick={Callback::from(move |_| on_edit.emit(booth.clone()))}
                            class={combine_classes(BUTTON_BASE, BUTTON_SUCCESS)}>
                            {"Edit"}
                        </button>
                    </td>
                }
            } else { html! {} }}
        </tr>
    }
}
