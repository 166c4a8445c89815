use shared::slots::SLOT_COUNT;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::{Route, context::{use_app, use_booths}, styles::*};

#[function_component]
pub fn Home() -> Html {
    let app = use_app();
    let booths = use_booths();
    let navigator = use_navigator().unwrap();
    let query = use_state(String::new);
    let error = use_state(|| None::<String>);

    let oninput = {
        let query = query.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
            error.set(None);
        })
    };

    let onsubmit = {
        let query = query.clone();
        let error = error.clone();
        let store = app.store.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = query.trim();
            match text.parse::<u32>().ok().and_then(|id| store.find_booth(id)) {
                Some(booth) => navigator.push(&Route::Booth { id: booth.id.to_string() }),
                None if text.is_empty() => error.set(Some("Please enter a booth ID".into())),
                None => error.set(Some(format!("No booth found with ID \"{}\"", text))),
            }
        })
    };

    html! {
        <div class="max-w-6xl mx-auto px-6 py-16">
            <div class="text-center mb-12">
                <h1 class="text-5xl md:text-6xl font-bold text-gray-900 mb-4">
                    {"Track Your "}<span class="text-orange-500">{"Voting Status"}</span>
                </h1>
                <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                    {"Follow booth-wise voter turnout across the polling day, updated every two hours."}
                </p>
            </div>

            <div class="bg-white rounded-3xl shadow-xl p-12 max-w-3xl mx-auto">
                <div class="text-center mb-8">
                    <h2 class="text-3xl font-bold text-gray-900 mb-3">{"Enter Your Booth ID"}</h2>
                    <p class="text-gray-600 text-lg">{"Track your booth status instantly"}</p>
                </div>

                <form {onsubmit} class="flex gap-3 mb-4">
                    <input
                        type="text"
                        inputmode="numeric"
                        value={(*query).clone()}
                        {oninput}
                        placeholder="e.g. 7"
                        class="flex-1 px-4 py-4 border-2 border-gray-200 rounded-xl text-lg focus:outline-none focus:border-orange-500 transition-colors"
                    />
                    <button type="submit" class="px-10 py-4 bg-orange-500 text-white rounded-xl font-semibold hover:bg-orange-600 transition-colors whitespace-nowrap">
                        {"Search"}
                    </button>
                </form>
                {if let Some(error) = &*error {
                    html! { <div class={alert_style("error")}>{error}</div> }
                } else { html! {} }}

                <div class="grid grid-cols-3 gap-6 pt-6 border-t border-gray-200">
                    <div class="text-center">
                        <div class="text-3xl font-bold text-orange-500 mb-1">{booths.len()}</div>
                        <div class={TEXT_MUTED}>{"Polling Booths"}</div>
                    </div>
                    <div class="text-center">
                        <div class="text-3xl font-bold text-orange-500 mb-1">{SLOT_COUNT}</div>
                        <div class={TEXT_MUTED}>{"Time Slots"}</div>
                    </div>
                    <div class="text-center">
                        <div class="text-3xl font-bold text-orange-500 mb-1">{"Live"}</div>
                        <div class={TEXT_MUTED}>{"Real-time Updates"}</div>
                    </div>
                </div>
            </div>

            <div class="mt-12 flex justify-center gap-4">
                <Link<Route> to={Route::About} classes={classes!(button_secondary())}>{"How it works"}</Link<Route>>
                <Link<Route> to={Route::Login} classes={classes!(button_primary())}>{"Officials Login"}</Link<Route>>
            </div>
        </div>
    }
}
