use time::Time;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::{Route, config::CONFIG};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub now: Time,
}

#[function_component]
pub fn DashboardHeader(props: &Props) -> Html {
    let tile = |value: u8, label: &'static str| html! {
        <div class="bg-white/20 backdrop-blur-md rounded-lg px-4 py-2 text-center">
            <div class="text-2xl font-bold">{format!("{:02}", value)}</div>
            <div class="text-xs font-medium">{label}</div>
        </div>
    };

    html! {
        <div class="relative rounded-2xl overflow-hidden mb-2 bg-gradient-to-r from-blue-900 via-blue-700 to-orange-600 text-white">
            <div class="flex flex-col md:flex-row justify-between items-center px-8 py-8 gap-6">
                <div class="flex flex-col justify-center items-start">
                    <h1 class="text-3xl md:text-4xl font-bold">{CONFIG.title}</h1>
                    <p class="mt-2">{CONFIG.constituency}</p>
                    <Link<Route> to={Route::About} classes="text-white text-base font-medium hover:underline">
                        {"Learn More →"}
                    </Link<Route>>
                </div>
                <div class="flex flex-col items-center">
                    <span class="text-base font-semibold mb-2 tracking-wide">{"Current Time"}</span>
                    <div class="flex gap-2">
                        {tile(props.now.hour(), "Hours")}
                        {tile(props.now.minute(), "Minutes")}
                    </div>
                </div>
            </div>
        </div>
    }
}
