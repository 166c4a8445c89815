use shared::Role;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::{Route, context::use_app, styles::*};

#[derive(Clone, Default, PartialEq)]
struct Credentials {
    username: String,
    password: String,
}

#[function_component]
pub fn Login() -> Html {
    let app = use_app();
    let navigator = use_navigator().unwrap();
    let role = use_state(|| None::<Role>);
    let credentials = use_state(Credentials::default);
    let error = use_state(|| None::<String>);

    let select_role = |selected: Role| {
        let role = role.clone();
        Callback::from(move |_| role.set(Some(selected)))
    };

    let back_to_roles = {
        let role = role.clone();
        let credentials = credentials.clone();
        let error = error.clone();
        Callback::from(move |_| {
            role.set(None);
            credentials.set(Credentials::default());
            error.set(None);
        })
    };

    let on_username = {
        let credentials = credentials.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            credentials.set(Credentials { username: input.value(), ..(*credentials).clone() });
        })
    };

    let on_password = {
        let credentials = credentials.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            credentials.set(Credentials { password: input.value(), ..(*credentials).clone() });
        })
    };

    let onsubmit = {
        let role = role.clone();
        let credentials = credentials.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(selected) = *role else { return };
            match app.login(&credentials.username, &credentials.password, selected) {
                Ok(user) => navigator.push(&Route::for_role(user.role)),
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    let Some(selected) = *role else {
        return html! {
            <div class={CONTAINER_SM}>
                <div class={CARD}>
                    <div class="text-center mb-8">
                        <h1 class={HEADING_LG}>{"Login to Bihar Elections Portal"}</h1>
                        <p class="text-gray-600">{"Select your role to continue"}</p>
                    </div>
                    <div class="space-y-4">
                        <button onclick={select_role(Role::Admin)}
                            class="w-full bg-blue-700 hover:bg-blue-800 text-white rounded-xl p-6 transition-colors text-left text-lg font-semibold">
                            {"Admin Login"}
                        </button>
                        <button onclick={select_role(Role::PresidingOfficer)}
                            class="w-full bg-white hover:bg-blue-50 text-gray-900 border-2 border-blue-700 rounded-xl p-6 transition-colors text-left text-lg font-semibold">
                            {"Presiding Officer Login"}
                        </button>
                    </div>
                    <div class="mt-8 text-center">
                        <Link<Route> to={Route::Home} classes="text-blue-700 hover:text-blue-800 font-medium transition-colors">
                            {"← Back to Home"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        };
    };

    html! {
        <div class={CONTAINER_SM}>
            <div class={CARD}>
                <div class="text-center mb-8">
                    <h1 class={HEADING_LG}>{format!("{} Login", selected.title())}</h1>
                    <p class="text-gray-600">{"Enter your credentials to continue"}</p>
                </div>

                {if let Some(error) = &*error {
                    html! { <div class={alert_style("error")}>{error}</div> }
                } else { html! {} }}

                <form {onsubmit} class="space-y-6">
                    <div>
                        <label for="username" class={TEXT_LABEL}>{"Username"}</label>
                        <input type="text" id="username" class={INPUT_BASE} required=true
                            value={credentials.username.clone()} oninput={on_username}
                            placeholder="Enter your username" />
                    </div>
                    <div>
                        <label for="password" class={TEXT_LABEL}>{"Password"}</label>
                        <input type="password" id="password" class={INPUT_BASE} required=true
                            value={credentials.password.clone()} oninput={on_password}
                            placeholder="Enter your password" />
                    </div>
                    <button type="submit" class={combine_classes(&button_primary(), "w-full py-3")}>
                        {format!("Login as {}", selected.title())}
                    </button>
                </form>

                <div class="mt-6 text-sm">
                    <button onclick={back_to_roles} class="text-blue-700 hover:text-blue-800 font-medium transition-colors">
                        {"← Back to Role Selection"}
                    </button>
                </div>
            </div>
        </div>
    }
}
