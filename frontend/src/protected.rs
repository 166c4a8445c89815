use shared::{gate, Gate, Role};
use yew::prelude::*;
use yew_router::prelude::*;
use crate::{context::use_app, Route};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub role: Role,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn RequireRole(props: &Props) -> Html {
    let app = use_app();
    match gate(props.role, app.user().as_ref()) {
        Gate::Allow => html! { <>{for props.children.iter()}</> },
        Gate::Login => html! { <Redirect<Route> to={Route::Login} /> },
        Gate::RoleHome(role) => html! { <Redirect<Route> to={Route::for_role(role)} /> },
    }
}
