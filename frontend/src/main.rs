use std::rc::Rc;
use shared::{BoothStore, Role, StoreEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod styles;
mod config;
mod clock;
mod storage;
mod context;
mod protected;
mod home;
mod about;
mod login;
mod header;
mod status_legend;
mod voting_table;
mod booth_editor;
mod dashboard;
mod booth_details;
mod officer_dashboard;

use crate::{
    about::About,
    booth_details::BoothDetails,
    context::{AppContext, Session, SessionAction, use_app},
    dashboard::Dashboard,
    home::Home,
    login::Login,
    officer_dashboard::OfficerDashboard,
    protected::RequireRole,
    storage::{watch_other_tabs, BrowserStorage},
    styles::*,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/dashboard")] Dashboard,
    #[at("/booth/:id")] Booth { id: String },
    #[at("/login")] Login,
    #[at("/officer-dashboard")] OfficerDashboard,
    #[at("/about")] About,
    #[not_found]
    #[at("/404")] NotFound,
}

impl Route {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Route::Dashboard,
            Role::PresidingOfficer => Route::OfficerDashboard,
        }
    }
}

fn nav_link_classes(active: bool) -> Classes {
    classes!(
        "px-4", "py-2", "rounded-lg", "font-medium", "transition-colors",
        if active { "bg-blue-700 text-white" } else { "text-gray-700 hover:bg-gray-100" }
    )
}

#[function_component(Navigation)]
fn navigation() -> Html {
    let current_route = use_route::<Route>();
    let app = use_app();
    let navigator = use_navigator().unwrap();
    let user = app.user();

    let logout = {
        let app = app.clone();
        Callback::from(move |_| {
            app.logout();
            navigator.push(&Route::Home);
        })
    };

    let link = |route: Route, label: &'static str| {
        let active = current_route.as_ref() == Some(&route);
        html! {
            <Link<Route> to={route} classes={nav_link_classes(active)}>{label}</Link<Route>>
        }
    };

    html! {
        <nav class="bg-white/80 backdrop-blur-md shadow-sm sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-6 py-4 flex justify-between items-center">
                <Link<Route> to={Route::Home} classes="flex items-center space-x-3 hover:opacity-80 transition-opacity">
                    <div class="w-10 h-10 bg-gradient-to-br from-orange-500 to-blue-600 rounded-lg flex items-center justify-center">
                        <span class="text-white font-bold text-xl">{"B"}</span>
                    </div>
                    <span class="text-xl font-bold text-gray-800">{"Bihar Elections"}</span>
                </Link<Route>>
                <div class="flex gap-2 items-center">
                    {link(Route::Home, "Home")}
                    {match user.as_ref().map(|u| u.role) {
                        Some(Role::Admin) => link(Route::Dashboard, "Dashboard"),
                        Some(Role::PresidingOfficer) => link(Route::OfficerDashboard, "My Booth"),
                        None => html! {},
                    }}
                    {link(Route::About, "About")}
                    {if let Some(user) = user {
                        html! {
                            <>
                                <span class={TEXT_MUTED}>{format!("{} ({})", user.username, user.role)}</span>
                                <button onclick={logout} class={button_secondary()}>{"Logout"}</button>
                            </>
                        }
                    } else {
                        html! {
                            <Link<Route> to={Route::Login} classes={classes!(BUTTON_BASE, BUTTON_ORANGE, "rounded-full")}>
                                {"Login"}
                            </Link<Route>>
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    let store = use_memo(|_| BoothStore::new(BrowserStorage), ());
    let session = {
        let store = store.clone();
        use_reducer(move || Session { user: store.current_user() })
    };

    {
        let store = store.clone();
        let session = session.clone();
        use_effect_with_deps(move |_| {
            let watcher = watch_other_tabs(Rc::clone(&store));
            let reader = Rc::clone(&store);
            let subscription = store.subscribe(move |event| {
                if matches!(event, StoreEvent::SessionChanged) {
                    session.dispatch(SessionAction::Reloaded(reader.current_user()));
                }
            });
            move || {
                drop(subscription);
                drop(watcher);
            }
        }, ());
    }

    let context = AppContext { store, session };

    html! {
        <ContextProvider<AppContext> context={context}>
            <BrowserRouter>
                <div class={PAGE}>
                    <Navigation />
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ContextProvider<AppContext>>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Dashboard => html! {
            <RequireRole role={Role::Admin}><Dashboard /></RequireRole>
        },
        Route::Booth { id } => html! { <BoothDetails {id} /> },
        Route::Login => html! { <Login /> },
        Route::OfficerDashboard => html! {
            <RequireRole role={Role::PresidingOfficer}><OfficerDashboard /></RequireRole>
        },
        Route::About => html! { <About /> },
        Route::NotFound => html! {
            <div class={CONTAINER}>
                <div class={combine_classes(CARD, "text-center")}>
                    <h1 class={HEADING_LG}>{"Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes={classes!(button_primary())}>{"Back to Home"}</Link<Route>>
                </div>
            </div>
        },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }
    yew::Renderer::<App>::new().render();
}
