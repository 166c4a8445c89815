use std::rc::Rc;
use gloo_timers::callback::Interval;
use shared::{authenticate, AuthError, Booth, Role, StoreEvent, User};
use time::{OffsetDateTime, Time};
use tracing::warn;
use yew::prelude::*;
use crate::clock::current_time;
use crate::config::CONFIG;
use crate::storage::AppStore;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
}

pub enum SessionAction {
    LoggedIn(User),
    LoggedOut,
    Reloaded(Option<User>),
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let user = match action {
            SessionAction::LoggedIn(user) => Some(user),
            SessionAction::LoggedOut => None,
            SessionAction::Reloaded(user) => user,
        };
        Rc::new(Session { user })
    }
}

/// Everything pages share: the booth store and the signed-in user.
#[derive(Clone)]
pub struct AppContext {
    pub store: Rc<AppStore>,
    pub session: UseReducerHandle<Session>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.session == other.session
    }
}

impl AppContext {
    pub fn user(&self) -> Option<User> {
        self.session.user.clone()
    }

    pub fn login(&self, username: &str, password: &str, role: Role) -> Result<User, AuthError> {
        let user = authenticate(username, password, role, OffsetDateTime::now_utc())?;
        if let Err(e) = self.store.save_user(&user) {
            warn!("Session will not survive a reload: {}", e);
        }
        self.session.dispatch(SessionAction::LoggedIn(user.clone()));
        Ok(user)
    }

    pub fn logout(&self) {
        if let Err(e) = self.store.clear_user() {
            warn!("Could not clear stored session: {}", e);
        }
        self.session.dispatch(SessionAction::LoggedOut);
    }
}

#[hook]
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext is provided by App")
}

/// Booth list that re-reads storage whenever the store reports a change.
#[hook]
pub fn use_booths() -> UseStateHandle<Vec<Booth>> {
    let app = use_app();
    let booths = {
        let store = app.store.clone();
        use_state(move || store.load_booths())
    };

    {
        let booths = booths.clone();
        let store = app.store.clone();
        use_effect_with_deps(move |_| {
            let reader = store.clone();
            let subscription = store.subscribe(move |event| {
                if matches!(event, StoreEvent::BoothsUpdated { .. }) {
                    booths.set(reader.load_booths());
                }
            });
            move || drop(subscription)
        }, ());
    }

    booths
}

/// Current time of day, refreshed every clock tick.
#[hook]
pub fn use_clock() -> Time {
    let now = use_state(current_time);
    {
        let now = now.clone();
        use_effect_with_deps(move |_| {
            let interval = Interval::new(CONFIG.clock_tick_ms, move || now.set(current_time()));
            move || drop(interval)
        }, ());
    }
    *now
}
