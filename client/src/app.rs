//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    account::AccountPage, create_event::CreateEventPage, events::EventsPage, login::LoginPage,
    my_events::MyEventsPage, register::RegisterPage,
};
use crate::util::dark_mode;

/// Root application component.
///
/// Provides all shared state contexts, restores the theme preference,
/// resolves the session once, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    crate::state::provide_stores();

    let ui = expect_context::<RwSignal<crate::state::ui::UiState>>();
    let preferred = dark_mode::read_preference();
    dark_mode::apply(preferred);
    ui.update(|state| *state = state.with_dark_mode(preferred));

    // One session check per app load; pages react to the resolved phase.
    #[cfg(feature = "csr")]
    {
        let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
        leptos::task::spawn_local(async move {
            let store = crate::state::auth::AuthStore::with_state(
                crate::net::api::HttpApi,
                auth.get_untracked(),
            );
            store.verify().await;
            auth.set(store.into_state());
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/phillyflow.css"/>
        <Title text="PhillyFlow"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=EventsPage/>
                <Route path=StaticSegment("my-events") view=MyEventsPage/>
                <Route path=StaticSegment("create") view=CreateEventPage/>
                <Route path=StaticSegment("account") view=AccountPage/>
            </Routes>
        </Router>
    }
}
