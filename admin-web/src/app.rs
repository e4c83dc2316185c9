//! Root application component, routing, and the shared app context.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{NavigateOptions, StaticSegment};

use crate::net::http::{HttpClient, HttpConfig, Navigator, Transport};
use crate::pages::{dashboard::DashboardPage, games::GamesPage, login::LoginPage};
use crate::state::guard::{RouteDecision, before_navigate};
use crate::state::session::SessionStore;
use crate::util::storage::Storage;

/// Explicit context object owning the session store and request client.
///
/// Constructed once at mount and provided to every page. Each application
/// instance owns its session; nothing in the crate reaches for
/// process-wide globals.
#[derive(Clone)]
pub struct AppContext {
    pub session: Arc<SessionStore>,
    pub http: Arc<HttpClient>,
}

impl AppContext {
    /// Browser wiring: `localStorage`, `fetch`, real navigation.
    #[cfg(feature = "csr")]
    pub fn new_browser() -> Self {
        use crate::net::http::{BrowserNavigator, FetchTransport};
        use crate::util::storage::BrowserStorage;

        Self::assemble(
            Arc::new(BrowserStorage),
            Arc::new(FetchTransport),
            Arc::new(BrowserNavigator),
        )
    }

    /// Wiring for tests and non-browser builds: memory storage and a
    /// transport that rejects every call.
    pub fn new_detached() -> Self {
        use crate::net::http::{NullNavigator, NullTransport};
        use crate::util::storage::MemoryStorage;

        Self::assemble(
            Arc::new(MemoryStorage::default()),
            Arc::new(NullTransport),
            Arc::new(NullNavigator),
        )
    }

    fn assemble(
        storage: Arc<dyn Storage>,
        transport: Arc<dyn Transport>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let session = Arc::new(SessionStore::load(storage));
        let http = Arc::new(HttpClient::new(
            HttpConfig::default(),
            Arc::clone(&session),
            transport,
            navigator,
        ));
        Self { session, http }
    }
}

/// Enforce the route guard for the current location.
///
/// Pages call this once on mount; the effect re-runs on every path change.
pub fn use_route_guard() {
    let ctx = expect_context::<AppContext>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let target = location.pathname.get();
        if let RouteDecision::Redirect(to) = before_navigate(&target, ctx.session.is_authenticated())
        {
            navigate(&to, NavigateOptions::default());
        }
    });
}

/// Root component: provides the app context and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    #[cfg(feature = "csr")]
    let ctx = AppContext::new_browser();
    #[cfg(not(feature = "csr"))]
    let ctx = AppContext::new_detached();

    provide_context(ctx);

    view! {
        <Title text="JoyRent Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("games") view=GamesPage/>
            </Routes>
        </Router>
    }
}
