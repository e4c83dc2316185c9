//! Shopper login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::{AppContext, use_route_guard};
use crate::net::api;
use crate::net::types::LoginPayload;
use crate::state::guard::HOME_PATH;

/// Phone + password login form. On success the session store is populated
/// and the shopper is sent back to the path preserved in the `redirect`
/// query parameter.
#[component]
pub fn LoginPage() -> impl IntoView {
    use_route_guard();

    let ctx = expect_context::<AppContext>();
    let navigate = use_navigate();
    let query = use_query_map();

    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);

        let ctx = ctx.clone();
        let navigate = navigate.clone();
        let payload = LoginPayload {
            phone: phone.get_untracked(),
            password: password.get_untracked(),
        };
        let target = query
            .with_untracked(|q| q.get("redirect"))
            .unwrap_or_else(|| HOME_PATH.to_owned());

        leptos::task::spawn_local(async move {
            match api::login(&ctx.http, &payload).await {
                Ok(login) => {
                    // Token-only responses still need the profile.
                    let user = match login.user {
                        Some(user) => user,
                        None => {
                            ctx.session.set_session(Default::default(), &login.token);
                            api::fetch_profile(&ctx.http).await.unwrap_or_default()
                        }
                    };
                    ctx.session.set_session(user, &login.token);
                    navigate(&target, NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("login failed: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            pending.set(false);
        });
    };

    view! {
        <div class="login-page">
            <h1>"JoyRent"</h1>
            <form on:submit=submit>
                <label>
                    "Phone"
                    <input
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="login-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
