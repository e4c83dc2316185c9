//! Game catalog management: list, search by name, delete.

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::{AppContext, use_route_guard};
use crate::net::api;

#[component]
pub fn GamesPage() -> impl IntoView {
    use_route_guard();

    let ctx = expect_context::<AppContext>();
    let search = RwSignal::new(String::new());

    let http = Arc::clone(&ctx.http);
    let games = LocalResource::new(move || {
        let http = Arc::clone(&http);
        let name = search.get();
        async move {
            let name = name.trim().to_owned();
            let result = if name.is_empty() {
                api::get_game_list(&http).await
            } else {
                api::search_games_by_name(&http, &name).await
            };
            result.unwrap_or_default()
        }
    });

    let http = Arc::clone(&ctx.http);

    view! {
        <div class="games-page">
            <header class="games-page__header">
                <h1>"Games"</h1>
                <input
                    type="search"
                    placeholder="Search by name"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </header>

            <Suspense fallback=move || view! { <p>"Loading games..."</p> }>
                <table class="games-page__table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Platform"</th>
                            <th>"Daily price"</th>
                            <th>"Stock"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            games
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|game| {
                                    let http = Arc::clone(&http);
                                    let id = game.id;
                                    view! {
                                        <tr>
                                            <td>{game.name}</td>
                                            <td>{game.platform}</td>
                                            <td>{format!("¥{:.2}", game.daily_price)}</td>
                                            <td>{game.stock}</td>
                                            <td>
                                                <button on:click=move |_| {
                                                    let http = Arc::clone(&http);
                                                    leptos::task::spawn_local(async move {
                                                        if let Err(err) = api::delete_game(&http, id).await {
                                                            log::warn!("delete game {id} failed: {err}");
                                                        }
                                                        games.refetch();
                                                    });
                                                }>
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Suspense>
        </div>
    }
}
