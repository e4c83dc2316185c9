//! Storefront landing page: top-rented carousel row plus the full catalog.

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::{AppContext, use_route_guard};
use crate::net::api;
use crate::net::types::{CartAdd, Game};
use crate::util::image_url;

#[component]
pub fn HomePage() -> impl IntoView {
    use_route_guard();

    let ctx = expect_context::<AppContext>();
    let search = RwSignal::new(String::new());

    let http = Arc::clone(&ctx.http);
    let top_rented = LocalResource::new(move || {
        let http = Arc::clone(&http);
        async move { api::get_top_rented(&http).await.unwrap_or_default() }
    });

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
        <div class="home-page">
            <header class="home-page__header">
                <h1>"JoyRent"</h1>
                <input
                    type="search"
                    placeholder="Search games"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </header>

            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                <section class="home-page__top-rented">
                    <h2>"Most rented"</h2>
                    <ul>
                        {move || {
                            top_rented
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|game| {
                                    view! {
                                        <li>
                                            <img src=image_url::game_cover(&game.cover_image)/>
                                            <span>{game.name}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </section>

                <section class="home-page__catalog">
                    {move || {
                        let http = Arc::clone(&http);
                        games
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(move |game| game_card(&http, game))
                            .collect::<Vec<_>>()
                    }}
                </section>
            </Suspense>
        </div>
    }
}

fn game_card(http: &Arc<crate::net::http::HttpClient>, game: Game) -> impl IntoView + use<> {
    let http = Arc::clone(http);
    let id = game.id;
    view! {
        <article class="game-card">
            <img src=image_url::game_cover(&game.cover_image)/>
            <h3>{game.name}</h3>
            <p>{game.platform}</p>
            <p>{format!("¥{:.2}/day", game.daily_price)}</p>
            <button on:click=move |_| {
                let http = Arc::clone(&http);
                leptos::task::spawn_local(async move {
                    let item = CartAdd { game_id: id, rent_days: 1 };
                    if let Err(err) = api::add_to_cart(&http, &item).await {
                        log::warn!("add game {id} to cart failed: {err}");
                    }
                });
            }>
                "Add to cart"
            </button>
        </article>
    }
}
