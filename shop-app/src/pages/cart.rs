//! Cart screen: list, remove lines, check out the whole cart.

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::{AppContext, use_route_guard};
use crate::net::api;
use crate::net::types::OrderCreate;
use crate::util::image_url;

#[component]
pub fn CartPage() -> impl IntoView {
    use_route_guard();

    let ctx = expect_context::<AppContext>();

    let http = Arc::clone(&ctx.http);
    let cart = LocalResource::new(move || {
        let http = Arc::clone(&http);
        async move { api::get_cart_list(&http).await.unwrap_or_default() }
    });

    let http = Arc::clone(&ctx.http);
    let checkout_error = RwSignal::new(Option::<String>::None);

    let total = move || {
        cart.get()
            .unwrap_or_default()
            .iter()
            .map(|item| item.daily_price * item.rent_days as f64)
            .sum::<f64>()
    };

    view! {
        <div class="cart-page">
            <h1>"Cart"</h1>

            <Suspense fallback=move || view! { <p>"Loading cart..."</p> }>
                <ul class="cart-page__items">
                    {
                        let http = Arc::clone(&http);
                        move || {
                            let http = Arc::clone(&http);
                            cart.get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|item| {
                                    let http = Arc::clone(&http);
                                    let id = item.id;
                                    view! {
                                        <li>
                                            <img src=image_url::game_cover(&item.cover_image)/>
                                            <span>{item.game_name}</span>
                                            <span>{format!("{} days", item.rent_days)}</span>
                                            <span>
                                                {format!("¥{:.2}", item.daily_price * item.rent_days as f64)}
                                            </span>
                                            <button on:click=move |_| {
                                                let http = Arc::clone(&http);
                                                leptos::task::spawn_local(async move {
                                                    if let Err(err) = api::remove_cart_item(&http, id).await {
                                                        log::warn!("remove cart item {id} failed: {err}");
                                                    }
                                                    cart.refetch();
                                                });
                                            }>
                                                "Remove"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }
                    }
                </ul>

                <footer class="cart-page__footer">
                    <span>{move || format!("Total ¥{:.2}", total())}</span>
                    <button on:click={
                        let http = Arc::clone(&http);
                        move |_| {
                            let http = Arc::clone(&http);
                            let cart_ids: Vec<i64> = cart
                                .get_untracked()
                                .unwrap_or_default()
                                .iter()
                                .map(|item| item.id)
                                .collect();
                            if cart_ids.is_empty() {
                                return;
                            }
                            checkout_error.set(None);
                            leptos::task::spawn_local(async move {
                                // Default delivery address; the checkout screen
                                // lets the shopper pick another one.
                                let payload = OrderCreate { address_id: 0, cart_ids };
                                match api::create_order(&http, &payload).await {
                                    Ok(order) => {
                                        log::info!("order {} created", order.order_no);
                                        cart.refetch();
                                    }
                                    Err(err) => checkout_error.set(Some(err.to_string())),
                                }
                            });
                        }
                    }>
                        "Check out"
                    </button>
                </footer>
            </Suspense>

            <Show when=move || checkout_error.get().is_some()>
                <p class="cart-page__error">{move || checkout_error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
