//! Dashboard: headline numbers for the day plus today's orders.

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::{AppContext, use_route_guard};
use crate::net::api;

#[component]
pub fn DashboardPage() -> impl IntoView {
    use_route_guard();

    let ctx = expect_context::<AppContext>();

    let http = Arc::clone(&ctx.http);
    let user_count = LocalResource::new(move || {
        let http = Arc::clone(&http);
        async move { api::query_user_count(&http).await.unwrap_or_default() }
    });

    let http = Arc::clone(&ctx.http);
    let today_money = LocalResource::new(move || {
        let http = Arc::clone(&http);
        async move { api::query_today_money(&http).await.unwrap_or_default() }
    });

    let http = Arc::clone(&ctx.http);
    let today_orders = LocalResource::new(move || {
        let http = Arc::clone(&http);
        async move { api::query_today_orders(&http).await.unwrap_or_default() }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                <div class="dashboard-page__stats">
                    <div class="stat-card">
                        <span class="stat-card__label">"Registered users"</span>
                        <span class="stat-card__value">
                            {move || user_count.get().map_or_else(|| "-".to_owned(), |n| n.to_string())}
                        </span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Today's turnover"</span>
                        <span class="stat-card__value">
                            {move || {
                                today_money
                                    .get()
                                    .map_or_else(|| "-".to_owned(), |amount| format!("¥{amount:.2}"))
                            }}
                        </span>
                    </div>
                </div>

                <table class="dashboard-page__orders">
                    <thead>
                        <tr>
                            <th>"Order"</th>
                            <th>"Game"</th>
                            <th>"Amount"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            today_orders
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|order| {
                                    view! {
                                        <tr>
                                            <td>{order.id}</td>
                                            <td>{order.game_name}</td>
                                            <td>{format!("¥{:.2}", order.amount)}</td>
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
