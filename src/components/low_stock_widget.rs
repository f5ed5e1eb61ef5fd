//! Products at or below their stock threshold.

use leptos::prelude::*;

use crate::net::types::LowStockItem;
use crate::util::request::LatestRequest;

#[component]
pub fn LowStockWidget() -> impl IntoView {
    let items = RwSignal::new(Vec::<LowStockItem>::new());
    let latest = LatestRequest::scoped();

    #[cfg(feature = "csr")]
    crate::util::request::spawn_latest(&latest, crate::net::api::fetch_low_stock(), move |result| match result {
        Ok(rows) => items.set(rows),
        Err(e) => log::warn!("low stock report failed: {e}"),
    });
    #[cfg(not(feature = "csr"))]
    let _ = latest;

    view! {
        <div class="widget low-stock-widget">
            <h2 class="widget__title">"Low Stock Alerts"</h2>
            <ul class="low-stock-widget__list">
                <For each=move || items.get() key=|item| item.product_name.clone() let:item>
                    <li class="low-stock-widget__item">
                        <span class="low-stock-widget__name">{item.product_name}</span>
                        <span class="low-stock-widget__qty">{format!("{} left", item.stock_qty)}</span>
                    </li>
                </For>
            </ul>
        </div>
    }
}
