//! Best sellers of the current month.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api::resolve_image_url;
use crate::net::types::TopProduct;
use crate::util::request::LatestRequest;

const WIDGET_LIMIT: u32 = 5;

#[component]
pub fn TopSellingWidget() -> impl IntoView {
    let products = RwSignal::new(Vec::<TopProduct>::new());
    let latest = LatestRequest::scoped();

    #[cfg(feature = "csr")]
    {
        use crate::util::sales::{month_end, month_start, today};

        let now = today();
        crate::util::request::spawn_latest(
            &latest,
            crate::net::api::fetch_top_selling(month_start(now), month_end(now), WIDGET_LIMIT),
            move |result| match result {
                Ok(rows) => products.set(rows),
                Err(e) => log::warn!("top selling report failed: {e}"),
            },
        );
    }
    #[cfg(not(feature = "csr"))]
    let _ = (latest, WIDGET_LIMIT);

    let config = ApiConfig::from_build_env();

    view! {
        <div class="widget top-selling-widget">
            <h2 class="widget__title">"Top Selling Products"</h2>
            <Show
                when=move || !products.with(Vec::is_empty)
                fallback=|| view! { <p class="widget__status">"No products sold yet."</p> }
            >
                <ul class="top-selling-widget__list">
                    {
                        let config = config.clone();
                        move || {
                            products
                                .get()
                                .into_iter()
                                .map(|product| {
                                    let src = resolve_image_url(&config, product.product_image.as_deref());
                                    view! {
                                        <li class="top-selling-widget__item">
                                            <img
                                                class="top-selling-widget__image"
                                                src=src
                                                alt=product.product_name.clone()
                                            />
                                            <span class="top-selling-widget__name">{product.product_name}</span>
                                            <span class="top-selling-widget__qty">
                                                {format!("{} sold", product.quantity_sold)}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }
                    }
                </ul>
            </Show>
        </div>
    }
}
