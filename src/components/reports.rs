//! Report panels opened from the dashboard's report menu.
//!
//! Each panel fetches on mount and shows a loading line until its data
//! arrives. Monetary values render with two decimals.

use leptos::prelude::*;

use crate::net::types::{Category, Product, SalesReport, SupplierReportItem, TopProduct, or_dash};
use crate::state::dashboard::ReportKind;
use crate::util::request::LatestRequest;
use crate::util::sales::{money, month_start, parse_date_input, today};

const REPORT_LIMIT: u32 = 10;

/// Fetch state of one report panel.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
enum Load<T> {
    Loading,
    Ready(T),
    Failed,
}

/// Fetch into `slot`, keeping only the latest response.
#[cfg(feature = "csr")]
fn fetch_into<T: Send + Sync + 'static>(
    latest: &LatestRequest,
    slot: RwSignal<Load<T>>,
    what: &'static str,
    fut: impl std::future::Future<Output = Result<T, crate::net::api::ApiError>> + 'static,
) {
    slot.set(Load::Loading);
    crate::util::request::spawn_latest(latest, fut, move |result| match result {
        Ok(value) => slot.set(Load::Ready(value)),
        Err(e) => {
            log::warn!("{what} report failed: {e}");
            slot.set(Load::Failed);
        }
    });
}

/// Render `ready` once `slot` holds data.
fn load_view<T: Clone + Send + Sync + 'static, V: IntoView + 'static>(
    slot: RwSignal<Load<T>>,
    ready: impl Fn(T) -> V + Send + Sync + 'static,
) -> impl IntoView {
    move || match slot.get() {
        Load::Loading => view! { <p class="report__status">"Loading..."</p> }.into_any(),
        Load::Failed => view! { <p class="report__status report__status--error">"Failed to load report."</p> }.into_any(),
        Load::Ready(value) => ready(value).into_any(),
    }
}

/// The report panel for `kind`.
pub fn report_panel(kind: ReportKind) -> AnyView {
    match kind {
        ReportKind::Monthly => view! { <MonthlyReport/> }.into_any(),
        ReportKind::Category => view! { <CategoryReport/> }.into_any(),
        ReportKind::TopSelling => view! { <TopSellingReport/> }.into_any(),
        ReportKind::Supplier => view! { <SupplierReport/> }.into_any(),
        ReportKind::Products => view! { <ProductsTable/> }.into_any(),
    }
}

#[component]
fn MonthlyReport() -> impl IntoView {
    let slot = RwSignal::new(Load::<SalesReport>::Loading);
    let latest = LatestRequest::scoped();

    #[cfg(feature = "csr")]
    {
        use chrono::Datelike;

        let now = today();
        fetch_into(&latest, slot, "monthly", crate::net::api::fetch_monthly_report(now.year(), now.month()));
    }
    #[cfg(not(feature = "csr"))]
    let _ = latest;

    let fallback_month = today().format("%B %Y").to_string();

    view! {
        <div class="report report--monthly">
            {load_view(slot, move |report: SalesReport| {
                let month = report.month.clone().unwrap_or_else(|| fallback_month.clone());
                view! {
                    <h2 class="report__title">{format!("Monthly Report - {month}")}</h2>
                    <div class="report__totals">
                        <p>{format!("Total Sales: {}", money(report.total_sales))}</p>
                        <p>{format!("Total Profit: {}", money(report.total_profit.unwrap_or(0.0)))}</p>
                        <p>{format!("Total Loss: {}", money(report.total_loss.unwrap_or(0.0)))}</p>
                        <p>{format!("Total Quantity Sold: {}", report.total_quantity_sold)}</p>
                    </div>
                    <table class="report__table">
                        <thead>
                            <tr>
                                <th>"Product"</th>
                                <th>"SKU"</th>
                                <th>"Qty"</th>
                                <th>"Sales"</th>
                                <th>"Cost"</th>
                                <th>"Profit"</th>
                                <th>"Loss"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {report
                                .product_sales
                                .into_iter()
                                .map(|sale| {
                                    view! {
                                        <tr>
                                            <td>{sale.product_name}</td>
                                            <td>{sale.sku}</td>
                                            <td>{sale.quantity}</td>
                                            <td>{money(sale.sale_total)}</td>
                                            <td>{money(sale.cost_total)}</td>
                                            <td>{money(sale.profit)}</td>
                                            <td>{money(sale.loss)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
            })}
        </div>
    }
}

#[component]
fn CategoryReport() -> impl IntoView {
    let slot = RwSignal::new(Load::<Vec<Category>>::Loading);
    let latest = LatestRequest::scoped();

    #[cfg(feature = "csr")]
    fetch_into(&latest, slot, "category", crate::net::api::fetch_categories());
    #[cfg(not(feature = "csr"))]
    let _ = latest;

    view! {
        <div class="report report--category">
            <h2 class="report__title">"Category Report"</h2>
            {load_view(slot, |categories: Vec<Category>| {
                view! {
                    <ul class="report__list">
                        {categories
                            .into_iter()
                            .map(|cat| view! { <li>{or_dash(cat.category_name.as_deref()).to_owned()}</li> })
                            .collect_view()}
                    </ul>
                }
            })}
        </div>
    }
}

#[component]
fn TopSellingReport() -> impl IntoView {
    let slot = RwSignal::new(Load::<Vec<TopProduct>>::Loading);
    let latest = LatestRequest::scoped();

    #[cfg(feature = "csr")]
    {
        use crate::util::sales::month_end;

        let now = today();
        let fut = crate::net::api::fetch_top_selling(month_start(now), month_end(now), REPORT_LIMIT);
        fetch_into(&latest, slot, "top selling", fut);
    }
    #[cfg(not(feature = "csr"))]
    let _ = (latest, REPORT_LIMIT);

    view! {
        <div class="report report--top-selling">
            <h2 class="report__title">"Top Selling Products"</h2>
            {load_view(slot, |products: Vec<TopProduct>| {
                if products.is_empty() {
                    return view! { <p class="report__status">"No products sold yet."</p> }.into_any();
                }
                view! {
                    <ol class="report__ranking">
                        {products
                            .into_iter()
                            .enumerate()
                            .map(|(rank, product)| {
                                view! {
                                    <li class="report__rank">
                                        <span>{format!("#{} {}", rank + 1, product.product_name)}</span>
                                        <span>{format!("{} sold", product.quantity_sold)}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                }
                .into_any()
            })}
        </div>
    }
}

#[component]
fn SupplierReport() -> impl IntoView {
    let slot = RwSignal::new(Load::<Vec<SupplierReportItem>>::Loading);
    let latest = LatestRequest::scoped();
    let now = today();
    let supplier_id = RwSignal::new(String::from("1"));
    let start = RwSignal::new(month_start(now));
    let end = RwSignal::new(now);
    let input_error = RwSignal::new(None::<&'static str>);

    let load = move || {
        let Ok(id) = supplier_id.get_untracked().trim().parse::<i64>() else {
            input_error.set(Some("Supplier ID must be a number."));
            return;
        };
        input_error.set(None);
        #[cfg(feature = "csr")]
        fetch_into(
            &latest,
            slot,
            "supplier",
            crate::net::api::fetch_supplier_report(id, start.get_untracked(), end.get_untracked()),
        );
        #[cfg(not(feature = "csr"))]
        let _ = (id, &latest);
    };
    load();

    let date_value = |day: chrono::NaiveDate| day.format("%Y-%m-%d").to_string();

    view! {
        <div class="report report--supplier">
            <h2 class="report__title">"Supplier Report"</h2>
            <form
                class="report__filters"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    load();
                }
            >
                <input
                    class="report__input"
                    type="number"
                    min="1"
                    prop:value=move || supplier_id.get()
                    on:input=move |ev| supplier_id.set(event_target_value(&ev))
                />
                <input
                    class="report__input"
                    type="date"
                    prop:value=move || date_value(start.get())
                    on:change=move |ev| {
                        if let Some(day) = parse_date_input(&event_target_value(&ev)) {
                            start.set(day);
                        }
                    }
                />
                <input
                    class="report__input"
                    type="date"
                    prop:value=move || date_value(end.get())
                    on:change=move |ev| {
                        if let Some(day) = parse_date_input(&event_target_value(&ev)) {
                            end.set(day);
                        }
                    }
                />
                <button class="report__button" type="submit">"Load"</button>
            </form>
            <Show when=move || input_error.get().is_some()>
                <p class="report__status report__status--error">{move || input_error.get().unwrap_or_default()}</p>
            </Show>
            {load_view(slot, |rows: Vec<SupplierReportItem>| {
                view! {
                    <table class="report__table">
                        <thead>
                            <tr>
                                <th>"Supplier"</th>
                                <th>"Product"</th>
                                <th>"Quantity"</th>
                                <th>"Threshold Price"</th>
                                <th>"Purchase Date"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td>{row.supplier_name}</td>
                                            <td>{or_dash(row.product_name.as_deref()).to_owned()}</td>
                                            <td>{row.quantity}</td>
                                            <td>{money(row.threshold_price)}</td>
                                            <td>{row.purchase_date}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
            })}
        </div>
    }
}

#[component]
fn ProductsTable() -> impl IntoView {
    let slot = RwSignal::new(Load::<Vec<Product>>::Loading);
    let latest = LatestRequest::scoped();

    #[cfg(feature = "csr")]
    fetch_into(&latest, slot, "products", crate::net::api::fetch_products());
    #[cfg(not(feature = "csr"))]
    let _ = latest;

    view! {
        <div class="report report--products">
            <h2 class="report__title">"Products"</h2>
            {load_view(slot, |products: Vec<Product>| {
                view! {
                    <table class="report__table">
                        <thead>
                            <tr>
                                <th>"Design Code"</th>
                                <th>"Product"</th>
                                <th>"Pattern"</th>
                                <th>"Brand"</th>
                                <th>"Cloth Type"</th>
                                <th>"Category"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {products
                                .into_iter()
                                .map(|p| {
                                    view! {
                                        <tr>
                                            <td>{p.design_code}</td>
                                            <td>{or_dash(p.product_name.as_deref()).to_owned()}</td>
                                            <td>{p.pattern}</td>
                                            <td>{or_dash(p.brand_name.as_deref()).to_owned()}</td>
                                            <td>{or_dash(p.cloth_type_name.as_deref()).to_owned()}</td>
                                            <td>{p.category_name}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
            })}
        </div>
    }
}
