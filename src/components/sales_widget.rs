//! Sales overview widget with a period selector and a bar chart.
//!
//! Changing any filter refetches the report for the new period. Only the
//! latest response is applied; older ones are dropped.

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;

use crate::util::request::LatestRequest;
use crate::util::sales::{PeriodKind, SalesBar, SalesFilter, bar_percent, month_name, parse_date_input, today, year_options};

const LOAD_FAILED: &str = "Failed to load sales data.";

#[component]
pub fn SalesWidget() -> impl IntoView {
    let filter = RwSignal::new(SalesFilter::starting(today()));
    let bars = RwSignal::new(Vec::<SalesBar>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);
    let latest = LatestRequest::scoped();
    let kind = Memo::new(move |_| filter.with(|f| f.kind));

    Effect::new(move || {
        let period = filter.get().period();
        loading.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        crate::util::request::spawn_latest(
            &latest,
            async move { crate::net::api::fetch_sales_report(&period).await },
            move |result| {
                match result {
                    Ok(report) => bars.set(crate::util::sales::aggregate_sales(&report.product_sales)),
                    Err(e) => {
                        log::warn!("sales report failed: {e}");
                        error.set(Some(LOAD_FAILED));
                    }
                }
                loading.set(false);
            },
        );
        #[cfg(not(feature = "csr"))]
        let _ = (period, &latest, LOAD_FAILED);
    });

    let on_kind = move |ev: leptos::ev::Event| {
        if let Some(kind) = PeriodKind::from_value(&event_target_value(&ev)) {
            filter.update(|f| f.kind = kind);
        }
    };

    view! {
        <div class="widget sales-widget">
            <div class="widget__header">
                <h2 class="widget__title">"Sales Overview"</h2>
                <select class="widget__select" on:change=on_kind>
                    {PeriodKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <option value=kind.value() selected=move || filter.get().kind == kind>
                                    {kind.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="sales-widget__filters">{move || filter_inputs(kind.get(), filter)}</div>
            {move || {
                if loading.get() {
                    view! { <p class="widget__status">"Loading..."</p> }.into_any()
                } else if let Some(msg) = error.get() {
                    view! { <p class="widget__status widget__status--error">{msg}</p> }.into_any()
                } else {
                    view! { <SalesChart bars=bars.get()/> }.into_any()
                }
            }}
        </div>
    }
}

fn date_input(value: NaiveDate, on_pick: impl Fn(NaiveDate) + Send + Sync + 'static) -> impl IntoView {
    view! {
        <input
            class="widget__select"
            type="date"
            prop:value=value.format("%Y-%m-%d").to_string()
            on:change=move |ev| {
                if let Some(day) = parse_date_input(&event_target_value(&ev)) {
                    on_pick(day);
                }
            }
        />
    }
}

fn year_select(filter: RwSignal<SalesFilter>) -> impl IntoView {
    let current = today().year();
    view! {
        <select
            class="widget__select"
            on:change=move |ev| {
                if let Ok(year) = event_target_value(&ev).parse::<i32>() {
                    filter.update(|f| f.year = year);
                }
            }
        >
            {year_options(current)
                .into_iter()
                .map(|year| {
                    view! {
                        <option value=year.to_string() selected=move || filter.get().year == year>
                            {year}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

fn filter_inputs(kind: PeriodKind, filter: RwSignal<SalesFilter>) -> AnyView {
    let current = filter.get_untracked();
    match kind {
        PeriodKind::Daily => date_input(current.date, move |day| filter.update(|f| f.date = day)).into_any(),
        PeriodKind::Weekly => view! {
            {date_input(current.start, move |day| filter.update(|f| f.start = day))}
            {date_input(current.end, move |day| filter.update(|f| f.end = day))}
        }
        .into_any(),
        PeriodKind::Monthly => view! {
            <select
                class="widget__select"
                on:change=move |ev| {
                    if let Ok(month) = event_target_value(&ev).parse::<u32>() {
                        filter.update(|f| f.month = month);
                    }
                }
            >
                {(1..=12u32)
                    .map(|month| {
                        view! {
                            <option value=month.to_string() selected=move || filter.get().month == month>
                                {month_name(month)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {year_select(filter)}
        }
        .into_any(),
        PeriodKind::Yearly => year_select(filter).into_any(),
    }
}

#[component]
fn SalesChart(bars: Vec<SalesBar>) -> impl IntoView {
    if bars.is_empty() {
        return view! { <p class="widget__status">"No sales in this period."</p> }.into_any();
    }
    let max = bars.iter().map(|b| b.sales).max().unwrap_or(0);
    view! {
        <div class="sales-chart">
            {bars
                .into_iter()
                .map(|bar| {
                    let width = format!("width: {:.1}%", bar_percent(bar.sales, max));
                    view! {
                        <div class="sales-chart__row">
                            <span class="sales-chart__label">{bar.name}</span>
                            <div class="sales-chart__track">
                                <div class="sales-chart__bar" style=width></div>
                            </div>
                            <span class="sales-chart__value">{bar.sales}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
