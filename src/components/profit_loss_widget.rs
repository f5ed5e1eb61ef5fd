//! Profit versus loss totals for the current month.

use leptos::prelude::*;

use crate::util::request::LatestRequest;
use crate::util::sales::{ProfitLoss, money, today};

#[component]
pub fn ProfitLossWidget() -> impl IntoView {
    let totals = RwSignal::new(ProfitLoss::default());
    let latest = LatestRequest::scoped();

    #[cfg(feature = "csr")]
    {
        use chrono::Datelike;

        let now = today();
        crate::util::request::spawn_latest(
            &latest,
            crate::net::api::fetch_monthly_report(now.year(), now.month()),
            move |result| match result {
                Ok(report) => totals.set(ProfitLoss::from_report(&report)),
                Err(e) => log::warn!("profit/loss report failed: {e}"),
            },
        );
    }
    #[cfg(not(feature = "csr"))]
    let _ = latest;

    let share = move || format!("width: {:.1}%", totals.get().profit_share());

    view! {
        <div class="widget profit-loss-widget">
            <h2 class="widget__title">"Profit vs Loss"</h2>
            <p class="widget__subtitle">{move || today().format("%B %Y").to_string()}</p>
            <div class="profit-loss-widget__split">
                <div class="profit-loss-widget__profit" style=share></div>
            </div>
            <dl class="profit-loss-widget__legend">
                <dt>"Profit"</dt>
                <dd class="profit-loss-widget__value--profit">{move || money(totals.get().profit)}</dd>
                <dt>"Loss"</dt>
                <dd class="profit-loss-widget__value--loss">{move || money(totals.get().loss)}</dd>
            </dl>
        </div>
    }
}
