//! Inventory dashboard shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only rendered when the route guard admits the dashboard. Widgets own their
//! fetched data; this page owns which modal and report are open.

use leptos::prelude::*;

use crate::components::{
    low_stock_widget::LowStockWidget, profit_loss_widget::ProfitLossWidget, reports::report_panel,
    sales_widget::SalesWidget, sidebar::Sidebar, stock_in_form::StockInForm, stock_out_form::StockOutForm,
    top_selling_widget::TopSellingWidget,
};
use crate::state::dashboard::{DashboardState, ReportKind};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());
    let stock_in_open = Memo::new(move |_| state.with(|s| s.stock_in_open));
    let stock_out_open = Memo::new(move |_| state.with(|s| s.stock_out_open));
    let menu_open = Memo::new(move |_| state.with(|s| s.report_menu_open));
    let active_report = Memo::new(move |_| state.with(|s| s.active_report));

    let close_stock_in = Callback::new(move |()| state.update(DashboardState::close_stock_in));
    let close_stock_out = Callback::new(move |()| state.update(DashboardState::close_stock_out));

    view! {
        <div class="dashboard">
            <Sidebar/>
            <main class="dashboard__main">
                <div class="dashboard__row">
                    <SalesWidget/>
                    <ProfitLossWidget/>
                </div>
                <div class="dashboard__row">
                    <LowStockWidget/>
                    <TopSellingWidget/>
                </div>

                <div class="dashboard__actions">
                    <button class="action-button action-button--in" type="button" on:click=move |_| state.update(DashboardState::open_stock_in)>
                        "Stock In"
                    </button>
                    <button class="action-button action-button--out" type="button" on:click=move |_| state.update(DashboardState::open_stock_out)>
                        "Stock Out"
                    </button>
                    <button class="action-button action-button--report" type="button" on:click=move |_| state.update(DashboardState::toggle_report_menu)>
                        "Generate Report"
                    </button>
                </div>

                <Show when=move || menu_open.get()>
                    <div class="report-menu">
                        {ReportKind::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <button
                                        class=move || {
                                            let active = if active_report.get() == Some(kind) { " report-menu__tile--active" } else { "" };
                                            format!("report-menu__tile report-menu__tile--{}{active}", kind.css_modifier())
                                        }
                                        type="button"
                                        on:click=move |_| state.update(|s| s.select_report(kind))
                                    >
                                        {kind.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>

                <div class="dashboard__report">{move || active_report.get().map(report_panel)}</div>

                <Show when=move || stock_in_open.get()>
                    <Modal on_close=close_stock_in>
                        <StockInForm/>
                    </Modal>
                </Show>
                <Show when=move || stock_out_open.get()>
                    <Modal on_close=close_stock_out>
                        <StockOutForm/>
                    </Modal>
                </Show>
            </main>
        </div>
    }
}

#[component]
fn Modal(on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown tabindex="0">
                <button class="dialog__close" type="button" on:click=move |_| on_close.run(())>
                    "\u{d7}"
                </button>
                {children()}
            </div>
        </div>
    }
}
