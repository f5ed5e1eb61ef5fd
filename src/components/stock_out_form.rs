//! Stock-out form: record a sale against a SKU.

use leptos::prelude::*;

use super::form_fields::{Field, FormStatus, InputKind, StatusLine, text_field, textarea_field};
use crate::util::request::LatestRequest;
use crate::util::stock_form::StockOutDraft;

const SAVED: &str = "Stock successfully updated!";
const SAVE_FAILED: &str = "Failed to update stock. Please try again.";

macro_rules! draft_field {
    ($name:ident) => {
        Field::<StockOutDraft> { get: |d| &d.$name, set: |d, v| d.$name = v }
    };
}

#[component]
pub fn StockOutForm() -> impl IntoView {
    let draft = RwSignal::new(StockOutDraft::default());
    let status = RwSignal::new(None::<FormStatus>);
    let busy = RwSignal::new(false);
    let latest = LatestRequest::scoped();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match draft.with(StockOutDraft::to_payload) {
            Ok(payload) => payload,
            Err(e) => {
                status.set(Some(FormStatus::Failed(e.to_string())));
                return;
            }
        };
        busy.set(true);
        status.set(None);

        #[cfg(feature = "csr")]
        crate::util::request::spawn_latest(
            &latest,
            async move { crate::net::api::submit_stock_out(&payload).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(()) => {
                        draft.set(StockOutDraft::default());
                        status.set(Some(FormStatus::Saved(SAVED)));
                    }
                    Err(e) => {
                        log::warn!("stock-out submit failed: {e}");
                        status.set(Some(FormStatus::Failed(SAVE_FAILED.to_owned())));
                    }
                }
            },
        );
        #[cfg(not(feature = "csr"))]
        let _ = (payload, &latest, SAVED, SAVE_FAILED);
    };

    view! {
        <form class="stock-form stock-form--out" on:submit=on_submit>
            <h2 class="stock-form__title">"Stock Out Form"</h2>
            <div class="stock-form__grid">
                {text_field("SKU", InputKind::Text, true, draft, draft_field!(sku))}
                {text_field("Quantity", InputKind::Number, true, draft, draft_field!(quantity))}
                {text_field("Sale Date", InputKind::DateTime, true, draft, draft_field!(sale_date))}
                {textarea_field("Remarks", draft, draft_field!(remarks))}
                {text_field("Selling Price", InputKind::Price, true, draft, draft_field!(selling_price))}
                {text_field("Final Price", InputKind::Price, true, draft, draft_field!(final_price))}
            </div>
            <StatusLine status=status/>
            <button class="stock-form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Processing..." } else { "Process Stock Out" }}
            </button>
        </form>
    }
}
