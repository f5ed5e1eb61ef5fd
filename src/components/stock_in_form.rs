//! Stock-in form: register received goods with an optional product image.
//!
//! DESIGN
//! ======
//! Dropdown choices are fetched once on mount. The product name and pattern
//! are derived from the selected options and shown read-only. The chosen image
//! is validated on selection and kept outside the reactive graph because
//! browser file handles are not `Send`.

use leptos::prelude::*;

use super::form_fields::{Field, FormStatus, InputKind, StatusLine, derived_field, select_field, text_field, textarea_field};
use crate::net::api::StockInOptions;
use crate::util::request::LatestRequest;
use crate::util::stock_form::{StockInChoices, StockInDraft};

const SAVED: &str = "Stock successfully added!";
const SAVE_FAILED: &str = "Failed to add stock. Please try again.";

macro_rules! draft_field {
    ($name:ident) => {
        Field::<StockInDraft> { get: |d| &d.$name, set: |d, v| d.$name = v }
    };
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn file_size(file: &web_sys::File) -> u64 {
    file.size() as u64
}

#[component]
pub fn StockInForm() -> impl IntoView {
    let options = RwSignal::new(StockInOptions::default());
    let draft = RwSignal::new(StockInDraft::default());
    let status = RwSignal::new(None::<FormStatus>);
    let busy = RwSignal::new(false);
    let image_name = RwSignal::new(None::<String>);
    let image_input = NodeRef::<leptos::html::Input>::new();
    let latest = LatestRequest::scoped();
    #[cfg(feature = "csr")]
    let image_file = StoredValue::new_local(None::<web_sys::File>);

    #[cfg(feature = "csr")]
    {
        let loader = LatestRequest::scoped();
        crate::util::request::spawn_latest(&loader, crate::net::api::fetch_stock_in_options(), move |result| {
            match result {
                Ok(fetched) => options.set(fetched),
                Err(e) => log::warn!("stock-in options failed: {e}"),
            }
        });
    }

    let product_name = move || options.with(|o| draft.with(|d| d.product_name(StockInChoices::from(o))));
    let pattern = move || options.with(|o| draft.with(|d| d.pattern(StockInChoices::from(o))));

    let on_image = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            match crate::util::stock_form::validate_image(&file.type_(), file_size(&file)) {
                Ok(()) => {
                    image_name.set(Some(file.name()));
                    image_file.set_value(Some(file));
                    status.set(None);
                }
                Err(rejection) => {
                    input.set_value("");
                    image_name.set(None);
                    image_file.set_value(None);
                    status.set(Some(FormStatus::Failed(rejection.to_string())));
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match options.with(|o| draft.with(|d| d.to_payload(StockInChoices::from(o)))) {
            Ok(payload) => payload,
            Err(e) => {
                status.set(Some(FormStatus::Failed(e.to_string())));
                return;
            }
        };
        busy.set(true);
        status.set(None);

        #[cfg(feature = "csr")]
        {
            let image = image_file.get_value();
            crate::util::request::spawn_latest(
                &latest,
                async move { crate::net::api::submit_stock_in(&payload, image).await },
                move |result| {
                    busy.set(false);
                    match result {
                        Ok(()) => {
                            draft.set(StockInDraft::default());
                            image_file.set_value(None);
                            image_name.set(None);
                            if let Some(input) = image_input.get_untracked() {
                                input.set_value("");
                            }
                            status.set(Some(FormStatus::Saved(SAVED)));
                        }
                        Err(e) => {
                            log::warn!("stock-in submit failed: {e}");
                            status.set(Some(FormStatus::Failed(SAVE_FAILED.to_owned())));
                        }
                    }
                },
            );
        }
        #[cfg(not(feature = "csr"))]
        let _ = (payload, &latest, image_input, SAVED, SAVE_FAILED);
    };

    view! {
        <form class="stock-form stock-form--in" on:submit=on_submit>
            <h2 class="stock-form__title">"Stock In Form"</h2>
            <div class="stock-form__grid">
                {select_field("Category", Signal::derive(move || options.with(|o| o.categories.clone())), draft, draft_field!(category_id))}
                {select_field("Brand", Signal::derive(move || options.with(|o| o.brands.clone())), draft, draft_field!(brand_id))}
                {select_field("Cloth Type", Signal::derive(move || options.with(|o| o.cloth_types.clone())), draft, draft_field!(cloth_type_id))}
                {select_field("Color", Signal::derive(move || options.with(|o| o.colors.clone())), draft, draft_field!(color_id))}
                {select_field("Size", Signal::derive(move || options.with(|o| o.sizes.clone())), draft, draft_field!(size_id))}
                {text_field("Design Code", InputKind::Text, true, draft, draft_field!(design_code))}
                {text_field("SKU", InputKind::Text, true, draft, draft_field!(sku))}
                {text_field("Quantity", InputKind::Number, true, draft, draft_field!(quantity))}
                {text_field("Base Price", InputKind::Price, true, draft, draft_field!(base_price))}
                {text_field("Tax Per Unit", InputKind::Price, false, draft, draft_field!(tax_per_unit))}
                {text_field("Transport Per Unit", InputKind::Price, false, draft, draft_field!(transport_per_unit))}
                {text_field("Selling Price", InputKind::Price, false, draft, draft_field!(selling_price))}
                {text_field("Purchase Date", InputKind::Date, true, draft, draft_field!(purchase_date))}
                {text_field("Supplier Name", InputKind::Text, true, draft, draft_field!(supplier_name))}
                {derived_field("Product Name", product_name)}
                {derived_field("Pattern", pattern)}
                {textarea_field("Remarks", draft, draft_field!(remarks))}
                <label class="form-field">
                    <span class="form-field__label">"Product Image"</span>
                    <input
                        class="form-field__input"
                        type="file"
                        accept="image/jpeg,image/png,image/gif,image/webp"
                        node_ref=image_input
                        on:change=on_image
                    />
                    <Show when=move || image_name.get().is_some()>
                        <span class="form-field__hint">{move || image_name.get().unwrap_or_default()}</span>
                    </Show>
                </label>
            </div>
            <StatusLine status=status/>
            <button class="stock-form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Add Stock" }}
            </button>
        </form>
    }
}
