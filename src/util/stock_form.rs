//! Stock-in / stock-out form drafts and payload building.
//!
//! Inputs arrive as raw strings from the DOM. Drafts keep them verbatim so the
//! fields stay editable, and convert to typed payloads only on submit.

#[cfg(test)]
#[path = "stock_form_test.rs"]
mod stock_form_test;

use crate::net::api::StockInOptions;
use crate::net::types::{OptionItem, StockInPayload, StockOutPayload};

pub const ACCEPTED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

/// Why a selected image was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ImageRejection {
    #[error("Invalid file type. Please upload a JPEG, PNG, GIF, or WEBP image.")]
    UnsupportedType,

    #[error("File size exceeds 2MB. Please upload a smaller image.")]
    TooLarge,
}

/// Check an image's MIME type and size before accepting it.
///
/// # Errors
///
/// Returns the [`ImageRejection`] describing the first failed check.
pub fn validate_image(mime: &str, size: u64) -> Result<(), ImageRejection> {
    if !ACCEPTED_IMAGE_TYPES.contains(&mime) {
        return Err(ImageRejection::UnsupportedType);
    }
    if size > MAX_IMAGE_BYTES {
        return Err(ImageRejection::TooLarge);
    }
    Ok(())
}

/// A field that failed to convert on submit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required.")]
    Missing(&'static str),

    #[error("{0} must be a number.")]
    NotANumber(&'static str),

    #[error("{0} must be at least {1}.")]
    TooSmall(&'static str, i64),
}

fn required_text(label: &'static str, raw: &str) -> Result<String, FormError> {
    let value = raw.trim();
    if value.is_empty() { Err(FormError::Missing(label)) } else { Ok(value.to_owned()) }
}

fn required_int(label: &'static str, raw: &str, min: i64) -> Result<i64, FormError> {
    let value = required_text(label, raw)?
        .parse::<i64>()
        .map_err(|_| FormError::NotANumber(label))?;
    if value < min {
        return Err(FormError::TooSmall(label, min));
    }
    Ok(value)
}

#[allow(clippy::cast_precision_loss)]
fn required_price(label: &'static str, raw: &str, min: i64) -> Result<f64, FormError> {
    let value = required_text(label, raw)?
        .parse::<f64>()
        .map_err(|_| FormError::NotANumber(label))?;
    if !value.is_finite() {
        return Err(FormError::NotANumber(label));
    }
    if value < min as f64 {
        return Err(FormError::TooSmall(label, min));
    }
    Ok(value)
}

fn optional_price(label: &'static str, raw: &str) -> Result<Option<f64>, FormError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    required_price(label, raw, 0).map(Some)
}

fn selected<'a>(options: &'a [OptionItem], raw_id: &str) -> Option<&'a OptionItem> {
    let id = raw_id.trim().parse::<i64>().ok()?;
    options.iter().find(|o| o.id == id)
}

/// `"{design} - {brand} - {cloth}"`, omitting missing parts.
pub fn derive_product_name(design_code: &str, brand: Option<&str>, cloth: Option<&str>) -> String {
    let mut name = design_code.trim().to_owned();
    for part in [brand, cloth].into_iter().flatten().filter(|p| !p.is_empty()) {
        name.push_str(" - ");
        name.push_str(part);
    }
    name.trim().to_owned()
}

/// `"{color} {cloth}"`, omitting missing parts.
pub fn derive_pattern(color: Option<&str>, cloth: Option<&str>) -> String {
    [color, cloth]
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Raw stock-in inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StockInDraft {
    pub category_id: String,
    pub brand_id: String,
    pub cloth_type_id: String,
    pub color_id: String,
    pub size_id: String,
    pub design_code: String,
    pub sku: String,
    pub quantity: String,
    pub base_price: String,
    pub tax_per_unit: String,
    pub transport_per_unit: String,
    pub selling_price: String,
    pub purchase_date: String,
    pub supplier_name: String,
    pub remarks: String,
}

/// Option lists the stock-in draft refers to by id.
#[derive(Clone, Copy, Debug)]
pub struct StockInChoices<'a> {
    pub brands: &'a [OptionItem],
    pub cloth_types: &'a [OptionItem],
    pub colors: &'a [OptionItem],
}

impl<'a> From<&'a StockInOptions> for StockInChoices<'a> {
    fn from(options: &'a StockInOptions) -> Self {
        Self { brands: &options.brands, cloth_types: &options.cloth_types, colors: &options.colors }
    }
}

impl StockInDraft {
    /// Read-only product name shown in the form.
    pub fn product_name(&self, choices: StockInChoices<'_>) -> String {
        derive_product_name(
            &self.design_code,
            selected(choices.brands, &self.brand_id).map(|o| o.name.as_str()),
            selected(choices.cloth_types, &self.cloth_type_id).map(|o| o.name.as_str()),
        )
    }

    /// Read-only pattern shown in the form.
    pub fn pattern(&self, choices: StockInChoices<'_>) -> String {
        derive_pattern(
            selected(choices.colors, &self.color_id).map(|o| o.name.as_str()),
            selected(choices.cloth_types, &self.cloth_type_id).map(|o| o.name.as_str()),
        )
    }

    /// Convert to the wire payload.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormError`] in field order.
    pub fn to_payload(&self, choices: StockInChoices<'_>) -> Result<StockInPayload, FormError> {
        Ok(StockInPayload {
            category_id: required_int("Category", &self.category_id, 0)?,
            brand_id: required_int("Brand", &self.brand_id, 0)?,
            cloth_type_id: required_int("Cloth Type", &self.cloth_type_id, 0)?,
            color_id: required_int("Color", &self.color_id, 0)?,
            size_id: required_int("Size", &self.size_id, 0)?,
            design_code: required_text("Design Code", &self.design_code)?,
            pattern: self.pattern(choices),
            sku: required_text("SKU", &self.sku)?,
            quantity: required_int("Quantity", &self.quantity, 0)?,
            base_price: required_price("Base Price", &self.base_price, 0)?,
            tax_per_unit: optional_price("Tax Per Unit", &self.tax_per_unit)?,
            transport_per_unit: optional_price("Transport Per Unit", &self.transport_per_unit)?,
            selling_price: optional_price("Selling Price", &self.selling_price)?,
            purchase_date: required_text("Purchase Date", &self.purchase_date)?,
            supplier_name: required_text("Supplier Name", &self.supplier_name)?,
            remarks: self.remarks.trim().to_owned(),
            product_name: self.product_name(choices),
        })
    }
}

/// Raw stock-out inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StockOutDraft {
    pub sku: String,
    pub quantity: String,
    pub sale_date: String,
    pub remarks: String,
    pub selling_price: String,
    pub final_price: String,
}

impl StockOutDraft {
    /// Convert to the wire payload.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormError`] in field order.
    pub fn to_payload(&self) -> Result<StockOutPayload, FormError> {
        Ok(StockOutPayload {
            sku: required_text("SKU", &self.sku)?,
            quantity: required_int("Quantity", &self.quantity, 1)?,
            sale_date: required_text("Sale Date", &self.sale_date)?,
            remarks: self.remarks.trim().to_owned(),
            selling_price: required_price("Selling Price", &self.selling_price, 1)?,
            final_price: required_price("Final Price", &self.final_price, 1)?,
        })
    }
}
