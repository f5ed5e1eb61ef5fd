//! Wire DTOs for the inventory backend's REST endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Values the backend may
//! omit are `Option` or `#[serde(default)]` so one missing column never fails
//! a whole report.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// DROPDOWN OPTIONS
// =============================================================================

/// A selectable id/name pair for stock-in dropdowns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionItem {
    pub id: i64,
    pub name: String,
}

/// Conversion of an option endpoint row into an [`OptionItem`].
pub trait IntoOption {
    /// Label prefix used when the row has no name, e.g. `"Brand"`.
    const KIND: &'static str;

    fn id(&self) -> i64;
    fn name(&self) -> Option<&str>;

    fn into_option(self) -> OptionItem
    where
        Self: Sized,
    {
        let id = self.id();
        let name = self
            .name()
            .filter(|n| !n.trim().is_empty())
            .map_or_else(|| format!("{} {id}", Self::KIND), str::to_owned);
        OptionItem { id, name }
    }
}

/// Map every row into an option item.
pub fn to_options<T: IntoOption>(rows: Vec<T>) -> Vec<OptionItem> {
    rows.into_iter().map(IntoOption::into_option).collect()
}

/// Row of `GET /api/categories`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i64,
    #[serde(default)]
    pub category_name: Option<String>,
}

impl IntoOption for Category {
    const KIND: &'static str = "Category";
    fn id(&self) -> i64 {
        self.category_id
    }
    fn name(&self) -> Option<&str> {
        self.category_name.as_deref()
    }
}

/// Row of `GET /api/brands`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Brand {
    pub id: i64,
    #[serde(default)]
    pub brand: Option<String>,
}

impl IntoOption for Brand {
    const KIND: &'static str = "Brand";
    fn id(&self) -> i64 {
        self.id
    }
    fn name(&self) -> Option<&str> {
        self.brand.as_deref()
    }
}

/// Row of `GET /api/cloth-types`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothType {
    pub id: i64,
    #[serde(default)]
    pub cloth_type: Option<String>,
}

impl IntoOption for ClothType {
    const KIND: &'static str = "Cloth Type";
    fn id(&self) -> i64 {
        self.id
    }
    fn name(&self) -> Option<&str> {
        self.cloth_type.as_deref()
    }
}

/// Row of `GET /api/colors`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Color {
    pub id: i64,
    #[serde(default)]
    pub color: Option<String>,
}

impl IntoOption for Color {
    const KIND: &'static str = "Color";
    fn id(&self) -> i64 {
        self.id
    }
    fn name(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

/// Row of `GET /api/sizes`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Size {
    pub id: i64,
    #[serde(default)]
    pub size: Option<String>,
}

impl IntoOption for Size {
    const KIND: &'static str = "Size";
    fn id(&self) -> i64 {
        self.id
    }
    fn name(&self) -> Option<&str> {
        self.size.as_deref()
    }
}

// =============================================================================
// STOCK MOVEMENTS
// =============================================================================

/// JSON `data` part of the multipart `POST /api/stock-in`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockInPayload {
    pub category_id: i64,
    pub brand_id: i64,
    pub cloth_type_id: i64,
    pub color_id: i64,
    pub size_id: i64,
    pub design_code: String,
    pub pattern: String,
    pub sku: String,
    pub quantity: i64,
    pub base_price: f64,
    pub tax_per_unit: Option<f64>,
    pub transport_per_unit: Option<f64>,
    pub selling_price: Option<f64>,
    pub purchase_date: String,
    pub supplier_name: String,
    pub remarks: String,
    pub product_name: String,
}

/// Body of `POST /api/stock-out`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockOutPayload {
    pub sku: String,
    pub quantity: i64,
    pub sale_date: String,
    pub remarks: String,
    pub selling_price: f64,
    pub final_price: f64,
}

// =============================================================================
// REPORTS
// =============================================================================

/// One product line of a sales report.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSale {
    pub product_name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub sale_total: f64,
    #[serde(default)]
    pub cost_total: f64,
    #[serde(default)]
    pub profit: f64,
    #[serde(default)]
    pub loss: f64,
}

/// Response of the daily / weekly / monthly / yearly sales reports.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub total_sales: f64,
    #[serde(default)]
    pub total_profit: Option<f64>,
    #[serde(default)]
    pub total_loss: Option<f64>,
    #[serde(default)]
    pub total_quantity_sold: i64,
    #[serde(default)]
    pub product_sales: Vec<ProductSale>,
}

/// Row of `GET /api/reports/low-stock`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockItem {
    pub product_name: String,
    pub stock_qty: i64,
}

/// Row of `GET /api/reports/top-selling`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub product_name: String,
    pub quantity_sold: i64,
    #[serde(default)]
    pub product_image: Option<String>,
}

/// Row of `GET /api/reports/supplier/{id}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierReportItem {
    pub supplier_name: String,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: i64,
    #[serde(default)]
    pub threshold_price: f64,
    pub purchase_date: String,
}

/// Row of `GET /api/products`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub design_code: String,
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub cloth_type_name: Option<String>,
    #[serde(default)]
    pub category_name: String,
}

/// Placeholder for a missing table cell.
pub fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}
