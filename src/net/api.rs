//! REST helpers for the inventory backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`, carrying the session's
//! bearer token when one is stored.
//! Native builds: stubs returning [`ApiError::Unavailable`], since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed widget fetch
//! degrades to an inline message without affecting the rest of the dashboard.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use chrono::NaiveDate;

use super::types::{
    Brand, Category, ClothType, Color, LowStockItem, OptionItem, Product, SalesReport, Size, StockOutPayload,
    SupplierReportItem, TopProduct, to_options,
};
#[cfg(feature = "csr")]
use super::types::StockInPayload;
use crate::config::ApiConfig;
use crate::util::sales::SalesPeriod;

pub const CATEGORIES_PATH: &str = "/api/categories";
pub const BRANDS_PATH: &str = "/api/brands";
pub const CLOTH_TYPES_PATH: &str = "/api/cloth-types";
pub const COLORS_PATH: &str = "/api/colors";
pub const SIZES_PATH: &str = "/api/sizes";
pub const PRODUCTS_PATH: &str = "/api/products";
pub const STOCK_IN_PATH: &str = "/api/stock-in";
pub const STOCK_OUT_PATH: &str = "/api/stock-out";
pub const LOW_STOCK_PATH: &str = "/api/reports/low-stock";

/// Shown when a product has no image of its own.
pub const DEFAULT_PRODUCT_IMAGE: &str = "/default-product.jpg";

/// Errors produced by dashboard REST calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("response parse failed: {0}")]
    Parse(String),

    #[error("not available outside the browser")]
    Unavailable,
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn monthly_report_path(year: i32, month: u32) -> String {
    format!("/api/reports/monthly?year={year}&month={month}")
}

pub fn top_selling_path(start: NaiveDate, end: NaiveDate, limit: u32) -> String {
    format!("/api/reports/top-selling?startDate={}&endDate={}&limit={limit}", iso(start), iso(end))
}

pub fn supplier_report_path(supplier_id: i64, start: NaiveDate, end: NaiveDate) -> String {
    format!("/api/reports/supplier/{supplier_id}?startDate={}&endDate={}", iso(start), iso(end))
}

/// Resolve a product image reference against the API base.
///
/// Absolute `http(s)` URLs are kept; relative paths are served by the backend.
pub fn resolve_image_url(config: &ApiConfig, image: Option<&str>) -> String {
    match image.map(str::trim).filter(|u| !u.is_empty()) {
        None => DEFAULT_PRODUCT_IMAGE.to_owned(),
        Some(url) if url.starts_with("http") => url.to_owned(),
        Some(url) => config.endpoint(url),
    }
}

#[cfg(feature = "csr")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::auth::app_session_store().token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "csr")]
fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        log::warn!("{} responded {}", resp.url(), resp.status());
        Err(ApiError::Status(resp.status()))
    }
}

/// `GET` a JSON document from `path` under the configured base URL.
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = ApiConfig::from_build_env().endpoint(path);
        let resp = authorized(gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let resp = ensure_ok(resp)?;
        resp.json::<T>().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

async fn fetch_options<T: serde::de::DeserializeOwned + super::types::IntoOption>(
    path: &str,
) -> Result<Vec<OptionItem>, ApiError> {
    get_json::<Vec<T>>(path).await.map(to_options)
}

/// Dropdown choices for the stock-in form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StockInOptions {
    pub categories: Vec<OptionItem>,
    pub brands: Vec<OptionItem>,
    pub cloth_types: Vec<OptionItem>,
    pub colors: Vec<OptionItem>,
    pub sizes: Vec<OptionItem>,
}

/// Fetch all five option lists concurrently.
///
/// # Errors
///
/// Returns the first [`ApiError`] if any list fails.
pub async fn fetch_stock_in_options() -> Result<StockInOptions, ApiError> {
    #[cfg(feature = "csr")]
    {
        let (categories, brands, cloth_types, colors, sizes) = futures::try_join!(
            fetch_options::<Category>(CATEGORIES_PATH),
            fetch_options::<Brand>(BRANDS_PATH),
            fetch_options::<ClothType>(CLOTH_TYPES_PATH),
            fetch_options::<Color>(COLORS_PATH),
            fetch_options::<Size>(SIZES_PATH),
        )?;
        Ok(StockInOptions { categories, brands, cloth_types, colors, sizes })
    }
    #[cfg(not(feature = "csr"))]
    {
        let categories = fetch_options::<Category>(CATEGORIES_PATH).await?;
        let brands = fetch_options::<Brand>(BRANDS_PATH).await?;
        let cloth_types = fetch_options::<ClothType>(CLOTH_TYPES_PATH).await?;
        let colors = fetch_options::<Color>(COLORS_PATH).await?;
        let sizes = fetch_options::<Size>(SIZES_PATH).await?;
        Ok(StockInOptions { categories, brands, cloth_types, colors, sizes })
    }
}

/// Category rows for the category report.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request or decoding fails.
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    get_json(CATEGORIES_PATH).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request or decoding fails.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    get_json(PRODUCTS_PATH).await
}

/// Sales report for the selected period.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request or decoding fails.
pub async fn fetch_sales_report(period: &SalesPeriod) -> Result<SalesReport, ApiError> {
    get_json(&period.report_path()).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request or decoding fails.
pub async fn fetch_monthly_report(year: i32, month: u32) -> Result<SalesReport, ApiError> {
    get_json(&monthly_report_path(year, month)).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request or decoding fails.
pub async fn fetch_low_stock() -> Result<Vec<LowStockItem>, ApiError> {
    get_json(LOW_STOCK_PATH).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request or decoding fails.
pub async fn fetch_top_selling(start: NaiveDate, end: NaiveDate, limit: u32) -> Result<Vec<TopProduct>, ApiError> {
    get_json(&top_selling_path(start, end, limit)).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request or decoding fails.
pub async fn fetch_supplier_report(
    supplier_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<SupplierReportItem>, ApiError> {
    get_json(&supplier_report_path(supplier_id, start, end)).await
}

/// Record a sale via `POST /api/stock-out`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects it.
pub async fn submit_stock_out(payload: &StockOutPayload) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = ApiConfig::from_build_env().endpoint(STOCK_OUT_PATH);
        let resp = authorized(gloo_net::http::Request::post(&url))
            .json(payload)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        ensure_ok(resp).map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Add stock via multipart `POST /api/stock-in`: an optional `image` part and
/// a `data` part holding the JSON payload.
///
/// # Errors
///
/// Returns an [`ApiError`] if the form cannot be built, the request fails, or
/// the server rejects it.
#[cfg(feature = "csr")]
pub async fn submit_stock_in(payload: &StockInPayload, image: Option<web_sys::File>) -> Result<(), ApiError> {
    let json = serde_json::to_string(payload).map_err(|e| ApiError::Request(e.to_string()))?;
    let form = web_sys::FormData::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;
    if let Some(file) = image.as_ref() {
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(|e| ApiError::Request(format!("{e:?}")))?;
    }
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&json));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| ApiError::Request(format!("{e:?}")))?;
    form.append_with_blob("data", &blob)
        .map_err(|e| ApiError::Request(format!("{e:?}")))?;

    let url = ApiConfig::from_build_env().endpoint(STOCK_IN_PATH);
    let resp = authorized(gloo_net::http::Request::post(&url))
        .body(form)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    ensure_ok(resp).map(|_| ())
}
