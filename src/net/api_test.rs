use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn monthly_report_path_formats_query() {
    assert_eq!(monthly_report_path(2025, 8), "/api/reports/monthly?year=2025&month=8");
}

#[test]
fn top_selling_path_formats_dates_and_limit() {
    assert_eq!(
        top_selling_path(date(2025, 8, 1), date(2025, 8, 31), 5),
        "/api/reports/top-selling?startDate=2025-08-01&endDate=2025-08-31&limit=5"
    );
}

#[test]
fn supplier_report_path_embeds_id() {
    assert_eq!(
        supplier_report_path(2, date(2025, 8, 1), date(2025, 8, 17)),
        "/api/reports/supplier/2?startDate=2025-08-01&endDate=2025-08-17"
    );
}

#[test]
fn image_urls_resolve_against_api_base() {
    let config = ApiConfig::with_base_url(Some("http://api.test"));
    assert_eq!(resolve_image_url(&config, None), DEFAULT_PRODUCT_IMAGE);
    assert_eq!(resolve_image_url(&config, Some("  ")), DEFAULT_PRODUCT_IMAGE);
    assert_eq!(
        resolve_image_url(&config, Some("https://cdn.example.com/a.jpg")),
        "https://cdn.example.com/a.jpg"
    );
    assert_eq!(resolve_image_url(&config, Some("/uploads/a.jpg")), "http://api.test/uploads/a.jpg");
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_builds_report_unavailable() {
    let result = futures::executor::block_on(fetch_low_stock());
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status(503).to_string(), "server responded with status 503");
    assert_eq!(ApiError::Unavailable.to_string(), "not available outside the browser");
}
