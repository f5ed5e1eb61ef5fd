//! Sales-widget period selection and chart data shaping.

#[cfg(test)]
#[path = "sales_test.rs"]
mod sales_test;

use chrono::{Datelike, NaiveDate};

use crate::net::types::{ProductSale, SalesReport};

/// Granularity offered by the sales widget's selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PeriodKind {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl PeriodKind {
    pub const ALL: [Self; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly];

    pub fn value(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    pub fn from_value(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.value() == raw)
    }
}

/// Filter values behind the selector. Every kind keeps its own inputs so
/// switching back and forth does not lose them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SalesFilter {
    pub kind: PeriodKind,
    pub date: NaiveDate,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub year: i32,
    pub month: u32,
}

impl SalesFilter {
    /// Monthly view of the month containing `today`.
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            kind: PeriodKind::Monthly,
            date: today,
            start: today,
            end: today,
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn period(&self) -> SalesPeriod {
        match self.kind {
            PeriodKind::Daily => SalesPeriod::Daily { date: self.date },
            PeriodKind::Weekly => SalesPeriod::Weekly { start: self.start, end: self.end },
            PeriodKind::Monthly => SalesPeriod::Monthly { year: self.year, month: self.month },
            PeriodKind::Yearly => SalesPeriod::Yearly { year: self.year },
        }
    }
}

/// A concrete report request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SalesPeriod {
    Daily { date: NaiveDate },
    Weekly { start: NaiveDate, end: NaiveDate },
    Monthly { year: i32, month: u32 },
    Yearly { year: i32 },
}

impl SalesPeriod {
    pub fn report_path(&self) -> String {
        match self {
            Self::Daily { date } => format!("/api/reports/daily?date={}", date.format("%Y-%m-%d")),
            Self::Weekly { start, end } => format!(
                "/api/reports/weekly?startDate={}&endDate={}",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            ),
            Self::Monthly { year, month } => crate::net::api::monthly_report_path(*year, *month),
            Self::Yearly { year } => format!("/api/reports/yearly?year={year}"),
        }
    }
}

/// One bar of the sales chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SalesBar {
    pub name: String,
    pub sales: i64,
}

/// Sum quantities per product name, in order of first appearance.
pub fn aggregate_sales(sales: &[ProductSale]) -> Vec<SalesBar> {
    let mut bars: Vec<SalesBar> = Vec::new();
    for sale in sales {
        match bars.iter_mut().find(|b| b.name == sale.product_name) {
            Some(bar) => bar.sales += sale.quantity,
            None => bars.push(SalesBar { name: sale.product_name.clone(), sales: sale.quantity }),
        }
    }
    bars
}

/// Bar length as a percentage of the tallest bar, clamped to `0..=100`.
#[allow(clippy::cast_precision_loss)]
pub fn bar_percent(value: i64, max: i64) -> f64 {
    if max <= 0 || value <= 0 {
        return 0.0;
    }
    (value as f64 / max as f64 * 100.0).min(100.0)
}

/// Profit and loss totals, with missing totals read as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProfitLoss {
    pub profit: f64,
    pub loss: f64,
}

impl ProfitLoss {
    pub fn from_report(report: &SalesReport) -> Self {
        Self { profit: report.total_profit.unwrap_or(0.0), loss: report.total_loss.unwrap_or(0.0) }
    }

    /// Profit share of the combined total, in percent.
    pub fn profit_share(&self) -> f64 {
        let total = self.profit.max(0.0) + self.loss.max(0.0);
        if total <= 0.0 { 0.0 } else { self.profit.max(0.0) / total * 100.0 }
    }
}

/// Monetary amount with two decimals.
pub fn money(value: f64) -> String {
    format!("{value:.2}")
}

/// Years offered by the yearly selector: five back, four ahead.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (current_year - 5..current_year + 5).collect()
}

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September", "October", "November",
    "December",
];

/// English month name for `month` in `1..=12`.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// First day of the month containing `day`.
pub fn month_start(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// Last day of the month containing `day`.
pub fn month_end(day: NaiveDate) -> NaiveDate {
    let (year, month) = if day.month() == 12 { (day.year() + 1, 1) } else { (day.year(), day.month() + 1) };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(day)
}

/// Today's date in the browser's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` value from a date input.
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
