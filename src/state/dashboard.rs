//! Dashboard shell state: which modal and report are open.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of widgets so each widget only
//! owns its own fetched data.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Reports selectable from the "Generate Report" menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Monthly,
    Category,
    TopSelling,
    Supplier,
    Products,
}

impl ReportKind {
    pub const ALL: [Self; 5] = [Self::Monthly, Self::Category, Self::TopSelling, Self::Supplier, Self::Products];

    /// Stable menu id.
    pub fn id(self) -> u8 {
        match self {
            Self::Monthly => 1,
            Self::Category => 2,
            Self::TopSelling => 3,
            Self::Supplier => 4,
            Self::Products => 5,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly Report",
            Self::Category => "Category Report",
            Self::TopSelling => "Top Selling Products",
            Self::Supplier => "Supplier Report",
            Self::Products => "Products Table",
        }
    }

    /// CSS modifier for the menu tile.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Category => "category",
            Self::TopSelling => "top-selling",
            Self::Supplier => "supplier",
            Self::Products => "products",
        }
    }
}

/// Local UI state of the dashboard shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub stock_in_open: bool,
    pub stock_out_open: bool,
    pub report_menu_open: bool,
    pub active_report: Option<ReportKind>,
}

impl DashboardState {
    /// Open the stock-in modal. Only one modal is shown at a time.
    pub fn open_stock_in(&mut self) {
        self.stock_in_open = true;
        self.stock_out_open = false;
    }

    pub fn close_stock_in(&mut self) {
        self.stock_in_open = false;
    }

    /// Open the stock-out modal. Only one modal is shown at a time.
    pub fn open_stock_out(&mut self) {
        self.stock_out_open = true;
        self.stock_in_open = false;
    }

    pub fn close_stock_out(&mut self) {
        self.stock_out_open = false;
    }

    pub fn toggle_report_menu(&mut self) {
        self.report_menu_open = !self.report_menu_open;
    }

    pub fn select_report(&mut self, report: ReportKind) {
        self.active_report = Some(report);
    }

    pub fn close_report(&mut self) {
        self.active_report = None;
    }

    pub fn modal_open(&self) -> bool {
        self.stock_in_open || self.stock_out_open
    }
}

/// Which sidebar section is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarSection {
    #[default]
    None,
    Profile,
}

impl SidebarSection {
    /// Expand `section`, or collapse it if it is already open.
    pub fn toggle(&mut self, section: Self) {
        *self = if *self == section { Self::None } else { section };
    }
}
