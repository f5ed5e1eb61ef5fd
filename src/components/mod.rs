pub mod form_fields;
pub mod low_stock_widget;
pub mod profit_loss_widget;
pub mod reports;
pub mod sales_widget;
pub mod sidebar;
pub mod stock_in_form;
pub mod stock_out_form;
pub mod top_selling_widget;
