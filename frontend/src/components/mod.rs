pub mod account_form;
pub mod account_table;
pub mod inputs;
pub mod market_value_chart;
pub mod modals;
pub mod type_value_table;

pub use account_form::AccountFormSection;
pub use account_table::AccountTable;
pub use market_value_chart::MarketValueChart;
pub use type_value_table::TypeValueTable;
