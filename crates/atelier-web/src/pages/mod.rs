//! Page components

mod dashboard;
mod designers;
mod inventory;

pub use dashboard::Dashboard;
pub use designers::Designers;
pub use inventory::Inventory;
