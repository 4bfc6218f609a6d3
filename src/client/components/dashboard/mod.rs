pub mod badge;
pub mod beneficiary_form;
pub mod error_console;
pub mod export_button;
pub mod layout;
pub mod modal;
pub mod navbar;
pub mod package_form;
pub mod stat_card;
pub mod tab_bar;

pub use badge::StatusBadge;
pub use beneficiary_form::BeneficiaryForm;
pub use error_console::ErrorConsole;
pub use export_button::ExportButton;
pub use layout::DashboardLayout;
pub use modal::ModalHost;
pub use navbar::DashboardNavbar;
pub use package_form::PackageForm;
pub use stat_card::StatsGrid;
pub use tab_bar::TabBar;
