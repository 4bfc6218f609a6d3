pub mod aidhub_title;
pub mod dashboard;
pub mod navbar;
pub mod page;

pub use aidhub_title::AidhubTitleButton;
pub use dashboard::DashboardLayout;
pub use navbar::Navbar;
pub use page::Page;
