pub mod dashboard;
pub mod mapping;
pub mod upload;

pub use dashboard::{dashboard_page, DashboardVm};
pub use mapping::mapping_page;
pub use upload::upload_page;
