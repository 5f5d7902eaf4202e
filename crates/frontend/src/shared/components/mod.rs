pub mod app_header;
pub mod page_header;
pub mod save_button_bar;
pub mod table;
pub mod ui;

pub use app_header::AppHeader;
pub use page_header::PageHeader;
pub use save_button_bar::{ConfirmButtonTransitionState, SaveButtonBar};
