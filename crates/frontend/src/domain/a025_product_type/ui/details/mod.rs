//! Product Type Details UI Module
//!
//! - view_model.rs: form state and commands
//! - page.rs: page component (layout, wiring of owner callbacks)
//! - sections/: form sections rendered by the page

mod page;
mod sections;
mod view_model;

pub use page::ProductTypeDetailsPage;
pub use view_model::ProductTypeDetailsVm;
