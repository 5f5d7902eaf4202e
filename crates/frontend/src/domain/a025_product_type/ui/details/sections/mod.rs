//! Form sections of the Product Type details page

mod attributes;
mod general;
mod shipping;
mod taxes;

pub use attributes::AttributesSection;
pub use general::GeneralSection;
pub use shipping::ShippingSection;
pub use taxes::TaxesSection;
