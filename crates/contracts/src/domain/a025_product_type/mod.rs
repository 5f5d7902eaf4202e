pub mod aggregate;
pub mod enums;
pub mod events;
pub mod form;

pub use aggregate::{AttributeDetails, ProductTypeDetails, ProductTypeWeight};
pub use enums::{AttributeType, TaxRateType, WeightUnit};
pub use events::ReorderEvent;
pub use form::{ChoiceType, ProductTypeForm};
