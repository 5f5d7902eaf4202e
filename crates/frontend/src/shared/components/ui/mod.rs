pub mod button;
pub mod checkbox;

pub use button::Button;
pub use checkbox::ControlledCheckbox;
