pub mod form_state;

pub use form_state::{confirm_leave, field_error, non_field_errors, FormState};
