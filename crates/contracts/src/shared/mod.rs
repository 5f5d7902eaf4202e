pub mod user_error;

pub use user_error::UserError;
