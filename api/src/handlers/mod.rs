pub mod error;

pub use error::handle_token_error;
