pub mod coerce;
pub mod error;
pub mod types;

pub use error::handler_404;
