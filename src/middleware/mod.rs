// Middleware for CORS and panic recovery

pub mod catch_panic;
pub mod cors;

pub use catch_panic::*;
pub use cors::*;
