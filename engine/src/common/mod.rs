pub mod errors;

pub use errors::{LookError, LookResult};
