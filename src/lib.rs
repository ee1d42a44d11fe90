pub mod dataset;
pub mod error;
pub mod guard;

pub use error::Error;
pub use guard::{check_file, series_max, Outcome, KE_LIMIT, KE_VARIABLE};
