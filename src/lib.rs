pub mod error;
pub mod decimal;
pub mod precision;
pub mod config;
pub mod vieta;
pub mod accelerate;
pub mod pipeline;
pub mod arctan;
pub mod accuracy;
pub mod scan;

pub use config::{Params, PiConfig, Schedule};
pub use decimal::Decimal;
pub use error::{PiError, Result};
pub use pipeline::{compute, compute_pi, PiEstimate};
pub use precision::{PrecisionContext, Rounding};
