//! Value types shown on the dashboard

mod metrics;
mod server;
mod severity;
mod trend;

pub use metrics::*;
pub use server::*;
pub use severity::*;
pub use trend::*;
