//! Output formatting and routing for prefix data.
//!
//! - [`format`] - cidr, csv and json serialization
//! - [`router`] - Console or file destination per family

mod format;
mod router;

pub use format::{format, OutputFormat};
pub use router::{emit, route, Destination, OutputPlan};
