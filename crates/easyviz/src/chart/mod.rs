//! Chart configuration: kinds, parameters and validation.

mod kind;
mod request;
mod selector;

pub use kind::{ChartKind, ParseChartKindError};
pub use request::{ChartParams, ChartRequest, RejectReason, ValidationResult};
pub use selector::{BinRange, ChartSelector, SelectorConfig};
