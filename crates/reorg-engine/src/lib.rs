//! Rule-based column transformation engine.
//!
//! Pure, synchronous functions over decoded rows and a campaign's column
//! configuration. The engine performs no I/O and shares no state; callers
//! may parallelize across row batches freely.
//!
//! Anomalies never abort a transform: malformed rules degrade to no-ops,
//! missing fields are skipped, and unparseable numeric condition operands
//! evaluate as condition-not-met (see the module docs for the exact
//! policies).

pub mod apply;
pub mod condition;
pub mod pipeline;
pub mod transform;

pub use apply::apply_rule;
pub use condition::evaluate;
pub use pipeline::run_column;
pub use transform::{project_rows, transform_rows};
