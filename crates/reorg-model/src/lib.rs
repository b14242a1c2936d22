pub mod campaign;
pub mod error;
pub mod row;
pub mod rule;
pub mod ruleset;
pub mod value;

pub use campaign::{Campaign, Column};
pub use error::{ModelError, Result};
pub use row::{Row, row_from_pairs};
pub use rule::{Condition, ConditionOp, Rule, RuleKind};
pub use ruleset::RuleSet;
pub use value::CellValue;
