//! Configuration codec.
//!
//! Maps between the in-memory campaign model (`reorg-model`) and the
//! flattened storage/wire representation used by the persistence backend,
//! including the legacy `search|replace` folding of replace-text rules.

pub mod campaign;
pub mod error;
pub mod rules;
pub mod storage;

pub use campaign::{campaign_from_json, campaign_to_json, decode_campaign, encode_campaign};
pub use error::{CodecError, Result};
pub use rules::{REPLACE_SEPARATOR, rules_from_storage, rules_to_storage};
pub use storage::{StorageCampaign, StorageColumn, StorageRule};
