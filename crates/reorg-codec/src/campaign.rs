//! Campaign document encode/decode.

use reorg_model::{Campaign, Column};

use crate::error::Result;
use crate::rules::{rules_from_storage, rules_to_storage};
use crate::storage::{StorageCampaign, StorageColumn};

/// Hydrate a campaign from its storage document.
pub fn decode_campaign(stored: &StorageCampaign) -> Result<Campaign> {
    let columns = stored
        .fields
        .iter()
        .map(decode_column)
        .collect::<Result<Vec<Column>>>()?;
    Ok(Campaign {
        id: stored.uuid.clone(),
        name: stored.name.clone(),
        description: stored.description.clone(),
        output_filename_template: stored.output_filename_template.clone(),
        columns,
        created_at: stored.created_at.clone(),
        updated_at: stored.updated_at.clone(),
    })
}

fn decode_column(stored: &StorageColumn) -> Result<Column> {
    Ok(Column {
        id: stored.id.clone(),
        source_name: stored.name.clone(),
        display_name: stored.display_name.clone(),
        required: stored.required,
        position: stored.order,
        rules: rules_from_storage(&stored.rules)?,
    })
}

/// Flatten a campaign into its storage document.
pub fn encode_campaign(campaign: &Campaign) -> StorageCampaign {
    StorageCampaign {
        uuid: campaign.id.clone(),
        name: campaign.name.clone(),
        description: campaign.description.clone(),
        output_filename_template: campaign.output_filename_template.clone(),
        fields: campaign.columns.iter().map(encode_column).collect(),
        created_at: campaign.created_at.clone(),
        updated_at: campaign.updated_at.clone(),
    }
}

fn encode_column(column: &Column) -> StorageColumn {
    StorageColumn {
        id: column.id.clone(),
        name: column.source_name.clone(),
        display_name: column.display_name.clone(),
        order: column.position,
        required: column.required,
        rules: rules_to_storage(&column.rules),
    }
}

/// Parse a campaign from its JSON document.
pub fn campaign_from_json(json: &str) -> Result<Campaign> {
    let stored: StorageCampaign = serde_json::from_str(json)?;
    decode_campaign(&stored)
}

/// Serialize a campaign to a pretty-printed JSON document.
pub fn campaign_to_json(campaign: &Campaign) -> Result<String> {
    Ok(serde_json::to_string_pretty(&encode_campaign(campaign))?)
}
