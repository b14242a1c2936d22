//! Flattened storage/wire representation.
//!
//! Matches the backend's JSON schema: camelCase field names, a single scalar
//! `value` per rule (replace-text folds its two terms into it), and absent
//! fields omitted rather than written as `null`.

use serde::{Deserialize, Serialize};

use reorg_model::CellValue;

/// Storage form of a rule.
///
/// `value` semantics depend on `rule_type`; for `REPLACE_TEXT` it holds
/// `search|replace` joined on the separator character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageRule {
    pub id: String,
    #[serde(rename = "type")]
    pub rule_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<CellValue>,
    #[serde(rename = "conditionType", skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<String>,
    #[serde(rename = "conditionValue", skip_serializing_if = "Option::is_none")]
    pub condition_value: Option<CellValue>,
    /// Older documents lack this field; decoding falls back to the rule's
    /// position in the sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Storage form of a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageColumn {
    pub id: String,
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub order: u32,
    pub required: bool,
    #[serde(default)]
    pub rules: Vec<StorageRule>,
}

/// Storage form of a campaign document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageCampaign {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "outputFilenameTemplate", default)]
    pub output_filename_template: String,
    pub fields: Vec<StorageColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted_not_null() {
        let rule = StorageRule {
            id: "r1".to_string(),
            rule_type: "TO_UPPERCASE".to_string(),
            value: None,
            condition_type: None,
            condition_value: None,
            order: Some(0),
        };
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, r#"{"id":"r1","type":"TO_UPPERCASE","order":0}"#);
    }

    #[test]
    fn missing_optional_fields_decode() {
        let rule: StorageRule =
            serde_json::from_str(r#"{"id":"r1","type":"TO_LOWERCASE"}"#).unwrap();
        assert_eq!(rule.value, None);
        assert_eq!(rule.order, None);
    }

    #[test]
    fn scalar_values_accept_strings_and_numbers() {
        let rule: StorageRule = serde_json::from_str(
            r#"{"id":"r1","type":"MULTIPLY_BY","value":3,"conditionValue":"5"}"#,
        )
        .unwrap();
        assert_eq!(rule.value, Some(CellValue::Number(3.0)));
        assert_eq!(rule.condition_value, Some(CellValue::Text("5".to_string())));
    }
}
