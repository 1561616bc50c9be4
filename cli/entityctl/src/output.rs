//! Output formatting for CLI commands.

use colored::Colorize;
use mirror_entity_id::EntityId;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

/// Every representation of one entity ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityIdView {
    pub input: String,
    pub shard: Option<u16>,
    pub realm: Option<u16>,
    pub num: Option<u32>,
    pub entity_id: Option<String>,
    pub encoded_id: Option<i64>,
    pub evm_address: Option<String>,
}

impl EntityIdView {
    pub fn new(input: impl Into<String>, id: &EntityId) -> Self {
        Self {
            input: input.into(),
            shard: id.shard(),
            realm: id.realm(),
            num: id.num(),
            entity_id: id.to_display_string(),
            encoded_id: id.encoded_id(),
            evm_address: id.to_evm_address(),
        }
    }
}

/// Table row for [`EntityIdView`].
#[derive(Debug, Tabled)]
pub struct EntityIdRow {
    #[tabled(rename = "INPUT")]
    pub input: String,
    #[tabled(rename = "ENTITY ID")]
    pub entity_id: String,
    #[tabled(rename = "ENCODED")]
    pub encoded_id: String,
    #[tabled(rename = "EVM ADDRESS")]
    pub evm_address: String,
}

impl From<&EntityIdView> for EntityIdRow {
    fn from(view: &EntityIdView) -> Self {
        Self {
            input: view.input.clone(),
            entity_id: or_dash(view.entity_id.clone()),
            encoded_id: or_dash(view.encoded_id.map(|e| e.to_string())),
            evm_address: or_dash(view.evm_address.clone()),
        }
    }
}

/// Placeholder for absent values in tables.
pub fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

/// Print entity IDs in the specified format.
pub fn print_entity_ids(views: &[EntityIdView], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if views.is_empty() {
                println!("{}", "No entity IDs given.".dimmed());
            } else {
                let rows: Vec<EntityIdRow> = views.iter().map(EntityIdRow::from).collect();
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => println!("{}", format_json(views, "[]")),
    }
}

/// Print rows as a table, or their serializable source as JSON.
pub fn print_output<T: Serialize, R: Tabled>(data: &[T], rows: Vec<R>, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => println!("{}", format_json(data, "[]")),
    }
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_of_parsed_id() {
        let id = EntityId::of(0, 0, 1001).unwrap();
        let view = EntityIdView::new("1001", &id);
        assert_eq!(view.entity_id.as_deref(), Some("0.0.1001"));
        assert_eq!(view.encoded_id, Some(1001));

        let row = EntityIdRow::from(&view);
        assert_eq!(row.input, "1001");
        assert_eq!(row.evm_address, "0x00000000000000000000000000000000000003e9");
    }

    #[test]
    fn test_null_view_renders_dashes() {
        let view = EntityIdView::new("", &EntityId::NULL);
        let row = EntityIdRow::from(&view);
        assert_eq!(row.entity_id, "-");
        assert_eq!(row.encoded_id, "-");
        assert_eq!(row.evm_address, "-");
    }

    #[test]
    fn test_view_json() {
        let view = EntityIdView::new("0.0.0", &EntityId::of(0, 0, 0).unwrap());
        let json = format_json(&view, "{}");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["entity_id"], serde_json::Value::Null);
        assert_eq!(value["encoded_id"], 0);
        assert_eq!(value["num"], 0);
    }
}
