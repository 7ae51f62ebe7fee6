//! JSON-file content store.
//!
//! The file is an export of the content tables:
//! `{ "rooms": [ {...}, ... ], "services": [...], ... }`.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use lodge_core::{error::LodgeError, OrderBy, Query, Row, RowSource};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// In-memory tables loaded from a JSON export.
#[derive(Debug, Clone, Default)]
pub struct JsonStore {
    tables: HashMap<String, Vec<Row>>,
}

impl JsonStore {
    /// Read and parse the export at `path`.
    pub async fn open(path: &str) -> Result<Self, LodgeError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LodgeError::Store(format!("failed to read {path}: {e}")))?;
        let value: Value = serde_json::from_str(&content)?;
        let store = Self::from_value(value)?;
        info!(
            "Content store loaded from {path} ({} tables)",
            store.tables.len()
        );
        Ok(store)
    }

    /// Build a store from an already parsed export.
    ///
    /// Non-object rows are skipped with a warning; a non-object root or a
    /// table that is not an array is an error.
    pub fn from_value(value: Value) -> Result<Self, LodgeError> {
        let Value::Object(root) = value else {
            return Err(LodgeError::Store(
                "content export must be a JSON object of tables".to_string(),
            ));
        };

        let mut tables = HashMap::with_capacity(root.len());
        for (name, rows) in root {
            let Value::Array(rows) = rows else {
                return Err(LodgeError::Store(format!("table '{name}' is not an array")));
            };
            let total = rows.len();
            let rows: Vec<Row> = rows
                .into_iter()
                .filter_map(|row| match row {
                    Value::Object(obj) => Some(obj),
                    _ => None,
                })
                .collect();
            if rows.len() != total {
                warn!(
                    "table '{name}': skipped {} non-object rows",
                    total - rows.len()
                );
            }
            tables.insert(name, rows);
        }
        Ok(Self { tables })
    }

    /// Names of the loaded tables, sorted.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[async_trait]
impl RowSource for JsonStore {
    fn name(&self) -> &str {
        "json"
    }

    async fn select(&self, table: &str, query: &Query) -> Result<Vec<Row>, LodgeError> {
        let Some(rows) = self.tables.get(table) else {
            debug!("select from unknown table '{table}'");
            return Ok(Vec::new());
        };

        let mut out: Vec<Row> = match &query.eq {
            Some((column, value)) => rows
                .iter()
                .filter(|row| cell_matches(row.get(column), value))
                .cloned()
                .collect(),
            None => rows.clone(),
        };

        if let Some(order) = &query.order {
            sort_rows(&mut out, order);
        }
        Ok(out)
    }
}

/// Render a cell the way an equality filter sees it.
pub fn cell_text(cell: &Value) -> Option<String> {
    match cell {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn cell_matches(cell: Option<&Value>, value: &str) -> bool {
    cell.and_then(cell_text).is_some_and(|text| text == value)
}

/// Stable sort; rows without a value in the column stay at the end.
fn sort_rows(rows: &mut [Row], order: &OrderBy) {
    rows.sort_by(|a, b| {
        let a = a.get(&order.column).filter(|v| !v.is_null());
        let b = b.get(&order.column).filter(|v| !v.is_null());
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => {
                let ord = compare_cells(a, b);
                if order.descending {
                    ord.reverse()
                } else {
                    ord
                }
            }
        }
    });
}

/// Sort key for a non-null cell. Numbers come first, then RFC 3339
/// timestamps by instant, then other strings lexically, then everything
/// else. Each cell maps to one key, so the order is total.
#[derive(Debug, PartialEq, PartialOrd)]
enum SortKey<'a> {
    Number(f64),
    Timestamp(DateTime<FixedOffset>),
    Text(&'a str),
    Other,
}

fn sort_key(v: &Value) -> SortKey<'_> {
    match v {
        Value::Number(n) => SortKey::Number(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => match DateTime::parse_from_rfc3339(s) {
            Ok(ts) => SortKey::Timestamp(ts),
            Err(_) => SortKey::Text(s),
        },
        _ => SortKey::Other,
    }
}

fn compare_cells(a: &Value, b: &Value) -> Ordering {
    sort_key(a)
        .partial_cmp(&sort_key(b))
        .unwrap_or(Ordering::Equal)
}
