use crate::error::LodgeError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// An untyped row as returned by the content store.
///
/// Localized columns follow the `<base>_<lang>` convention; nothing else
/// about the shape is guaranteed.
pub type Row = Map<String, Value>;

/// Sort key for a select. Rows missing the column sort last either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub descending: bool,
}

/// The subset of a table query the site needs: one equality filter and
/// one sort column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub eq: Option<(String, String)>,
    pub order: Option<OrderBy>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep rows whose `column` renders to `value`.
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.eq = Some((column.to_string(), value.to_string()));
        self
    }

    pub fn order_asc(mut self, column: &str) -> Self {
        self.order = Some(OrderBy {
            column: column.to_string(),
            descending: false,
        });
        self
    }

    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some(OrderBy {
            column: column.to_string(),
            descending: true,
        });
        self
    }
}

/// Content store trait: a row-returning query service.
///
/// Backends (a hosted database, a JSON export, a test fixture) implement
/// this to feed the content views.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Rows of `table` matching `query`. An unknown table yields no rows.
    async fn select(&self, table: &str, query: &Query) -> Result<Vec<Row>, LodgeError>;

    /// The row of `table` whose `id` column equals `id`.
    async fn fetch_by_id(&self, table: &str, id: &str) -> Result<Option<Row>, LodgeError> {
        let query = Query::new().eq("id", id);
        Ok(self.select(table, &query).await?.into_iter().next())
    }

    /// The first row of a single-row table (`contact`, `about_us`).
    async fn fetch_first(&self, table: &str) -> Result<Option<Row>, LodgeError> {
        Ok(self.select(table, &Query::new()).await?.into_iter().next())
    }
}
