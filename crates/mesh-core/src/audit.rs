//! Audit failures.
//!
//! An audit is a query that must return zero rows. When it does not, the
//! evaluator raises an [`AuditFailure`] carrying the query itself, so callers
//! can re-render it for whichever SQL dialect they need to show the user.

use std::fmt;
use std::sync::Arc;

/// A SQL query that can be rendered to text for a given dialect.
///
/// `None` asks for the query's default rendering.
pub trait RenderSql: fmt::Debug + Send + Sync {
    fn sql(&self, dialect: Option<&str>) -> String;
}

/// Pre-rendered SQL renders the same text for every dialect.
impl RenderSql for str {
    fn sql(&self, _dialect: Option<&str>) -> String {
        self.to_owned()
    }
}

impl RenderSql for String {
    fn sql(&self, dialect: Option<&str>) -> String {
        self.as_str().sql(dialect)
    }
}

/// An audit returned rows when it was expected to return none.
#[derive(Debug, Clone)]
pub struct AuditFailure {
    audit_name: String,
    count: u64,
    query: Arc<dyn RenderSql>,
    model_name: Option<String>,
    adapter_dialect: Option<String>,
}

impl AuditFailure {
    pub fn new(audit_name: impl Into<String>, count: u64, query: Arc<dyn RenderSql>) -> Self {
        Self {
            audit_name: audit_name.into(),
            count,
            query,
            model_name: None,
            adapter_dialect: None,
        }
    }

    /// Attach the model the audit ran against.
    #[must_use]
    pub fn with_model(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = Some(model_name.into());
        self
    }

    /// Record the dialect of the engine adapter that evaluated the query.
    #[must_use]
    pub fn with_adapter_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.adapter_dialect = Some(dialect.into());
        self
    }

    #[must_use]
    pub fn audit_name(&self) -> &str {
        &self.audit_name
    }

    /// Number of rows the audit query returned.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    #[must_use]
    pub fn query(&self) -> &dyn RenderSql {
        self.query.as_ref()
    }

    /// Name of the audited model. Empty names count as absent.
    #[must_use]
    pub fn model_name(&self) -> Option<&str> {
        non_empty(self.model_name.as_deref())
    }

    #[must_use]
    pub fn adapter_dialect(&self) -> Option<&str> {
        non_empty(self.adapter_dialect.as_deref())
    }

    /// Render the failing query.
    ///
    /// Uses `dialect` when given, otherwise the adapter dialect, otherwise the
    /// query's default rendering.
    #[must_use]
    pub fn sql(&self, dialect: Option<&str>) -> String {
        self.query.sql(non_empty(dialect).or_else(|| self.adapter_dialect()))
    }
}

impl fmt::Display for AuditFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Audit '{}'", self.audit_name)?;
        if let Some(model) = self.model_name() {
            write!(f, " for model '{model}'")?;
        }
        write!(
            f,
            " failed.\nGot {} results, expected 0.\n{}",
            self.count,
            self.sql(None)
        )
    }
}

impl std::error::Error for AuditFailure {}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
