use super::{Pagination, WhereClause};
use sqlx::{PgPool, Row};

/// Select query over one entity table
///
/// Cloneable value the query-customization hook mutates and the batcher
/// later rebuilds into identifier-page and fetch queries.
#[derive(Debug, Clone)]
pub struct SelectQuery {
    base_table: String,
    select_fields: Vec<String>,
    joins: Vec<String>,
    where_clauses: Vec<WhereClause>,
    order_by: Vec<String>,
    pagination: Option<Pagination>,
}

impl SelectQuery {
    /// Create a new select query for the given table
    pub fn new(table: &str) -> Self {
        Self {
            base_table: table.to_string(),
            select_fields: vec!["*".to_string()],
            joins: Vec::new(),
            where_clauses: Vec::new(),
            order_by: Vec::new(),
            pagination: None,
        }
    }

    /// Set specific fields to select
    pub fn select(mut self, fields: &[&str]) -> Self {
        self.select_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Add an INNER JOIN
    pub fn inner_join(mut self, table: &str, on_condition: &str) -> Self {
        self.joins.push(format!("INNER JOIN {table} ON {on_condition}"));
        self
    }

    /// Add a LEFT JOIN
    pub fn left_join(mut self, table: &str, on_condition: &str) -> Self {
        self.joins.push(format!("LEFT JOIN {table} ON {on_condition}"));
        self
    }

    /// Add a WHERE clause
    pub fn where_clause(mut self, clause: WhereClause) -> Self {
        self.where_clauses.push(clause);
        self
    }

    /// Add a simple WHERE condition
    pub fn where_eq(self, field: &str, value: serde_json::Value) -> Self {
        self.where_clause(WhereClause::simple(field, "=", value))
    }

    /// Add WHERE IN condition
    pub fn where_in(self, field: &str, values: Vec<serde_json::Value>) -> Self {
        self.where_clause(WhereClause::in_condition(field, values))
    }

    /// Add raw WHERE condition
    pub fn where_raw(self, sql: &str) -> Self {
        self.where_clause(WhereClause::raw(sql))
    }

    /// Add ORDER BY clause
    pub fn order_by(mut self, field: &str, direction: &str) -> Self {
        self.order_by.push(format!("{field} {direction}"));
        self
    }

    /// Add ORDER BY ASC
    pub fn order_asc(self, field: &str) -> Self {
        self.order_by(field, "ASC")
    }

    /// Add ORDER BY DESC
    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, "DESC")
    }

    /// Add LIMIT clause
    pub fn limit(mut self, limit: u64) -> Self {
        if let Some(ref mut pagination) = self.pagination {
            pagination.limit = Some(limit);
        } else {
            self.pagination = Some(Pagination::limit_only(limit));
        }
        self
    }

    /// Add OFFSET clause
    pub fn offset(mut self, offset: u64) -> Self {
        if let Some(ref mut pagination) = self.pagination {
            pagination.offset = Some(offset);
        } else {
            self.pagination = Some(Pagination::offset_only(offset));
        }
        self
    }

    pub fn table(&self) -> &str {
        &self.base_table
    }

    /// Build the complete SQL query string
    pub fn build_sql(&self) -> String {
        let mut sql = String::new();

        sql.push_str("SELECT ");
        sql.push_str(&self.select_fields.join(", "));
        sql.push_str(&format!(" FROM {}", self.base_table));

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }

        if !self.where_clauses.is_empty() {
            sql.push_str(" WHERE ");
            let where_parts: Vec<String> = self
                .where_clauses
                .iter()
                .map(|clause| clause.to_sql())
                .collect();
            sql.push_str(&where_parts.join(" AND "));
        }

        if !self.order_by.is_empty() {
            sql.push_str(&format!(" ORDER BY {}", self.order_by.join(", ")));
        }

        if let Some(ref pagination) = self.pagination {
            sql.push_str(&pagination.to_sql());
        }

        sql
    }

    /// Execute the query and return all rows
    pub async fn fetch_all<T>(&self, pool: &PgPool) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
    {
        let sql = self.build_sql();
        sqlx::query_as::<_, T>(&sql).fetch_all(pool).await
    }

    /// Execute count query
    ///
    /// Ordering and pagination are stripped so the count reflects the full
    /// scoped selection, not the current page.
    pub async fn count(&self, pool: &PgPool) -> Result<i64, sqlx::Error> {
        let mut count_query = self.clone();
        count_query.select_fields = vec!["COUNT(*)".to_string()];
        count_query.order_by.clear();
        count_query.pagination = None;

        let sql = count_query.build_sql();
        let row = sqlx::query(&sql).fetch_one(pool).await?;

        Ok(row.get::<i64, _>(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_query_building() {
        let query = SelectQuery::new("products")
            .select(&["id", "code", "name"])
            .where_eq(
                "enabled",
                serde_json::Value::Bool(true),
            )
            .order_asc("id")
            .limit(10);

        let sql = query.build_sql();
        assert!(sql.contains("SELECT id, code, name"));
        assert!(sql.contains("FROM products"));
        assert!(sql.contains("enabled = true"));
        assert!(sql.contains("ORDER BY id ASC"));
        assert!(sql.contains("LIMIT 10"));
    }

    #[test]
    fn test_join_query_building() {
        let query = SelectQuery::new("products p")
            .inner_join("product_channels pc", "pc.product_id = p.id")
            .left_join("product_translations pt", "pt.product_id = p.id")
            .where_raw("pc.channel_code = 'WEB-EU'");

        let sql = query.build_sql();
        assert!(sql.contains("INNER JOIN product_channels pc ON pc.product_id = p.id"));
        assert!(sql.contains("LEFT JOIN product_translations pt ON pt.product_id = p.id"));
        assert!(sql.contains("WHERE pc.channel_code = 'WEB-EU'"));
    }

    #[test]
    fn test_where_in_query_building() {
        let ids: Vec<serde_json::Value> = [3i64, 4]
            .iter()
            .map(|id| serde_json::Value::Number((*id).into()))
            .collect();
        let query = SelectQuery::new("products").where_in("id", ids);

        assert!(query.build_sql().contains("id IN (3, 4)"));
    }

    #[test]
    fn test_limit_offset_composition() {
        let query = SelectQuery::new("products").limit(100).offset(200);
        assert!(query.build_sql().ends_with(" LIMIT 100 OFFSET 200"));
    }
}
