/// Represents pagination parameters for SQL queries
#[derive(Debug, Clone)]
pub struct Pagination {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Pagination {
    /// Create pagination with only limit
    pub fn limit_only(limit: u64) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
        }
    }

    /// Create pagination with only offset
    pub fn offset_only(offset: u64) -> Self {
        Self {
            limit: None,
            offset: Some(offset),
        }
    }

    /// Create pagination with both limit and offset
    pub fn limit_offset(limit: u64, offset: u64) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        let mut sql = String::new();

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        sql
    }

    /// Number of batches a given page size produces for a total item count
    ///
    /// Zero items produce zero batches; `batch_size` must be non-zero
    /// (callers validate before reaching the arithmetic).
    pub fn batch_count_for(total_items: u64, batch_size: u64) -> u64 {
        total_items.div_ceil(batch_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_only() {
        let pagination = Pagination::limit_only(5);
        assert_eq!(pagination.limit, Some(5));
        assert_eq!(pagination.offset, None);
        assert_eq!(pagination.to_sql(), " LIMIT 5");
    }

    #[test]
    fn test_offset_only() {
        let pagination = Pagination::offset_only(15);
        assert_eq!(pagination.limit, None);
        assert_eq!(pagination.offset, Some(15));
        assert_eq!(pagination.to_sql(), " OFFSET 15");
    }

    #[test]
    fn test_limit_offset() {
        let pagination = Pagination::limit_offset(100, 200);
        assert_eq!(pagination.to_sql(), " LIMIT 100 OFFSET 200");
    }

    #[test]
    fn test_batch_count_calculation() {
        assert_eq!(Pagination::batch_count_for(0, 100), 0);
        assert_eq!(Pagination::batch_count_for(1, 100), 1);
        assert_eq!(Pagination::batch_count_for(100, 100), 1);
        assert_eq!(Pagination::batch_count_for(101, 100), 2);
        assert_eq!(Pagination::batch_count_for(5, 2), 3);
    }
}
