//! Record-store query builders.
//!
//! Queries render as PostgREST-style query strings; in-memory stores
//! interpret the same structures directly.

use super::models::Table;

pub const CREATED_AT: &str = "created_at";

/// Sort direction on a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Collection read: filters, ordering and limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub table: Table,
    pub eq: Vec<(String, String)>,
    pub order: Option<(String, Direction)>,
    pub limit: Option<usize>,
}

impl ListQuery {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            eq: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Newest first, the order every list view uses.
    pub fn newest_first(table: Table, limit: usize) -> Self {
        Self::new(table).order_by(CREATED_AT, Direction::Desc).limit(limit)
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.eq.push((column.to_string(), value.to_string()));
        self
    }

    pub fn order_by(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// `select=*&status=eq.completed&order=created_at.desc&limit=100`
    pub fn to_query_string(&self) -> String {
        let mut parts = vec!["select=*".to_string()];
        parts.extend(self.eq.iter().map(|(c, v)| format!("{}=eq.{}", c, v)));
        if let Some((column, direction)) = &self.order {
            let dir = match direction {
                Direction::Asc => "asc",
                Direction::Desc => "desc",
            };
            parts.push(format!("order={}.{}", column, dir));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={}", limit));
        }
        parts.join("&")
    }
}

/// Filtered row count (head request, exact count).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountQuery {
    pub table: Table,
    pub eq: Vec<(String, String)>,
}

impl CountQuery {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            eq: Vec::new(),
        }
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.eq.push((column.to_string(), value.to_string()));
        self
    }

    pub fn to_query_string(&self) -> String {
        let mut parts = vec!["select=id".to_string()];
        parts.extend(self.eq.iter().map(|(c, v)| format!("{}=eq.{}", c, v)));
        parts.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_query() {
        let query = ListQuery::newest_first(Table::Inspections, 100);
        assert_eq!(query.to_query_string(), "select=*&order=created_at.desc&limit=100");
    }

    #[test]
    fn test_filtered_list_query() {
        let query = ListQuery::new(Table::QualityReports)
            .eq("depot", "Kisumu")
            .order_by("created_at", Direction::Asc);
        assert_eq!(
            query.to_query_string(),
            "select=*&depot=eq.Kisumu&order=created_at.asc"
        );
    }

    #[test]
    fn test_count_query() {
        let query = CountQuery::new(Table::Inspections).eq("status", "completed");
        assert_eq!(query.to_query_string(), "select=id&status=eq.completed");
    }
}
