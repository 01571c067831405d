//! Search query.

use crate::criterion::Criterion;

/// Default page size.
pub const DEFAULT_LIMIT: usize = 25;

/// A filter with paging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Filter criterion.
    pub filter: Criterion,
    /// Number of hits to skip.
    pub offset: usize,
    /// Maximum number of hits to return.
    pub limit: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            filter: Criterion::MatchAll,
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Query {
    /// Query for `filter` with default paging.
    pub fn new(filter: Criterion) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    /// Set the offset.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Set the limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = Query::default();
        assert_eq!(query.filter, Criterion::MatchAll);
        assert_eq!(query.offset, 0);
        assert_eq!(query.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_paging() {
        let query = Query::new(Criterion::IndexedMainTranslation(true))
            .with_offset(10)
            .with_limit(5);
        assert_eq!(query.offset, 10);
        assert_eq!(query.limit, 5);
    }
}
