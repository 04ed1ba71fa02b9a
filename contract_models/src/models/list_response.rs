//! Paged collection envelope.

use contract_models_macros::Model;
use serde::{Deserialize, Serialize};

/// One page of a collection, along with the paging that produced it.
///
/// A negative `limit` means the page holds every item after `skip`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[model(kind = "response")]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    /// Number of items in the whole collection, not just this page
    pub total_count: usize,
    pub skip: usize,
    pub limit: i64,
}

impl<T> ListResponse<T> {
    /// Cut a page out of a full collection
    pub fn paginate(items: Vec<T>, skip: usize, limit: i64) -> Self {
        let total_count = items.len();
        let page = items.into_iter().skip(skip);

        let data = match usize::try_from(limit) {
            Ok(limit) => page.take(limit).collect(),
            Err(_) => page.collect(),
        };

        Self {
            data,
            total_count,
            skip,
            limit,
        }
    }

    /// Wrap a complete collection as a single unlimited page
    pub fn all(items: Vec<T>) -> Self {
        Self::paginate(items, 0, -1)
    }

    /// Convert the payload while keeping the paging fields
    pub fn map<U, F>(self, f: F) -> ListResponse<U>
    where
        F: FnMut(T) -> U,
    {
        ListResponse {
            data: self.data.into_iter().map(f).collect(),
            total_count: self.total_count,
            skip: self.skip,
            limit: self.limit,
        }
    }

    /// Whether more items follow this page
    pub fn has_more(&self) -> bool {
        self.skip.saturating_add(self.data.len()) < self.total_count
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
