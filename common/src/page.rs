use std::ops::Range;

/// Optional pagination arguments accepted by `get_messages`.
///
/// Both fields absent means "everything".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub from_index: Option<u64>,
    pub limit: Option<u64>,
}

impl PageRequest {
    pub fn new(from_index: Option<u64>, limit: Option<u64>) -> Self {
        Self { from_index, limit }
    }

    /// Index range of the page within a list of `total` items, clamped to the list.
    pub fn window(&self, total: u64) -> Range<u64> {
        let start = self.from_index.unwrap_or(0).min(total);
        let end = match self.limit {
            Some(limit) => start.saturating_add(limit).min(total),
            None => total,
        };
        start..end
    }
}
