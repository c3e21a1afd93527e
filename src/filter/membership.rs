//! Visit-id membership filtering
//!
//! Referrals follow the visits they belong to: after the visit table is
//! filtered, referrals are kept only when their `visit_id` is among the
//! surviving visits.

use std::collections::HashSet;

use arrow::array::{Array, BooleanArray, StringArray};
use arrow::record_batch::RecordBatch;
use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::filter::core::{BatchFilter, typed_column};

/// Default name of the visit identifier column
pub const VISIT_ID_COLUMN: &str = "visit_id";

/// A filter that includes only rows with a visit id from a fixed set
#[derive(Debug, Clone)]
pub struct VisitIdFilter {
    visit_ids: FxHashSet<String>,
    column: String,
}

impl VisitIdFilter {
    /// Create a new visit id filter over the `visit_id` column
    #[must_use]
    pub fn new<I, S>(visit_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            visit_ids: visit_ids.into_iter().map(Into::into).collect(),
            column: VISIT_ID_COLUMN.to_string(),
        }
    }

    /// Collect the ids present in a visits batch
    pub fn from_visits(visits: &RecordBatch) -> Result<Self> {
        let ids = typed_column::<StringArray>(visits, VISIT_ID_COLUMN)?;
        Ok(Self::new(ids.iter().flatten()))
    }

    /// Number of ids in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.visit_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visit_ids.is_empty()
    }
}

impl BatchFilter for VisitIdFilter {
    fn mask(&self, batch: &RecordBatch) -> Result<BooleanArray> {
        let ids = typed_column::<StringArray>(batch, &self.column)?;
        Ok((0..ids.len())
            .map(|i| Some(ids.is_valid(i) && self.visit_ids.contains(ids.value(i))))
            .collect())
    }

    fn required_columns(&self) -> HashSet<String> {
        HashSet::from([self.column.clone()])
    }
}
