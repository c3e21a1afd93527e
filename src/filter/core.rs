//! Core filtering functionality for record batches
//!
//! Defines the [`BatchFilter`] trait, the boolean-mask application shared by
//! every filter, and column access helpers.

use std::collections::HashSet;
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, BooleanArray};
use arrow::compute::{and, filter as arrow_filter};
use arrow::record_batch::RecordBatch;

use crate::error::{EdSynthError, Result};

/// Filter a record batch based on a boolean mask
///
/// # Returns
/// A new record batch with only rows where mask is true
pub fn filter_record_batch(batch: &RecordBatch, mask: &BooleanArray) -> Result<RecordBatch> {
    if batch.num_rows() != mask.len() {
        return Err(EdSynthError::validation(format!(
            "Mask length ({}) doesn't match batch row count ({})",
            mask.len(),
            batch.num_rows()
        )));
    }

    let filtered_columns: Vec<ArrayRef> = batch
        .columns()
        .iter()
        .map(|col| arrow_filter(col, mask))
        .collect::<arrow::error::Result<_>>()?;

    Ok(RecordBatch::try_new(batch.schema(), filtered_columns)?)
}

/// Look up a column by name and downcast it to a concrete array type
pub fn typed_column<'a, A: Array + 'static>(batch: &'a RecordBatch, name: &str) -> Result<&'a A> {
    let index = batch
        .schema()
        .index_of(name)
        .map_err(|e| EdSynthError::validation(format!("Column '{name}' not found: {e}")))?;

    batch
        .column(index)
        .as_any()
        .downcast_ref::<A>()
        .ok_or_else(|| {
            EdSynthError::validation(format!(
                "Column '{name}' has type {}, not the expected array type",
                batch.column(index).data_type()
            ))
        })
}

/// Trait for objects that can filter record batches
pub trait BatchFilter: std::fmt::Debug {
    /// Compute the keep-mask for a batch
    fn mask(&self, batch: &RecordBatch) -> Result<BooleanArray>;

    /// Returns the set of column names required by this filter
    fn required_columns(&self) -> HashSet<String>;

    /// Filter a record batch
    fn filter(&self, batch: &RecordBatch) -> Result<RecordBatch> {
        let mask = self.mask(batch)?;
        filter_record_batch(batch, &mask)
    }
}

/// A filter that combines multiple filters with a logical AND
#[derive(Debug, Clone)]
pub struct AndFilter {
    filters: Vec<Arc<dyn BatchFilter + Send + Sync>>,
}

impl AndFilter {
    /// Create a new AND filter
    #[must_use]
    pub fn new(filters: Vec<Arc<dyn BatchFilter + Send + Sync>>) -> Self {
        Self { filters }
    }
}

impl BatchFilter for AndFilter {
    fn mask(&self, batch: &RecordBatch) -> Result<BooleanArray> {
        let mut combined = BooleanArray::from(vec![true; batch.num_rows()]);
        for filter in &self.filters {
            let mask = filter.mask(batch)?;
            combined = and(&combined, &mask)?;
        }
        Ok(combined)
    }

    fn required_columns(&self) -> HashSet<String> {
        self.filters
            .iter()
            .flat_map(|f| f.required_columns())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::Int32Array;
    use arrow::datatypes::{DataType, Field, Schema};

    fn sample_batch() -> RecordBatch {
        let schema = Schema::new(vec![Field::new("n", DataType::Int32, false)]);
        RecordBatch::try_new(
            Arc::new(schema),
            vec![Arc::new(Int32Array::from(vec![1, 2, 3, 4]))],
        )
        .unwrap()
    }

    #[test]
    fn test_mask_length_must_match() {
        let batch = sample_batch();
        let mask = BooleanArray::from(vec![true, false]);
        assert!(filter_record_batch(&batch, &mask).is_err());
    }

    #[test]
    fn test_filter_keeps_masked_rows() {
        let batch = sample_batch();
        let mask = BooleanArray::from(vec![true, false, true, false]);
        let filtered = filter_record_batch(&batch, &mask).unwrap();
        let values = typed_column::<Int32Array>(&filtered, "n").unwrap();
        assert_eq!(values.values().to_vec(), vec![1, 3]);
    }

    #[test]
    fn test_typed_column_errors() {
        let batch = sample_batch();
        assert!(typed_column::<Int32Array>(&batch, "missing").is_err());
        assert!(typed_column::<BooleanArray>(&batch, "n").is_err());
    }
}
