//! Arrow schemas for the generated tables
//!
//! The schemas fix column names, order and types for every table. They are
//! used when records are converted to record batches, and when CSV files are
//! read back (CSV carries no types of its own).

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, FieldRef, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::{Referral, StaffHours, Visit};

/// A table row type that can be converted to and from Arrow `RecordBatch`
pub trait ArrowSchema: Sized + Serialize + DeserializeOwned {
    /// Get the Arrow schema for this model
    fn schema() -> Schema;

    /// Convert rows to a `RecordBatch` with the fixed schema
    fn to_record_batch(rows: &[Self]) -> Result<RecordBatch> {
        let fields: Vec<FieldRef> = Self::schema().fields().iter().map(Arc::clone).collect();
        Ok(serde_arrow::to_record_batch(&fields, &rows)?)
    }

    /// Convert a `RecordBatch` back to rows
    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        Ok(serde_arrow::from_record_batch(batch)?)
    }
}

impl ArrowSchema for Visit {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("visit_id", DataType::Utf8, false),
            Field::new("date", DataType::Date32, false),
            Field::new(
                "arrival_time",
                DataType::Timestamp(TimeUnit::Millisecond, None),
                false,
            ),
            Field::new("patient_name", DataType::Utf8, false),
            Field::new("age", DataType::UInt8, false),
            Field::new("gender", DataType::Utf8, false),
            Field::new("race", DataType::Utf8, false),
            Field::new("diagnosis", DataType::Utf8, false),
            Field::new("department", DataType::Utf8, false),
            Field::new("esi_level", DataType::UInt8, false),
            Field::new("door_to_doctor_mins", DataType::UInt32, false),
            Field::new("length_of_stay_mins", DataType::UInt32, false),
            Field::new("satisfaction_score", DataType::UInt8, false),
            Field::new("outcome", DataType::Utf8, false),
            Field::new("insurance_type", DataType::Utf8, false),
            Field::new("needs_labs", DataType::Boolean, false),
            Field::new("needs_imaging", DataType::Boolean, false),
            Field::new("needs_consult", DataType::Boolean, false),
            Field::new("admin_flagged", DataType::Boolean, false),
            Field::new("lwbs", DataType::Boolean, false),
        ])
    }
}

impl ArrowSchema for StaffHours {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("staff_name", DataType::Utf8, false),
            Field::new("role", DataType::Utf8, false),
            Field::new("specialty", DataType::Utf8, false),
            Field::new("year", DataType::Int32, false),
            Field::new("week", DataType::UInt32, false),
            Field::new("hours_worked", DataType::UInt32, false),
        ])
    }
}

impl ArrowSchema for Referral {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("visit_id", DataType::Utf8, false),
            Field::new("date", DataType::Date32, false),
            Field::new("referral_department", DataType::Utf8, false),
        ])
    }
}
