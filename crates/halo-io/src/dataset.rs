//! Typed-array sink/source boundary.
//!
//! The structured file writer/reader proper (chunking, compression,
//! parallel I/O) is an external collaborator; the snapshot layer only
//! needs a field-by-field typed array contract. [`MemorySnapshot`]
//! implements both directions in memory for fixtures and round-trip
//! tests.

use halo_core::UnitDimension;
use indexmap::IndexMap;

use crate::descriptor::{DataType, FieldValue};

/// One field's data for all particles, flattened row-major
/// (`count` elements per particle).
#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    /// 32-bit float elements.
    F32(Vec<f32>),
    /// 64-bit float elements.
    F64(Vec<f64>),
    /// 64-bit unsigned integer elements.
    U64(Vec<u64>),
}

impl Column {
    /// An empty column of `dtype` with room for `capacity` elements.
    pub fn with_capacity(dtype: DataType, capacity: usize) -> Self {
        match dtype {
            DataType::F32 => Self::F32(Vec::with_capacity(capacity)),
            DataType::F64 => Self::F64(Vec::with_capacity(capacity)),
            DataType::U64 => Self::U64(Vec::with_capacity(capacity)),
        }
    }

    /// Element datatype.
    pub fn dtype(&self) -> DataType {
        match self {
            Self::F32(_) => DataType::F32,
            Self::F64(_) => DataType::F64,
            Self::U64(_) => DataType::U64,
        }
    }

    /// Total element count (particles × multiplicity).
    pub fn len(&self) -> usize {
        match self {
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
            Self::U64(v) => v.len(),
        }
    }

    /// Whether the column holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append one particle's value.
    ///
    /// # Panics
    ///
    /// Panics if the value's datatype differs from the column's; the
    /// writer validates each value against its descriptor first.
    pub fn push(&mut self, value: &FieldValue) {
        match (self, value) {
            (Self::F32(col), FieldValue::F32(v)) => col.extend_from_slice(v),
            (Self::F64(col), FieldValue::F64(v)) => col.extend_from_slice(v),
            (Self::U64(col), FieldValue::U64(v)) => col.extend_from_slice(v),
            (col, v) => panic!(
                "cannot push {} value into {} column",
                v.dtype().name(),
                col.dtype().name()
            ),
        }
    }

    /// Multiply every element by `factor`. Integer columns are
    /// unit-free and unaffected.
    pub fn scale(&mut self, factor: f64) {
        match self {
            Self::F32(v) => {
                for x in v.iter_mut() {
                    *x = (f64::from(*x) * factor) as f32;
                }
            }
            Self::F64(v) => {
                for x in v.iter_mut() {
                    *x *= factor;
                }
            }
            Self::U64(_) => {}
        }
    }

    /// The value of particle `row`, `count` elements wide.
    ///
    /// # Panics
    ///
    /// Panics if the slice `[row * count, (row + 1) * count)` is out of
    /// range; the reader validates column shapes first.
    pub fn value(&self, row: usize, count: usize) -> FieldValue {
        let range = row * count..(row + 1) * count;
        match self {
            Self::F32(v) => FieldValue::F32(v[range].iter().copied().collect()),
            Self::F64(v) => FieldValue::F64(v[range].iter().copied().collect()),
            Self::U64(v) => FieldValue::U64(v[range].iter().copied().collect()),
        }
    }
}

/// A scalar/string metadata attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// Floating-point attribute.
    Float(f64),
    /// Integer attribute (also carries boolean-equivalent flags).
    Int(i64),
    /// String attribute.
    Str(String),
}

/// Write side of the typed-array boundary.
pub trait DatasetSink {
    /// Store one field's column under its external name. The unit
    /// dimension tag travels with the dataset so external tooling can
    /// resolve the conversion applied.
    fn write_dataset(&mut self, name: &str, units: UnitDimension, column: Column);

    /// Store one metadata attribute.
    fn write_attribute(&mut self, name: &str, value: AttributeValue);
}

/// Read side of the typed-array boundary.
pub trait DatasetSource {
    /// The column stored under `name`, if present.
    fn dataset(&self, name: &str) -> Option<&Column>;
}

/// In-memory snapshot implementing both directions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemorySnapshot {
    /// Stored datasets with their unit tags, in write order.
    pub datasets: IndexMap<String, (UnitDimension, Column)>,
    /// Stored attributes, in write order.
    pub attributes: IndexMap<String, AttributeValue>,
}

impl MemorySnapshot {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the dataset stored under `name`, if any. Lets tests build
    /// sources with missing fields.
    pub fn remove_dataset(&mut self, name: &str) {
        self.datasets.shift_remove(name);
    }
}

impl DatasetSink for MemorySnapshot {
    fn write_dataset(&mut self, name: &str, units: UnitDimension, column: Column) {
        self.datasets.insert(name.to_string(), (units, column));
    }

    fn write_attribute(&mut self, name: &str, value: AttributeValue) {
        self.attributes.insert(name.to_string(), value);
    }
}

impl DatasetSource for MemorySnapshot {
    fn dataset(&self, name: &str) -> Option<&Column> {
        self.datasets.get(name).map(|(_, column)| column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_read_back_rows() {
        let mut col = Column::with_capacity(DataType::F32, 6);
        col.push(&FieldValue::vec3_f32([1.0, 2.0, 3.0]));
        col.push(&FieldValue::vec3_f32([4.0, 5.0, 6.0]));
        assert_eq!(col.len(), 6);
        assert_eq!(col.value(1, 3), FieldValue::vec3_f32([4.0, 5.0, 6.0]));
    }

    #[test]
    #[should_panic(expected = "cannot push")]
    fn push_of_mismatched_dtype_panics() {
        let mut col = Column::with_capacity(DataType::F32, 1);
        col.push(&FieldValue::scalar_u64(1));
    }

    #[test]
    fn scale_skips_integer_columns() {
        let mut col = Column::U64(vec![1, 2, 3]);
        col.scale(100.0);
        assert_eq!(col, Column::U64(vec![1, 2, 3]));
    }

    #[test]
    fn memory_snapshot_round_trips_datasets() {
        let mut snap = MemorySnapshot::new();
        snap.write_dataset(
            "Masses",
            UnitDimension::Mass,
            Column::F32(vec![1.0, 2.0]),
        );
        assert_eq!(
            snap.dataset("Masses"),
            Some(&Column::F32(vec![1.0, 2.0]))
        );
        snap.remove_dataset("Masses");
        assert_eq!(snap.dataset("Masses"), None);
    }
}
