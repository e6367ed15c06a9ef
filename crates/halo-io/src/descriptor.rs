//! Field descriptors: the declarative schema entries the writer and
//! reader iterate.
//!
//! A descriptor names one external quantity, declares its element
//! datatype, multiplicity, and unit dimension, and carries either a
//! direct accessor into the particle or a converter function. Invariant:
//! every value an output descriptor produces holds exactly `count`
//! elements of the declared datatype per particle; the writer asserts
//! this.

use halo_core::{ExtendedPart, Particle, UnitDimension};
use smallvec::SmallVec;

use crate::convert::SnapshotContext;

/// Element datatype of a snapshot field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// 64-bit unsigned integer.
    U64,
}

impl DataType {
    /// Short name for error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::U64 => "u64",
        }
    }
}

/// The per-particle value of one field: 1 or 3 elements of one datatype.
///
/// Backed by `SmallVec` so the three-component case stays off the heap.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// 32-bit float elements.
    F32(SmallVec<[f32; 3]>),
    /// 64-bit float elements.
    F64(SmallVec<[f64; 3]>),
    /// 64-bit unsigned integer elements.
    U64(SmallVec<[u64; 3]>),
}

impl FieldValue {
    /// A single `f32`.
    pub fn scalar_f32(v: f32) -> Self {
        Self::F32(SmallVec::from_slice(&[v]))
    }

    /// Three `f32` components.
    pub fn vec3_f32(v: [f32; 3]) -> Self {
        Self::F32(SmallVec::from_slice(&v))
    }

    /// A single `f64`.
    pub fn scalar_f64(v: f64) -> Self {
        Self::F64(SmallVec::from_slice(&[v]))
    }

    /// Three `f64` components.
    pub fn vec3_f64(v: [f64; 3]) -> Self {
        Self::F64(SmallVec::from_slice(&v))
    }

    /// A single `u64`.
    pub fn scalar_u64(v: u64) -> Self {
        Self::U64(SmallVec::from_slice(&[v]))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
            Self::U64(v) => v.len(),
        }
    }

    /// Whether the value holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Datatype of the elements.
    pub fn dtype(&self) -> DataType {
        match self {
            Self::F32(_) => DataType::F32,
            Self::F64(_) => DataType::F64,
            Self::U64(_) => DataType::U64,
        }
    }

    /// Multiply every element by `factor`. Integer values are unit-free
    /// and unaffected.
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

    /// Element `i` as `f32`.
    ///
    /// # Panics
    ///
    /// Panics on a non-`F32` value or out-of-range index; apply
    /// functions only run after the reader has validated the column's
    /// datatype and shape.
    pub fn as_f32(&self, i: usize) -> f32 {
        match self {
            Self::F32(v) => v[i],
            other => panic!("expected f32 value, got {}", other.dtype().name()),
        }
    }

    /// Element `i` as `f64`.
    ///
    /// # Panics
    ///
    /// Panics on a non-`F64` value or out-of-range index.
    pub fn as_f64(&self, i: usize) -> f64 {
        match self {
            Self::F64(v) => v[i],
            other => panic!("expected f64 value, got {}", other.dtype().name()),
        }
    }

    /// Element `i` as `u64`.
    ///
    /// # Panics
    ///
    /// Panics on a non-`U64` value or out-of-range index.
    pub fn as_u64(&self, i: usize) -> u64 {
        match self {
            Self::U64(v) => v[i],
            other => panic!("expected u64 value, got {}", other.dtype().name()),
        }
    }
}

/// Direct accessor: a plain copy of a particle attribute.
pub type DirectFn = fn(&Particle, &ExtendedPart) -> FieldValue;

/// Converter: a derived quantity of one particle plus the per-pass
/// context.
pub type ConvertFn = fn(&SnapshotContext, &Particle, &ExtendedPart) -> FieldValue;

/// Where an output field's values come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputSource {
    /// Copy of one particle attribute.
    Direct(DirectFn),
    /// Computed by a converter function.
    Convert(ConvertFn),
}

/// One write-direction schema entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputField {
    /// External dataset name.
    pub name: &'static str,
    /// Element datatype.
    pub dtype: DataType,
    /// Elements per particle (1 or 3).
    pub count: u32,
    /// Unit-dimension tag consumed by the conversion-factor resolver.
    pub units: UnitDimension,
    /// Value source.
    pub source: OutputSource,
}

impl OutputField {
    /// A direct-copy output field.
    pub fn direct(
        name: &'static str,
        dtype: DataType,
        count: u32,
        units: UnitDimension,
        accessor: DirectFn,
    ) -> Self {
        Self {
            name,
            dtype,
            count,
            units,
            source: OutputSource::Direct(accessor),
        }
    }

    /// A converted output field.
    pub fn convert(
        name: &'static str,
        dtype: DataType,
        count: u32,
        units: UnitDimension,
        converter: ConvertFn,
    ) -> Self {
        Self {
            name,
            dtype,
            count,
            units,
            source: OutputSource::Convert(converter),
        }
    }
}

/// Requiredness of a read-direction schema entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputPolicy {
    /// The load fails if the field is absent from the source.
    Compulsory,
    /// Absence is skipped; the destination attribute keeps its prior
    /// (default) value.
    Optional,
}

/// Stores one unit-converted value into the particle.
pub type ApplyFn = fn(&mut Particle, &FieldValue);

/// One read-direction schema entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputField {
    /// External dataset name.
    pub name: &'static str,
    /// Element datatype.
    pub dtype: DataType,
    /// Elements per particle (1 or 3).
    pub count: u32,
    /// Unit-dimension tag; the reader divides by its factor.
    pub units: UnitDimension,
    /// Requiredness.
    pub policy: InputPolicy,
    /// Destination setter.
    pub apply: ApplyFn,
}

impl InputField {
    /// A compulsory input field.
    pub fn compulsory(
        name: &'static str,
        dtype: DataType,
        count: u32,
        units: UnitDimension,
        apply: ApplyFn,
    ) -> Self {
        Self {
            name,
            dtype,
            count,
            units,
            policy: InputPolicy::Compulsory,
            apply,
        }
    }

    /// An optional input field.
    pub fn optional(
        name: &'static str,
        dtype: DataType,
        count: u32,
        units: UnitDimension,
        apply: ApplyFn,
    ) -> Self {
        Self {
            name,
            dtype,
            count,
            units,
            policy: InputPolicy::Optional,
            apply,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_leaves_integers_untouched() {
        let mut v = FieldValue::scalar_u64(42);
        v.scale(1000.0);
        assert_eq!(v.as_u64(0), 42);
    }

    #[test]
    fn scale_applies_to_every_component() {
        let mut v = FieldValue::vec3_f32([1.0, 2.0, 3.0]);
        v.scale(0.5);
        assert_eq!(v, FieldValue::vec3_f32([0.5, 1.0, 1.5]));
    }

    #[test]
    fn value_shape_accessors() {
        assert_eq!(FieldValue::vec3_f64([0.0; 3]).len(), 3);
        assert_eq!(FieldValue::scalar_f32(0.0).len(), 1);
        assert_eq!(FieldValue::scalar_f32(0.0).dtype(), DataType::F32);
    }

    #[test]
    #[should_panic(expected = "expected u64")]
    fn wrong_typed_access_panics() {
        FieldValue::scalar_f32(1.0).as_u64(0);
    }
}
