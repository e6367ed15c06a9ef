//! Snapshot import: the scatter pass.

use halo_core::{Particle, SnapshotError, UnitSystem};

use crate::dataset::DatasetSource;
use crate::descriptor::InputPolicy;
use crate::fields::input_fields;

/// Load a particle set from a snapshot source.
///
/// Iterates the input registry: a compulsory field absent from the
/// source aborts the load; an absent optional field is skipped and the
/// destination attributes keep whatever they held before the call.
/// Present columns are validated against the descriptor's datatype and
/// shape, divided by the conversion factor of their unit-dimension tag,
/// and applied particle by particle.
pub fn read_snapshot<S: DatasetSource>(
    source: &S,
    units: &UnitSystem,
    parts: &mut [Particle],
) -> Result<(), SnapshotError> {
    for field in input_fields() {
        let column = match source.dataset(field.name) {
            Some(column) => column,
            None => match field.policy {
                InputPolicy::Compulsory => {
                    return Err(SnapshotError::MissingCompulsoryField {
                        name: field.name.to_string(),
                    })
                }
                InputPolicy::Optional => continue,
            },
        };

        if column.dtype() != field.dtype {
            return Err(SnapshotError::DatatypeMismatch {
                name: field.name.to_string(),
                expected: field.dtype.name(),
                actual: column.dtype().name(),
            });
        }
        let expected = parts.len() * field.count as usize;
        if column.len() != expected {
            return Err(SnapshotError::CountMismatch {
                name: field.name.to_string(),
                expected,
                actual: column.len(),
            });
        }

        let factor = units.conversion_factor(field.units);
        for (row, p) in parts.iter_mut().enumerate() {
            let mut value = column.value(row, field.count as usize);
            value.scale(1.0 / factor);
            (field.apply)(p, &value);
        }
    }
    Ok(())
}
