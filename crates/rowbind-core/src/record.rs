use crate::schema::RecordDef;
use crate::value::Value;
use crate::{Result, Tracker};

use indexmap::IndexSet;

/// A type rows can be mapped into. Implemented by `#[derive(Record)]`.
///
/// Fields are addressed by their position in the declaration table returned
/// by [`Record::definition`]. `load_field` writes the backing field directly
/// and never goes through change tracking.
pub trait Record: Default + Sized + 'static {
    /// Name of the record type
    const NAME: &'static str;

    /// Number of mapped fields
    const FIELD_COUNT: usize;

    /// True if loaded instances reject writes
    const IMMUTABLE: bool = false;

    /// The declarative field table, consumed once per type by the schema registry.
    fn definition() -> RecordDef;

    fn field_value(&self, field: usize) -> Value;

    fn load_field(&mut self, field: usize, value: Value) -> Result<()>;

    /// The change tracker, for tracked records.
    fn change_tracker(&mut self) -> Option<&mut Tracker> {
        None
    }
}

/// A record whose property writes are tracked.
pub trait TrackedRecord: Record {
    fn tracker(&self) -> &Tracker;

    fn tracker_mut(&mut self) -> &mut Tracker;

    fn modified_columns(&self) -> &IndexSet<&'static str> {
        self.tracker().modified_columns()
    }

    fn is_modified(&self, column: &str) -> bool {
        self.tracker().is_modified(column)
    }

    fn is_loaded(&self) -> bool {
        self.tracker().is_loaded()
    }

    /// Forgets recorded modifications, e.g. after they were saved.
    fn accept_changes(&mut self) {
        self.tracker_mut().accept_changes();
    }

    /// Copies every field into a fresh, loaded instance with no modifications.
    fn clone_record(&self) -> Result<Self> {
        let mut copy = Self::default();

        for field in 0..Self::FIELD_COUNT {
            copy.load_field(field, self.field_value(field))?;
        }

        copy.tracker_mut().mark_loaded(Self::IMMUTABLE);
        Ok(copy)
    }

    /// Overwrites every field whose value differs in `other`, then marks the
    /// record loaded. Returns the number of fields overwritten.
    ///
    /// Floats compare by bit pattern, so `NaN` equals an identical `NaN`.
    fn merge_changes_from(&mut self, other: &Self) -> Result<usize> {
        let mut merged = 0;

        for field in 0..Self::FIELD_COUNT {
            let theirs = other.field_value(field);

            if !same_value(&self.field_value(field), &theirs) {
                self.load_field(field, theirs)?;
                merged += 1;
            }
        }

        self.tracker_mut().mark_loaded(Self::IMMUTABLE);
        Ok(merged)
    }
}

fn same_value(ours: &Value, theirs: &Value) -> bool {
    match (ours, theirs) {
        (Value::F32(a), Value::F32(b)) => a.to_bits() == b.to_bits(),
        (Value::F64(a), Value::F64(b)) => a.to_bits() == b.to_bits(),
        _ => ours == theirs,
    }
}
