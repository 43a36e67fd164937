//! Reorder and transfer operations on pack lists.
//!
//! These are plain list edits with no filesystem access. The ordinal of an
//! active pack is its index in the list; it only reaches disk when the
//! session is persisted.

use crate::pack::{ManifestRecord, PackId};

/// Moves the element at `from` to index `to`, shifting the ones between.
///
/// Out-of-range indices leave the list untouched and return `false`.
pub fn reposition<T>(list: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= list.len() || to >= list.len() {
        return false;
    }
    if from != to {
        let item = list.remove(from);
        list.insert(to, item);
    }
    true
}

/// Moves the element at `index` one place towards the front.
pub fn move_up<T>(list: &mut Vec<T>, index: usize) -> bool {
    index
        .checked_sub(1)
        .is_some_and(|to| reposition(list, index, to))
}

/// Moves the element at `index` one place towards the back.
pub fn move_down<T>(list: &mut Vec<T>, index: usize) -> bool {
    index
        .checked_add(1)
        .is_some_and(|to| reposition(list, index, to))
}

/// Moves every record of `source` whose id is in `ids` to the end of
/// `destination`.
///
/// Moved records keep their relative order from `source`. Ids that are not
/// in `source` are ignored, as is the nil id. Returns how many records moved.
pub fn transfer(
    source: &mut Vec<ManifestRecord>,
    destination: &mut Vec<ManifestRecord>,
    ids: &[PackId],
) -> usize {
    let (moved, kept): (Vec<_>, Vec<_>) = std::mem::take(source)
        .into_iter()
        .partition(|record| !record.id.is_nil() && ids.contains(&record.id));

    *source = kept;
    let count = moved.len();
    destination.extend(moved);
    count
}

/// Index of the first record with `id`.
#[must_use]
pub fn position(list: &[ManifestRecord], id: PackId) -> Option<usize> {
    list.iter().position(|record| record.id == id)
}
