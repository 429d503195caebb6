//! Stable palette-index assignment for grouped display.

use std::collections::BTreeMap;

/// Number of badge colors the display layer cycles through.
pub const PALETTE_SIZE: usize = 8;

/// Map each key to a palette index: its position in the caller-supplied
/// order, modulo [`PALETTE_SIZE`].
///
/// Keys must already be deduplicated and in a stable deterministic order
/// (for dates, chronologically sorted - see
/// [`sorted_date_keys`](crate::engine::sorted_date_keys)). The mapping is
/// recomputed wholesale whenever the key set changes; adding a key can
/// shift the indices of keys sorted after it, which is accepted for a
/// session-scoped display concern.
pub fn assign_colors(keys: &[String]) -> BTreeMap<String, usize> {
    keys.iter()
        .enumerate()
        .map(|(position, key)| (key.clone(), position % PALETTE_SIZE))
        .collect()
}
