//! Nearest-name lookup against a [`ReferenceTable`].

use palette::Srgb;

use crate::color::distance_squared;
use crate::reference::{NamedColor, ReferenceTable};

/// Row of `table` closest to `color` under squared Euclidean RGB distance.
///
/// Only a strictly smaller distance replaces the current best, so equidistant
/// entries resolve to whichever comes first in table order.
pub fn nearest(color: Srgb<u8>, table: &ReferenceTable) -> &'static NamedColor {
    let mut entries = table.iter();
    // Tables are non-empty by construction.
    let mut best = match entries.next() {
        Some(first) => first,
        None => unreachable!("reference table is never empty"),
    };
    let mut best_dist = distance_squared(color, best.color);

    for entry in entries {
        if best_dist == 0 {
            break;
        }
        let d = distance_squared(color, entry.color);
        if d < best_dist {
            best_dist = d;
            best = entry;
        }
    }

    best
}

/// Name of the reference color closest to `color`.
pub fn name_of(color: Srgb<u8>, table: &ReferenceTable) -> &'static str {
    nearest(color, table).name
}
