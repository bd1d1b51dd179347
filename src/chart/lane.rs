//! Column-to-lane mapping policy of the target format.
//!
//! The offsets below are an engine compatibility table, not something derivable from the key
//! count: "extended" layouts reserve lane 7 for the open-note convention and one specific
//! column slot for star-power activation, regardless of how many keys the source chart
//! actually has.

/// The player side a note track is built for.
///
/// Source charts with more than 9 keys are combined two-player charts; each side gets its
/// own note track and owns half of the columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerSide {
    /// Columns left of the split, or the whole chart when it is not co-op.
    #[default]
    Player1,
    /// Columns right of the split in a co-op chart.
    Player2,
}

/// Outcome of mapping one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LaneEvent {
    /// A playable note on the given target lane.
    Note(u8),
    /// A star-power phrase marker.
    StarPower,
}

/// Lane reserved for open notes in extended layouts.
pub const OPEN_NOTE_LANE: u8 = 7;

/// Local column that encodes a star-power marker in extended layouts.
const STAR_POWER_COLUMN: u32 = 8;

/// Converts a raw `x` coordinate (`0..=511`) into a column index.
#[must_use]
pub const fn column_of(x: u16, key_count: u8) -> u32 {
    x as u32 * key_count as u32 / 512
}

/// Maps a column index to the lane event the target format expects, or `None` when the
/// column produces nothing for the requested side.
///
/// With more than 9 keys the chart is co-op, split at `key_count / 2`: columns on the other
/// side of the split yield `None`, as do out-of-range columns. A side of 6 or more keys uses
/// the extended layout, where local column 0 becomes the open note, local column 8 the
/// star-power marker, and every playable lane shifts down by one.
#[must_use]
pub fn map_column(column: u32, key_count: u8, side: PlayerSide) -> Option<LaneEvent> {
    let keys = u32::from(key_count);
    if column >= keys {
        return None;
    }
    let (per_side, side_offset) = if key_count > 9 {
        let half = keys / 2;
        let owned = match side {
            PlayerSide::Player1 => column < half,
            PlayerSide::Player2 => column >= half,
        };
        if !owned {
            return None;
        }
        let side_offset = match side {
            PlayerSide::Player1 => 0,
            PlayerSide::Player2 => half,
        };
        (half, side_offset)
    } else {
        (keys, 0)
    };
    if per_side < 6 {
        return Some(LaneEvent::Note((column - side_offset) as u8));
    }
    Some(match column % per_side {
        0 => LaneEvent::Note(OPEN_NOTE_LANE),
        STAR_POWER_COLUMN => LaneEvent::StarPower,
        _ => LaneEvent::Note((column - side_offset - 1) as u8),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_layout_is_identity() {
        for column in 0..4 {
            assert_eq!(
                map_column(column, 4, PlayerSide::Player1),
                Some(LaneEvent::Note(column as u8)),
            );
        }
    }

    #[test]
    fn extended_layout_reserved_slots() {
        assert_eq!(
            map_column(0, 7, PlayerSide::Player1),
            Some(LaneEvent::Note(OPEN_NOTE_LANE)),
        );
        assert_eq!(map_column(3, 7, PlayerSide::Player1), Some(LaneEvent::Note(2)));
        assert_eq!(map_column(8, 9, PlayerSide::Player1), Some(LaneEvent::StarPower));
    }

    #[test]
    fn coop_sides_split_the_columns() {
        // 10K: halves of 5, plain layout per side.
        assert_eq!(map_column(7, 10, PlayerSide::Player2), Some(LaneEvent::Note(2)));
        assert_eq!(map_column(7, 10, PlayerSide::Player1), None);
        assert_eq!(map_column(2, 10, PlayerSide::Player1), Some(LaneEvent::Note(2)));
        assert_eq!(map_column(2, 10, PlayerSide::Player2), None);
    }

    #[test]
    fn coop_extended_reserved_slots() {
        // 18K: halves of 9, extended layout per side.
        assert_eq!(
            map_column(9, 18, PlayerSide::Player2),
            Some(LaneEvent::Note(OPEN_NOTE_LANE)),
        );
        assert_eq!(map_column(17, 18, PlayerSide::Player2), Some(LaneEvent::StarPower));
        assert_eq!(map_column(12, 18, PlayerSide::Player2), Some(LaneEvent::Note(2)));
        assert_eq!(map_column(8, 18, PlayerSide::Player1), Some(LaneEvent::StarPower));
    }

    #[test]
    fn out_of_range_column_is_dropped() {
        assert_eq!(map_column(7, 7, PlayerSide::Player1), None);
    }
}
