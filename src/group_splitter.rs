//! Split of the ranked, bye-free standings into a top and a bottom group of even size.

use crate::error::PairingError;

/// Sizes of the two groups. Both are even and sum to the number of active players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSizes {
    /// Players in the higher-ranked group.
    pub top: usize,
    /// Players in the lower-ranked group.
    pub bottom: usize,
}

/// Computes the group sizes for `active` players.
///
/// Each half gets `active / 2` players. When that half is odd, the top group takes one player
/// from the bottom group so that both can be paired without a leftover.
///
/// # Errors
/// [`PairingError::InvalidPlayerCount`] if `active` is odd or below two.
pub fn group_sizes(active: usize) -> Result<GroupSizes, PairingError> {
    if active < 2 || active % 2 != 0 {
        return Err(PairingError::InvalidPlayerCount(active));
    }
    let half = active / 2;
    Ok(if half % 2 == 0 {
        GroupSizes {
            top: half,
            bottom: half,
        }
    } else {
        GroupSizes {
            top: half + 1,
            bottom: half - 1,
        }
    })
}

/// Splits `ranked` into its top and bottom groups, see [`group_sizes`].
pub fn split_groups<T>(ranked: &[T]) -> Result<(&[T], &[T]), PairingError> {
    let sizes = group_sizes(ranked.len())?;
    Ok(ranked.split_at(sizes.top))
}

#[cfg(test)]
mod group_splitter_tests {
    use super::*;

    #[test]
    fn sizes_are_even_and_cover_everyone() {
        for active in (2..=40).step_by(2) {
            let sizes = group_sizes(active).unwrap();
            assert_eq!(sizes.top % 2, 0, "top group for {active}");
            assert_eq!(sizes.bottom % 2, 0, "bottom group for {active}");
            assert_eq!(sizes.top + sizes.bottom, active);
            assert!(sizes.top >= sizes.bottom);
        }
    }

    #[test]
    fn odd_half_moves_one_player_up() {
        assert_eq!(group_sizes(2).unwrap(), GroupSizes { top: 2, bottom: 0 });
        assert_eq!(group_sizes(4).unwrap(), GroupSizes { top: 2, bottom: 2 });
        assert_eq!(group_sizes(6).unwrap(), GroupSizes { top: 4, bottom: 2 });
        assert_eq!(group_sizes(10).unwrap(), GroupSizes { top: 6, bottom: 4 });
        assert_eq!(group_sizes(16).unwrap(), GroupSizes { top: 8, bottom: 8 });
    }

    #[test]
    fn rejects_unpairable_counts() {
        assert!(matches!(group_sizes(0), Err(PairingError::InvalidPlayerCount(0))));
        assert!(matches!(group_sizes(7), Err(PairingError::InvalidPlayerCount(7))));
    }

    #[test]
    fn split_is_contiguous() {
        let ranked = [10, 11, 12, 13, 14, 15];
        let (top, bottom) = split_groups(&ranked).unwrap();
        assert_eq!(top, &[10, 11, 12, 13]);
        assert_eq!(bottom, &[14, 15]);
    }
}
