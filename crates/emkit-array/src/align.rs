//! Address arithmetic for aligned views.

use crate::ELEMENT_BYTES;

/// Index of the first element at or after `base` whose address is a
/// multiple of `align_bytes`.
///
/// `align_bytes` must be a power of two. Gives up after `slack` elements,
/// returning `None` if no element within reach is aligned.
pub(crate) fn first_aligned_index(base: usize, align_bytes: usize, slack: usize) -> Option<usize> {
    let mask = align_bytes - 1;
    let mut index = 0;
    while (base + index * ELEMENT_BYTES) & mask != 0 {
        if index == slack {
            return None;
        }
        index += 1;
    }
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_aligned_is_zero() {
        assert_eq!(first_aligned_index(0x1000, 16, 7), Some(0));
    }

    #[test]
    fn advances_to_next_boundary() {
        assert_eq!(first_aligned_index(0x1002, 16, 7), Some(7));
        assert_eq!(first_aligned_index(0x100E, 16, 7), Some(1));
        assert_eq!(first_aligned_index(0x1006, 8, 3), Some(1));
    }

    #[test]
    fn alignment_of_one_never_advances() {
        assert_eq!(first_aligned_index(0x1003, 1, 0), Some(0));
    }

    #[test]
    fn gives_up_past_slack() {
        assert_eq!(first_aligned_index(0x1002, 16, 6), None);
        // Odd base can never reach an even boundary in element steps.
        assert_eq!(first_aligned_index(0x1001, 4, 10), None);
    }

    #[test]
    fn slack_formula_always_suffices_for_word_aligned_bases() {
        for align in [2usize, 4, 8, 16, 32, 64] {
            let slack = (align - 1) / ELEMENT_BYTES;
            for base in (0x2000..0x2000 + 2 * align).step_by(ELEMENT_BYTES) {
                let idx = first_aligned_index(base, align, slack).unwrap();
                assert_eq!((base + idx * ELEMENT_BYTES) % align, 0);
            }
        }
    }
}
