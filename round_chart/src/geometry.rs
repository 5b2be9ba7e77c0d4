// geometry.rs - Round addressing for concentric square charts
//
// A "round" is the ring of cells at equal Chebyshev distance from the
// center cell (⌊w/2⌋, ⌊h/2⌋).

/// Smallest accepted grid width or height.
pub const MIN_DIMENSION: usize = 5;
/// Largest accepted grid width or height.
pub const MAX_DIMENSION: usize = 50;

pub fn dimension_in_range(value: usize) -> bool {
    (MIN_DIMENSION..=MAX_DIMENSION).contains(&value)
}

/// The center cell. Even sizes round down, so the center sits just
/// right of / below the midpoint.
pub fn center(width: usize, height: usize) -> (usize, usize) {
    (width / 2, height / 2)
}

/// Round index of `(x, y)` in a `width` x `height` grid.
pub fn round_of(x: usize, y: usize, width: usize, height: usize) -> usize {
    let (cx, cy) = center(width, height);
    x.abs_diff(cx).max(y.abs_diff(cy))
}

/// Largest round index any cell of the grid has.
///
/// On even sides the far edge from the center is the low edge (index 0);
/// on odd sides both edges are equally far.
pub fn max_round(width: usize, height: usize) -> usize {
    let (cx, cy) = center(width, height);
    let far_x = cx.max(width.saturating_sub(1).saturating_sub(cx));
    let far_y = cy.max(height.saturating_sub(1).saturating_sub(cy));
    far_x.max(far_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_len(round: usize, width: usize, height: usize) -> usize {
        (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|&(x, y)| round_of(x, y, width, height) == round)
            .count()
    }

    #[test]
    fn center_rounds_down() {
        assert_eq!(center(20, 20), (10, 10));
        assert_eq!(center(5, 7), (2, 3));
    }

    #[test]
    fn corner_of_twenty_is_round_ten() {
        assert_eq!(round_of(0, 0, 20, 20), 10);
        assert_eq!(round_of(19, 19, 20, 20), 9);
        assert_eq!(round_of(10, 10, 20, 20), 0);
        assert_eq!(max_round(20, 20), 10);
    }

    #[test]
    fn max_round_matches_brute_force() {
        for width in MIN_DIMENSION..=MAX_DIMENSION {
            for height in MIN_DIMENSION..=MAX_DIMENSION {
                let brute = (0..height)
                    .flat_map(|y| (0..width).map(move |x| (x, y)))
                    .map(|(x, y)| round_of(x, y, width, height))
                    .max()
                    .unwrap();
                assert_eq!(max_round(width, height), brute, "{width}x{height}");
            }
        }
    }

    #[test]
    fn symmetric_about_center() {
        // odd sides reflect cleanly through the center cell
        for (width, height) in [(5, 5), (7, 11), (49, 21)] {
            for y in 0..height {
                for x in 0..width {
                    let r = round_of(x, y, width, height);
                    assert_eq!(r, round_of(width - 1 - x, y, width, height));
                    assert_eq!(r, round_of(x, height - 1 - y, width, height));
                    assert_eq!(r, round_of(width - 1 - x, height - 1 - y, width, height));
                }
            }
        }
    }

    #[test]
    fn symmetric_under_reflection_about_center_cell() {
        // reflections about (cx, cy), including diagonal swaps on square grids
        for size in [6, 20, 50] {
            let (c, _) = center(size, size);
            for y in 0..size {
                for x in 0..size {
                    let r = round_of(x, y, size, size);
                    assert_eq!(r, round_of(y, x, size, size));
                    let mx = 2 * c as isize - x as isize;
                    let my = 2 * c as isize - y as isize;
                    if (0..size as isize).contains(&mx) && (0..size as isize).contains(&my) {
                        assert_eq!(r, round_of(mx as usize, my as usize, size, size));
                    }
                }
            }
        }
    }

    #[test]
    fn round_lengths_on_five_by_five() {
        assert_eq!(round_len(0, 5, 5), 1);
        assert_eq!(round_len(1, 5, 5), 8);
        assert_eq!(round_len(2, 5, 5), 16);
        assert_eq!(round_len(3, 5, 5), 0);
    }

    #[test]
    fn dimension_bounds() {
        assert!(!dimension_in_range(4));
        assert!(dimension_in_range(5));
        assert!(dimension_in_range(50));
        assert!(!dimension_in_range(51));
    }
}
