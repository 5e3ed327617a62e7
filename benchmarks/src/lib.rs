//! Shared maze generators for the wayfind benchmark suites.

use wayfind_harness::worlds::grid_maze::GridMaze;

/// Layout text for a `width` × `height` maze (walls included) with `P` in the
/// top-left interior corner and `.` in the bottom-right one. `interior`
/// picks the character of every other interior cell from `(row, col)`.
fn layout(width: usize, height: usize, interior: impl Fn(usize, usize) -> char) -> String {
    let mut text = String::with_capacity((width + 1) * height);
    for row in 0..height {
        for col in 0..width {
            let border = row == 0 || col == 0 || row + 1 == height || col + 1 == width;
            let ch = if border {
                '%'
            } else if (row, col) == (1, 1) {
                'P'
            } else if (row, col) == (height - 2, width - 2) {
                '.'
            } else {
                interior(row, col)
            };
            text.push(ch);
        }
        text.push('\n');
    }
    text
}

fn parse(text: &str) -> GridMaze {
    GridMaze::parse(text).expect("generated layout parses")
}

/// An empty room: many equal-cost paths, so tie-breaking dominates.
///
/// # Panics
///
/// Panics if `width` or `height` is below 4.
#[must_use]
pub fn open_room(width: usize, height: usize) -> GridMaze {
    assert!(width >= 4 && height >= 4, "room must be at least 4x4");
    parse(&layout(width, height, |_, _| ' '))
}

/// A room with a wall pillar on every cell whose coordinates are both even,
/// producing a lattice of short cycles.
///
/// # Panics
///
/// Panics if `width` or `height` is below 4.
#[must_use]
pub fn pillar_room(width: usize, height: usize) -> GridMaze {
    assert!(width >= 4 && height >= 4, "room must be at least 4x4");
    parse(&layout(width, height, |row, col| {
        if row % 2 == 0 && col % 2 == 0 {
            '%'
        } else {
            ' '
        }
    }))
}

/// An open room whose cells have entry costs 1..=9 in a fixed pattern, so
/// cost-aware strategies and BFS disagree.
///
/// # Panics
///
/// Panics if `width` or `height` is below 4.
#[must_use]
pub fn weighted_room(width: usize, height: usize) -> GridMaze {
    assert!(width >= 4 && height >= 4, "room must be at least 4x4");
    parse(&layout(width, height, |row, col| {
        let digit = 1 + (row * 31 + col * 17) % 9;
        char::from_digit(u32::try_from(digit).unwrap_or(1), 10).unwrap_or('1')
    }))
}
