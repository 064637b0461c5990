// patterns.rs - Preset patterns and random seeding

use rand::Rng;
use rand::distributions::Bernoulli;

use crate::error::{LifeError, Result};
use crate::grid::Grid;

/// A named shape, cells given relative to its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding box as `(height, width)`.
    pub fn size(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 2), (1, 1), (1, 2), (2, 0), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Position in `PATTERNS` of the pattern called `name`, ignoring case.
pub fn index_of(name: &str) -> Option<usize> {
    PATTERNS.iter().position(|p| p.name.eq_ignore_ascii_case(name))
}

pub fn find(name: &str) -> Option<&'static Pattern> {
    index_of(name).map(|i| &PATTERNS[i])
}

/// Fresh `rows x cols` grid with `pattern` centred. Cells that fall off the
/// edges are dropped.
pub fn apply_pattern(rows: usize, cols: usize, pattern: &Pattern) -> Result<Grid> {
    let (height, width) = pattern.size();
    let top = rows.saturating_sub(height) / 2;
    let left = cols.saturating_sub(width) / 2;

    let placed: Vec<(usize, usize)> = pattern
        .cells
        .iter()
        .map(|&(row, col)| (top + row, left + col))
        // clipped
        .filter(|&(row, col)| row < rows && col < cols)
        .collect();
    Grid::with_live_cells(rows, cols, &placed)
}

/// Fresh grid where every cell is alive independently with probability `density`.
pub fn random_grid<R: Rng>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Result<Grid> {
    let alive = Bernoulli::new(density)
        .map_err(|_| LifeError::validation(format!("density {density} is outside [0, 1]")))?;
    Ok(Grid::from_fn(rows, cols, |_, _| rng.sample(alive)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn pattern_sizes() {
        assert_eq!(find("glider").map(Pattern::size), Some((3, 3)));
        assert_eq!(find("Pulsar").map(Pattern::size), Some((13, 13)));
        assert_eq!(find("Gosper Glider Gun").map(Pattern::size), Some((9, 36)));
        assert!(find("spaceship").is_none());
        assert_eq!(index_of("r-PENTOMINO"), Some(5));
    }

    #[test]
    fn blinker_is_centred() {
        let grid = apply_pattern(5, 5, find("Blinker").unwrap()).unwrap();
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn oversized_pattern_is_clipped() {
        let gun = find("Gosper Glider Gun").unwrap();
        let grid = apply_pattern(10, 20, gun).unwrap();
        assert!(grid.live_count() > 0);
        assert!(grid.live_count() < gun.cells.len());
        assert!(grid.live_cells().all(|(r, c)| r < 10 && c < 20));
    }

    #[test]
    fn exact_fit_keeps_every_cell() {
        let pulsar = find("Pulsar").unwrap();
        let grid = apply_pattern(13, 13, pulsar).unwrap();
        assert_eq!(grid.live_count(), pulsar.cells.len());
    }

    #[test]
    fn density_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(random_grid(20, 30, 0.0, &mut rng).unwrap().is_extinct());
        assert!(random_grid(20, 30, 1.0, &mut rng).unwrap().is_all_alive());
    }

    #[test]
    fn invalid_density_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(matches!(
            random_grid(3, 3, 1.5, &mut rng),
            Err(LifeError::Validation(_))
        ));
        assert!(random_grid(3, 3, -0.1, &mut rng).is_err());
    }

    #[test]
    fn seeded_fill_is_reproducible() {
        let a = random_grid(16, 16, 0.3, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let b = random_grid(16, 16, 0.3, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }
}
