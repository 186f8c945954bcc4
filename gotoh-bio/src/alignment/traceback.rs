/// Traceback through filled Gotoh matrices
use crate::alignment::matrix::GotohMatrices;
use crate::alignment::result::AlignedSymbol;
use crate::alignment::scoring::ScoringModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Diagonal,
    Up,
    Left,
}

/// Walk from `(m, n)` back to the origin and return the two aligned rows.
///
/// Each step takes the first move whose condition holds, in the order
/// diagonal, up (`a[i]` against a gap), left (`b[j]` against a gap). Among
/// equally good paths this always yields the same one.
pub fn traceback<T: Copy, S: ScoringModel<T> + ?Sized>(
    matrices: &GotohMatrices,
    a: &[T],
    b: &[T],
    scoring: &S,
) -> (Vec<AlignedSymbol<T>>, Vec<AlignedSymbol<T>>) {
    debug_assert_eq!(matrices.dimensions(), (a.len() + 1, b.len() + 1));

    let best = matrices.best();
    let gap_a = matrices.gap_a();

    let mut aligned_a = Vec::with_capacity(a.len() + b.len());
    let mut aligned_b = Vec::with_capacity(a.len() + b.len());

    let mut i = a.len();
    let mut j = b.len();

    while i > 0 || j > 0 {
        let current = best[(i, j)];

        let step = if i > 0
            && j > 0
            && current == best[(i - 1, j - 1)] + scoring.score(a[i - 1], b[j - 1])
        {
            Step::Diagonal
        } else if i > 0 && current == gap_a[(i, j)] {
            Step::Up
        } else {
            // Only reachable with j > 0: column 0 always satisfies the up test.
            Step::Left
        };

        match step {
            Step::Diagonal => {
                aligned_a.push(AlignedSymbol::Residue(a[i - 1]));
                aligned_b.push(AlignedSymbol::Residue(b[j - 1]));
                i -= 1;
                j -= 1;
            }
            Step::Up => {
                aligned_a.push(AlignedSymbol::Residue(a[i - 1]));
                aligned_b.push(AlignedSymbol::Gap);
                i -= 1;
            }
            Step::Left => {
                debug_assert!(j > 0, "no move available at ({}, {})", i, j);
                aligned_a.push(AlignedSymbol::Gap);
                aligned_b.push(AlignedSymbol::Residue(b[j - 1]));
                j -= 1;
            }
        }
    }

    aligned_a.reverse();
    aligned_b.reverse();

    (aligned_a, aligned_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::scoring::AffineScoring;
    use AlignedSymbol::{Gap, Residue};

    fn run(a: &[u8], b: &[u8], scoring: &AffineScoring) -> (Vec<AlignedSymbol>, Vec<AlignedSymbol>) {
        let matrices = GotohMatrices::build(a, b, scoring);
        traceback(&matrices, a, b, scoring)
    }

    #[test]
    fn test_all_diagonal() {
        let scoring = AffineScoring::new(1.0, -1.0, -10.0, -0.5);
        let (x, y) = run(b"AA", b"TT", &scoring);
        assert_eq!(x, vec![Residue(b'A'), Residue(b'A')]);
        assert_eq!(y, vec![Residue(b'T'), Residue(b'T')]);
    }

    #[test]
    fn test_first_column_walks_up() {
        let scoring = AffineScoring::default();
        let (x, y) = run(b"AC", b"", &scoring);
        assert_eq!(x, vec![Residue(b'A'), Residue(b'C')]);
        assert_eq!(y, vec![Gap, Gap]);
    }

    #[test]
    fn test_first_row_walks_left() {
        let scoring = AffineScoring::default();
        let (x, y) = run(b"", b"GT", &scoring);
        assert_eq!(x, vec![Gap, Gap]);
        assert_eq!(y, vec![Residue(b'G'), Residue(b'T')]);
    }

    #[test]
    fn test_diagonal_preferred_on_tie() {
        // Every move scores zero, so every path ties; diagonal wins each step.
        let scoring = AffineScoring::new(0.0, 0.0, 0.0, 0.0);
        let (x, y) = run(b"AC", b"GT", &scoring);
        assert!(x.iter().chain(y.iter()).all(|s| !s.is_gap()));
    }

    #[test]
    fn test_up_preferred_over_left_on_tie() {
        // Free gaps and a costly mismatch: at (1, 1) both gap moves tie and up wins.
        let scoring = AffineScoring::new(1.0, -5.0, 0.0, 0.0);
        let (x, y) = run(b"A", b"C", &scoring);
        assert_eq!(x, vec![Gap, Residue(b'A')]);
        assert_eq!(y, vec![Residue(b'C'), Gap]);
    }

    #[test]
    fn test_column_zero_only_moves_up() {
        let scoring = AffineScoring::new(0.0, 0.0, 0.0, 0.0);
        let (x, y) = run(b"AA", b"A", &scoring);
        assert_eq!(x, vec![Residue(b'A'), Residue(b'A')]);
        assert_eq!(y, vec![Gap, Residue(b'A')]);
    }

    #[test]
    fn test_deletion_is_placed_as_one_run() {
        let scoring = AffineScoring::new(2.0, -4.0, -5.0, -1.0);
        let (x, y) = run(b"ACGGGT", b"ACT", &scoring);
        assert_eq!(x.len(), y.len());
        let gap_positions: Vec<usize> = y
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_gap())
            .map(|(k, _)| k)
            .collect();
        assert_eq!(gap_positions.len(), 3);
        assert!(gap_positions.windows(2).all(|w| w[1] == w[0] + 1));
    }
}
