/// Gotoh global alignment with affine gap costs
use crate::alignment::matrix::GotohMatrices;
use crate::alignment::result::AlignmentResult;
use crate::alignment::scoring::{AffineScoring, ScoringModel};
use crate::alignment::traceback::traceback;
use crate::sequence::SequenceRecord;
use tracing::{debug, trace};

/// Global aligner bound to one scoring regime.
///
/// Holds no per-call state: every `align` call builds and drops its own
/// matrices, so one aligner can be shared between threads. The symbol type
/// is chosen per call; any `T` the scoring model accepts will do.
#[derive(Debug, Clone)]
pub struct GotohAligner<S> {
    scoring: S,
}

impl<S> GotohAligner<S> {
    pub fn new(scoring: S) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &S {
        &self.scoring
    }

    pub fn align<T>(&self, a: &[T], b: &[T]) -> AlignmentResult<T>
    where
        T: Copy,
        S: ScoringModel<T>,
    {
        let matrices = self.matrices(a, b);
        self.align_with_matrices(&matrices, a, b)
    }

    /// Fill the matrices without tracing back, e.g. to inspect them.
    pub fn matrices<T>(&self, a: &[T], b: &[T]) -> GotohMatrices
    where
        T: Copy,
        S: ScoringModel<T>,
    {
        let matrices = GotohMatrices::build(a, b, &self.scoring);
        let (rows, cols) = matrices.dimensions();
        debug!(rows, cols, score = matrices.score(), "filled Gotoh matrices");
        matrices
    }

    /// Trace back through matrices previously built by [`Self::matrices`]
    /// for the same `a` and `b`.
    pub fn align_with_matrices<T>(
        &self,
        matrices: &GotohMatrices,
        a: &[T],
        b: &[T],
    ) -> AlignmentResult<T>
    where
        T: Copy,
        S: ScoringModel<T>,
    {
        let (aligned_a, aligned_b) = traceback(matrices, a, b, &self.scoring);
        trace!(columns = aligned_a.len(), "traceback complete");

        AlignmentResult {
            aligned_a,
            aligned_b,
            score: matrices.score(),
        }
    }

    /// Align two records symbol by symbol, one `char` per column.
    pub fn align_records(&self, a: &SequenceRecord, b: &SequenceRecord) -> AlignmentResult<char>
    where
        S: ScoringModel<char>,
    {
        debug!(id_a = %a.id, id_b = %b.id, len_a = a.len(), len_b = b.len(), "aligning records");
        self.align(&a.symbols(), &b.symbols())
    }
}

impl Default for GotohAligner<AffineScoring> {
    fn default() -> Self {
        Self::new(AffineScoring::default())
    }
}

/// One-shot alignment of `a` against `b`.
pub fn align<T, S>(a: &[T], b: &[T], scoring: &S) -> AlignmentResult<T>
where
    T: Copy,
    S: ScoringModel<T> + ?Sized,
{
    GotohAligner::new(scoring).align(a, b)
}
