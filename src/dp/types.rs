/// Traceback direction stored per cell: which neighbor produced the
/// winning score. Discriminant values are an implementation detail;
/// callers use the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Diagonal move: `a[i-1]` aligned to `b[j-1]`.
    Match = 0,
    /// Vertical move: `a[i-1]` aligned to a gap.
    Up = 1,
    /// Horizontal move: `b[j-1]` aligned to a gap.
    Left = 2,
    /// End of path: local-score floor or matrix origin.
    Terminate = 3,
}

/// Row-major flat storage for the score matrix `M`, the direction matrix
/// `N`, and (affine only) the gap-state matrices `D` (gap in `a`) and `R`
/// (gap in `b`). Dimensioned `(|a|+1) x (|b|+1)`.
#[derive(Debug)]
pub struct Matrices {
    rows: usize,
    cols: usize,
    pub m: Vec<i32>,
    pub n: Vec<Direction>,
    pub d: Option<Vec<i32>>,
    pub r: Option<Vec<i32>>,
}

impl Matrices {
    pub fn new(rows: usize, cols: usize, affine: bool) -> Self {
        let size = rows * cols;
        Self {
            rows,
            cols,
            m: vec![0; size],
            n: vec![Direction::Terminate; size],
            d: affine.then(|| vec![0; size]),
            r: affine.then(|| vec![0; size]),
        }
    }

    #[inline]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols);
        i * self.cols + j
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}
