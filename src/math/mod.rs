//! Mathematical utilities for beam analysis

pub mod singularity;

use nalgebra::{DMatrix, DVector};

pub use singularity::{Side, SingularitySeries, SingularityTerm};

pub type Mat = DMatrix<f64>;
pub type DVec = DVector<f64>;

/// Solve `a * x = b` by Gaussian elimination with partial pivoting.
///
/// Returns `None` when a pivot falls below `rel_tol` relative to the largest
/// coefficient in `a`, i.e. the system is singular or too ill-conditioned to
/// trust. Beam systems are tiny (a handful of reaction unknowns), so a dense
/// elimination is the right tool here.
pub fn solve_partial_pivot(a: &Mat, b: &DVec, rel_tol: f64) -> Option<DVec> {
    let n = a.nrows();
    debug_assert_eq!(n, a.ncols());
    debug_assert_eq!(n, b.len());

    let mut m = a.clone_owned();
    let mut rhs = b.clone_owned();

    let scale = m.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if scale == 0.0 {
        return None;
    }

    for k in 0..n {
        // Pick the largest remaining pivot in column k
        let mut pivot_row = k;
        let mut pivot_abs = m[(k, k)].abs();
        for r in (k + 1)..n {
            if m[(r, k)].abs() > pivot_abs {
                pivot_abs = m[(r, k)].abs();
                pivot_row = r;
            }
        }

        if pivot_abs < rel_tol * scale {
            return None;
        }

        if pivot_row != k {
            m.swap_rows(k, pivot_row);
            rhs.swap_rows(k, pivot_row);
        }

        for r in (k + 1)..n {
            let factor = m[(r, k)] / m[(k, k)];
            if factor == 0.0 {
                continue;
            }
            for c in k..n {
                m[(r, c)] -= factor * m[(k, c)];
            }
            rhs[r] -= factor * rhs[k];
        }
    }

    // Back substitution
    let mut x = DVec::zeros(n);
    for k in (0..n).rev() {
        let mut sum = rhs[k];
        for c in (k + 1)..n {
            sum -= m[(k, c)] * x[c];
        }
        x[k] = sum / m[(k, k)];
    }

    Some(x)
}
