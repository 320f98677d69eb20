//! Cross-checks the cofactor-expansion results against nalgebra's LU-based
//! determinant and inverse.

use nalgebra::DMatrix;
use numkern_core::Matrix;

fn to_nalgebra(m: &Matrix) -> DMatrix<f64> {
    DMatrix::from_row_slice(m.rows(), m.columns(), m.as_slice())
}

/// Deterministic, well-conditioned test matrices of order 1 through 6.
fn samples() -> Vec<Matrix> {
    (1..=6)
        .map(|n| {
            let data = (0..n * n)
                .map(|i| {
                    let (r, c) = (i / n, i % n);
                    let off_diagonal = ((r * 7 + c * 3) % 11) as f64 - 5.0;
                    if r == c {
                        off_diagonal + 4.0 * n as f64
                    } else {
                        off_diagonal * 0.5
                    }
                })
                .collect();
            Matrix::from_vec(n, n, data).expect("sample is correct")
        })
        .collect()
}

#[test]
fn determinant_matches_nalgebra() {
    for m in samples() {
        let ours = m.determinant().expect("square sample");
        let theirs = to_nalgebra(&m).determinant();
        assert!(
            (ours - theirs).abs() <= 1e-9 * theirs.abs().max(1.0),
            "order {}: {ours} vs {theirs}",
            m.rows()
        );
    }
}

#[test]
fn inverse_matches_nalgebra() -> anyhow::Result<()> {
    for m in samples() {
        let ours = m.inverse()?;
        let theirs = to_nalgebra(&m)
            .try_inverse()
            .ok_or_else(|| anyhow::anyhow!("nalgebra found order {} singular", m.rows()))?;
        let theirs = Matrix::from_vec(m.rows(), m.columns(), theirs.transpose().as_slice().to_vec())?;
        assert!(ours.approx_eq(&theirs, 1e-9), "order {}", m.rows());
    }
    Ok(())
}

#[test]
fn product_and_transpose_match_nalgebra() -> anyhow::Result<()> {
    let a = Matrix::filled(3, 4, -2.0, 0.5)?;
    let b = Matrix::filled(4, 2, 1.0, -0.25)?;
    let ours = a.mul_matrix(&b)?;
    let theirs = to_nalgebra(&a) * to_nalgebra(&b);
    for r in 0..ours.rows() {
        for c in 0..ours.columns() {
            assert!((ours[(r, c)] - theirs[(r, c)]).abs() < 1e-12);
        }
    }

    let t = a.transpose()?;
    assert_eq!(to_nalgebra(&t), to_nalgebra(&a).transpose());
    Ok(())
}

#[test]
fn singular_matrix_agrees_with_nalgebra() {
    let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 5.0]])
        .expect("correct matrix");
    assert!(m.inverse().is_err());
    assert_eq!(m.determinant().expect("square"), 0.0);
    assert!(to_nalgebra(&m).determinant().abs() < 1e-12);
}
