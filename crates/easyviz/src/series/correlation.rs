//! Pearson correlation over pairwise-complete observations.

/// Correlation of two columns using only rows where both are present.
///
/// Returns `None` with fewer than two complete pairs or when either side
/// has zero variance.
pub fn pearson(a: &[Option<f64>], b: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Symmetric correlation matrix of the given columns.
pub fn correlation_matrix(columns: &[Vec<Option<f64>>]) -> Vec<Vec<Option<f64>>> {
    let n = columns.len();
    let mut matrix = vec![vec![None; n]; n];

    for i in 0..n {
        for j in i..n {
            let r = if i == j {
                // Self-correlation is 1 wherever it is defined at all.
                pearson(&columns[i], &columns[j]).map(|_| 1.0)
            } else {
                pearson(&columns[i], &columns[j])
            };
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_perfect_correlation() {
        let r = pearson(&some(&[1.0, 2.0, 3.0]), &some(&[2.0, 4.0, 6.0])).unwrap();
        assert!((r - 1.0).abs() < 1e-12);

        let r = pearson(&some(&[1.0, 2.0, 3.0]), &some(&[3.0, 2.0, 1.0])).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_skips_incomplete_pairs() {
        let a = vec![Some(1.0), None, Some(2.0), Some(3.0)];
        let b = vec![Some(10.0), Some(99.0), Some(20.0), Some(30.0)];
        let r = pearson(&a, &b).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_undefined_cases() {
        assert_eq!(pearson(&some(&[1.0]), &some(&[2.0])), None);
        assert_eq!(pearson(&some(&[1.0, 1.0, 1.0]), &some(&[1.0, 2.0, 3.0])), None);
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let columns = vec![
            some(&[1.0, 2.0, 3.0, 4.0]),
            some(&[2.0, 1.0, 4.0, 3.0]),
            some(&[5.0, 5.0, 5.0, 5.0]),
        ];
        let matrix = correlation_matrix(&columns);

        assert_eq!(matrix[0][0], Some(1.0));
        assert_eq!(matrix[0][1], matrix[1][0]);
        assert_eq!(matrix[2][2], None);
        assert_eq!(matrix[0][2], None);
    }
}
