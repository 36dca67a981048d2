//! Built-in kernel functions for [`build_kernel_matrix`](super::kernel::build_kernel_matrix).

use ndarray::{ArrayView1, ArrayView2};

/// Linear kernel between two feature vectors.
pub fn dot(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.dot(&b)
}

/// Linear kernel between every row of `a` and every row of `b`, summed to a scalar.
///
/// Rows are typically per-atom feature vectors of two structures, which may have
/// different atom counts.
pub fn summed_linear(a: ArrayView2<'_, f64>, b: ArrayView2<'_, f64>) -> f64 {
    a.dot(&b.t()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn dot_is_inner_product() {
        let a = arr1(&[1.0, 2.0, 3.0]);
        let b = arr1(&[4.0, -5.0, 6.0]);
        assert_eq!(dot(a.view(), b.view()), 12.0);
    }

    #[test]
    fn summed_linear_sums_all_row_products() {
        let a = arr2(&[[1.0, 0.0], [0.0, 2.0]]);
        let b = arr2(&[[3.0, 1.0], [1.0, 1.0], [0.0, 1.0]]);
        // a·bᵀ = [[3, 1, 0], [2, 2, 2]]
        assert_eq!(summed_linear(a.view(), b.view()), 10.0);
    }

    #[test]
    fn summed_linear_equals_dot_of_column_sums() {
        let a = arr2(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        let b = arr2(&[[0.5, -1.0]]);
        let expected = dot(a.sum_axis(ndarray::Axis(0)).view(), b.row(0));
        assert_eq!(summed_linear(a.view(), b.view()), expected);
    }
}
