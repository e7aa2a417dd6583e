use crate::{problem::Problem, sparse::inner_product};

/// Computes in place the sub-gradient of the regularized hinge loss for one example.
///
/// On entry `grad` must hold a snapshot of the weights at the coordinates the example
/// touches. On return those same coordinates hold the sub-gradient of
/// `lambda * Σ(w_j² / d_j) / 2 + max(0, 1 - y·ŷ)`. Every other coordinate is left as is,
/// the caller applies the result only where the example is active.
///
/// # Arguments
/// * `grad` - The snapshot buffer, overwritten with the gradient.
/// * `lambda` - The regularization strength.
/// * `prob` - The training problem.
/// * `i` - The example to differentiate against.
pub fn hinge_gradient(grad: &mut [f64], lambda: f64, prob: &Problem, i: usize) {
    let x = prob.example(i);
    let y = prob.label(i);
    let d = prob.divisors();

    let y_pred = inner_product(grad, x);
    let violated = y * y_pred < 1.;

    for feat in x {
        let j = feat.position();
        let reg = lambda * grad[j] / d[j];
        grad[j] = if violated { reg - y * feat.value } else { reg };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparse::SparseVector;

    fn problem(y: f64, d: Vec<f64>) -> Problem {
        let xs = vec![SparseVector::from_pairs([(1, 2.), (3, -1.)])];
        Problem::new(3, vec![y], xs, d).unwrap()
    }

    #[test]
    fn margin_violated_adds_loss_term() {
        let prob = problem(1., vec![2., 1., 4.]);
        // y_pred = 0.5 * 2 + 0.25 * -1 = 0.75 < 1
        let mut grad = [0.5, 7., 0.25];

        hinge_gradient(&mut grad, 0.1, &prob, 0);

        assert_eq!(grad[0], 0.1 * 0.5 / 2. - 2.);
        assert_eq!(grad[1], 7.);
        assert_eq!(grad[2], 0.1 * 0.25 / 4. + 1.);
    }

    #[test]
    fn margin_satisfied_only_regularizes() {
        let prob = problem(-1., vec![1., 1., 1.]);
        // y * y_pred = -1 * (0 * 2 + 3 * -1) = 3 >= 1
        let mut grad = [0., 0., 3.];

        hinge_gradient(&mut grad, 0.5, &prob, 0);

        assert_eq!(grad, [0., 0., 1.5]);
    }

    #[test]
    fn margin_exactly_one_counts_as_satisfied() {
        let prob = problem(1., vec![1., 1., 1.]);
        let mut grad = [0.5, 0., 0.];

        hinge_gradient(&mut grad, 1., &prob, 0);

        assert_eq!(grad[0], 0.5);
    }

    #[test]
    fn zero_divisor_yields_non_finite_gradient() {
        let prob = problem(1., vec![0., 1., 1.]);
        let mut grad = [1., 0., 0.];

        hinge_gradient(&mut grad, 1., &prob, 0);

        assert!(!grad[0].is_finite());
    }
}
