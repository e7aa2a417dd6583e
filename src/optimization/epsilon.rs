use crate::{problem::Problem, sparse::inner_product};

/// Applies one epsilon-insensitive sub-gradient step to `w` in place.
///
/// The learning rate decays as `1 / (lambda * (t + 1))` and every weight is scaled by
/// `c1 = 1 - 1 / (1 + t)` before the loss term is added. The scaling touches all `dim`
/// coordinates, so a step costs `O(dim)` however sparse the example is.
///
/// `c1` uses real division. An integer `1 / (1 + t)` would give `c1 = 0` on the first
/// step and `1` on every later one, the two only agree at `t = 0`.
///
/// # Arguments
/// * `w` - The dense weights, updated in place.
/// * `lambda` - The regularization strength.
/// * `p` - The half-width of the insensitive band.
/// * `prob` - The training problem.
/// * `i` - The sampled example.
/// * `t` - The 0-based iteration.
pub fn epsilon_insensitive_update(
    w: &mut [f64],
    lambda: f64,
    p: f64,
    prob: &Problem,
    i: usize,
    t: usize,
) {
    let x = prob.example(i);
    let y = prob.label(i);
    let t = t as f64;

    let mut lr = 1. / (lambda * (t + 1.));
    let c1 = 1. - 1. / (1. + t);

    let z = inner_product(w, x);

    if z - y > p || y - z > p {
        if z - y > p {
            lr = -lr;
        }

        let mut feats = x.iter().peekable();
        for (j, wj) in w.iter_mut().enumerate() {
            let step = match feats.next_if(|feat| feat.position() == j) {
                Some(feat) => lr * feat.value,
                None => 0.,
            };
            *wj = c1 * *wj + step;
        }
    } else {
        w.iter_mut().for_each(|wj| *wj *= c1);
    }
}
