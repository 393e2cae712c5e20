//! Adam optimizer

use super::Optimizer;
use ndarray::Array1;

/// Adam optimizer with bias-corrected moment estimates.
///
/// Update per parameter:
/// `m_t = β1·m + (1-β1)·g`, `v_t = β2·v + (1-β2)·g²`,
/// `θ -= lr_t · m_t / (√v_t + ε)` where
/// `lr_t = lr · √(1-β2^t) / (1-β1^t)` folds in the bias correction.
///
/// Moment buffers are allocated lazily on the first step, one pair per
/// parameter slot.
pub struct Adam {
    lr: f32,
    beta1: f32,
    beta2: f32,
    epsilon: f32,
    t: u64,
    m: Vec<Option<Array1<f32>>>, // First moment
    v: Vec<Option<Array1<f32>>>, // Second moment
}

impl Adam {
    /// Create a new Adam optimizer
    #[must_use]
    pub fn new(lr: f32, beta1: f32, beta2: f32, epsilon: f32) -> Self {
        Self {
            lr,
            beta1,
            beta2,
            epsilon,
            t: 0,
            m: Vec::new(),
            v: Vec::new(),
        }
    }

    /// Create Adam with the standard defaults (β1 = 0.9, β2 = 0.999, ε = 1e-8)
    #[must_use]
    pub fn default_params(lr: f32) -> Self {
        Self::new(lr, 0.9, 0.999, 1e-8)
    }

    /// Number of steps taken so far.
    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.t
    }

    fn ensure_moments(&mut self, n_params: usize) {
        if self.m.is_empty() {
            self.m = (0..n_params).map(|_| None).collect();
            self.v = (0..n_params).map(|_| None).collect();
        }
    }
}

impl Optimizer for Adam {
    fn step(&mut self, params: &mut [&mut [f32]], grads: &[&[f32]]) {
        assert_eq!(
            params.len(),
            grads.len(),
            "params and grads must be parallel"
        );
        self.ensure_moments(params.len());
        self.t += 1;

        // Bias correction folded into the step size
        let lr_t = self.lr
            * ((1.0 - self.beta2.powi(self.t as i32)).sqrt()
                / (1.0 - self.beta1.powi(self.t as i32)));

        for (i, (param, grad)) in params.iter_mut().zip(grads.iter()).enumerate() {
            assert_eq!(param.len(), grad.len(), "param/grad length mismatch");

            let m = self.m[i].get_or_insert_with(|| Array1::zeros(grad.len()));
            let v = self.v[i].get_or_insert_with(|| Array1::zeros(grad.len()));

            for (j, (p, &g)) in param.iter_mut().zip(grad.iter()).enumerate() {
                m[j] = self.beta1 * m[j] + (1.0 - self.beta1) * g;
                v[j] = self.beta2 * v[j] + (1.0 - self.beta2) * g * g;
                *p -= lr_t * m[j] / (v[j].sqrt() + self.epsilon);
            }
        }
    }

    fn lr(&self) -> f32 {
        self.lr
    }

    fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_step_magnitude() {
        // With bias correction, the very first update moves each parameter
        // by ~lr in the direction opposite its gradient.
        let mut opt = Adam::default_params(0.001);
        let mut data = vec![1.0f32, -2.0];
        let grads: Vec<f32> = vec![0.5, -0.5];

        opt.step(&mut [&mut data], &[&grads]);

        assert_relative_eq!(data[0], 1.0 - 0.001, epsilon = 1e-5);
        assert_relative_eq!(data[1], -2.0 + 0.001, epsilon = 1e-5);
    }

    #[test]
    fn test_step_counter() {
        let mut opt = Adam::default_params(0.001);
        assert_eq!(opt.step_count(), 0);
        let mut data = vec![0.0f32];
        opt.step(&mut [&mut data], &[&[1.0f32][..]]);
        opt.step(&mut [&mut data], &[&[1.0f32][..]]);
        assert_eq!(opt.step_count(), 2);
    }

    #[test]
    fn test_converges_on_quadratic() {
        // Minimize f(x) = x², gradient 2x.
        let mut opt = Adam::default_params(0.1);
        let mut x = vec![3.0f32];
        for _ in 0..500 {
            let g = vec![2.0 * x[0]];
            opt.step(&mut [&mut x], &[&g]);
        }
        // Adam's step size is scale-invariant, so the tail oscillates in a
        // small limit cycle around the minimum rather than vanishing.
        assert!(x[0].abs() < 0.05, "did not converge: x = {}", x[0]);
    }

    #[test]
    fn test_zero_gradient_leaves_params() {
        let mut opt = Adam::default_params(0.001);
        let mut data = vec![1.5f32, -0.5];
        let grads: Vec<f32> = vec![0.0, 0.0];
        opt.step(&mut [&mut data], &[&grads]);
        assert_eq!(data, vec![1.5, -0.5]);
    }

    #[test]
    fn test_multiple_param_groups() {
        let mut opt = Adam::default_params(0.001);
        let mut a = vec![1.0f32];
        let mut b = vec![2.0f32, 3.0];
        let ga: Vec<f32> = vec![1.0];
        let gb: Vec<f32> = vec![-1.0, 1.0];

        opt.step(&mut [&mut a, &mut b], &[&ga, &gb]);

        assert!(a[0] < 1.0);
        assert!(b[0] > 2.0);
        assert!(b[1] < 3.0);
    }

    #[test]
    fn test_lr_accessors() {
        let mut opt = Adam::default_params(0.001);
        assert_eq!(opt.lr(), 0.001);
        opt.set_lr(0.01);
        assert_eq!(opt.lr(), 0.01);
    }

    #[test]
    #[should_panic(expected = "parallel")]
    fn test_mismatched_groups_panic() {
        let mut opt = Adam::default_params(0.001);
        let mut a = vec![1.0f32];
        opt.step(&mut [&mut a], &[]);
    }
}
