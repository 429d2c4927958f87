
/// This module contains small numerical helpers shared by the solver, the
/// estimators and the tests.
pub mod helpers {
    use crate::Float;
    use ndarray::ArrayView1;

    /// Number of iterations between two progress observations: `ceil(n / 10)`.
    ///
    /// Returns `1` for fewer than ten iterations so that every iteration is
    /// reported.
    pub fn progress_interval(n_iterations: usize) -> usize {
        ((n_iterations + 9) / 10).max(1)
    }

    /// This function computes the ordinary least-squares solution `(w, b)` in
    /// closed form. It is the point gradient descent on the quadratic datafit
    /// converges to, and serves as a reference in tests and benchmarks.
    ///
    /// When all features are equal the slope is undefined; `w = 0` and the
    /// intercept is the mean target.
    pub fn least_squares<F: Float>(x: ArrayView1<F>, y: ArrayView1<F>) -> (F, F) {
        let n_samples = F::cast(x.len());
        let x_mean = x.sum() / n_samples;
        let y_mean = y.sum() / n_samples;
        let mut cov = F::zero();
        let mut var = F::zero();
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            cov += (xi - x_mean) * (yi - y_mean);
            var += (xi - x_mean) * (xi - x_mean);
        }
        if var == F::zero() {
            return (F::zero(), y_mean);
        }
        let w = cov / var;
        (w, y_mean - w * x_mean)
    }
}

/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::{Array1, ArrayView1};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    pub fn assert_array_all_close<F>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    pub fn fill_random_vector(capacity: usize, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();

        let mut data: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..data.capacity() {
            data.push(normal.sample(&mut r));
        }
        data
    }

    /// Generates `n_samples` points around the line `y = w * x + b` with unit
    /// gaussian features and gaussian noise of standard deviation `noise`.
    pub fn generate_random_data(
        n_samples: usize,
        w: f64,
        b: f64,
        noise: f64,
    ) -> (Array1<f64>, Array1<f64>) {
        let x = Array1::from(fill_random_vector(n_samples, 42));
        let e = Array1::from(fill_random_vector(n_samples, 43));
        let y = x.mapv(|xi| w * xi + b) + e * noise;
        (x, y)
    }
}
