use ndarray::Array1;
use num_traits::Float;
use std::fmt::Debug;

pub trait Wave<T: Float>: Debug {
    /// Amplitude at time `t` and position `x`.
    fn at(&self, t: T, x: T) -> T;

    /// Frame at time `t`, one value per grid point.
    fn sample(&self, t: T, grid: &Array1<T>) -> Array1<T> {
        grid.mapv(|x| self.at(t, x))
    }
}

/// ## Damped travelling wave
///
/// $$
/// u(t, x) = \sin(x - ct) \, e^{-\alpha t}
/// $$
///
/// At $t = 0$ this is $\sin(x)$ whatever the damping.
pub fn damped_wave<T: Float>(t: T, x: T, c: T, alpha: T) -> T {
    (x - c * t).sin() * (-alpha * t).exp()
}

/// Vectorised [`damped_wave`] over a whole grid.
pub fn sample<T: Float>(t: T, x: &Array1<T>, c: T, alpha: T) -> Array1<T> {
    let shift = c * t;
    let damping = (-alpha * t).exp();
    x.mapv(|x| (x - shift).sin() * damping)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DampedWave<T> {
    pub c: T,
    pub alpha: T,
}

impl<T> Wave<T> for DampedWave<T>
where
    T: Float + Debug,
{
    fn at(&self, t: T, x: T) -> T {
        damped_wave(t, x, self.c, self.alpha)
    }

    fn sample(&self, t: T, grid: &Array1<T>) -> Array1<T> {
        sample(t, grid, self.c, self.alpha)
    }
}
