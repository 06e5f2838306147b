use crate::error::PlotError;
use ndarray::Array1;
use num_traits::Float;
use std::f64::consts::PI;
use std::time::Duration;

/// Physical parameters of a run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Params {
    /// wave speed
    pub c: f64,
    /// damping of the amplitude
    pub alpha: f64,
    /// the interval is [0, length]
    pub length: f64,
    /// final time
    pub time: f64,
    /// spatial divisions (nx + 1 points)
    pub nx: usize,
    /// temporal divisions (nt + 1 steps)
    pub nt: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            c: 0.5,
            alpha: 0.05,
            length: 4. * PI,
            time: 50.,
            nx: 200,
            nt: 100,
        }
    }
}

/// How the frames are paced on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Playback {
    /// sleep after every drawn frame
    pub pause: Duration,
    /// draw one step out of `every`
    pub every: usize,
    /// frame interval of an `Animation`
    pub interval: Duration,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            pause: Duration::from_millis(50),
            every: 1,
            interval: Duration::from_millis(200),
        }
    }
}

/// Spatial grid over [0, L] together with the time stepping.
#[derive(Debug, Clone)]
pub struct Domain<T> {
    pub grid: Array1<T>,
    length: T,
    dx: T,
    dt: T,
    nt: usize,
}

// usize always converts to a float
fn cast<T: Float>(n: usize) -> T {
    T::from(n).unwrap()
}

impl<T> Domain<T>
where
    T: Float,
{
    pub fn new(length: T, time: T, nx: usize, nt: usize) -> Result<Self, PlotError> {
        if nx == 0 {
            return Err(PlotError::Params("nx must be at least 1"));
        }
        if nt == 0 {
            return Err(PlotError::Params("nt must be at least 1"));
        }
        if !length.is_finite() || length <= T::zero() {
            return Err(PlotError::Params("length must be finite and positive"));
        }
        if !time.is_finite() || time <= T::zero() {
            return Err(PlotError::Params("time must be finite and positive"));
        }

        Ok(Self {
            grid: Array1::linspace(T::zero(), length, nx + 1),
            length,
            dx: length / cast(nx),
            dt: time / cast(nt),
            nt,
        })
    }

    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn dx(&self) -> T {
        self.dx
    }

    pub fn dt(&self) -> T {
        self.dt
    }

    pub fn length(&self) -> T {
        self.length
    }

    /// Number of time steps, including n = 0.
    pub fn frames(&self) -> usize {
        self.nt + 1
    }

    pub fn time_at(&self, n: usize) -> T {
        cast::<T>(n) * self.dt
    }

    /// `(n, t)` for n = 0..=nt
    pub fn times(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        (0..=self.nt).map(move |n| (n, self.time_at(n)))
    }
}

impl Domain<f64> {
    pub fn from_params(params: &Params) -> Result<Self, PlotError> {
        Self::new(params.length, params.time, params.nx, params.nt)
    }
}
