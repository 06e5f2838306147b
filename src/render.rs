use crate::animation::Animation;
use crate::backend::{Backend, Window};
use crate::base::{Domain, Playback};
use crate::error::PlotError;
use crate::scene::{AxesId, Bounds, Layout, LineId, Scene};
use crate::waves::Wave;
use crate::BoxedUpdate;
use itertools::Itertools;
use log::{debug, info, trace};
use ndarray::Array1;
use std::time::Duration;

pub const TITLE: &str = "u(t, x) = sin(x - c t) exp(-alpha t)";

/// Fixed viewport, so the picture does not jitter from frame to frame.
pub fn bounds(domain: &Domain<f64>) -> Bounds {
    Bounds::new(0., domain.length(), -1.1, 1.1)
}

pub trait Renderer {
    /// Whatever the renderer keeps between two frames.
    type Target;

    fn prepare(&self, scene: &mut Scene) -> Result<Self::Target, PlotError>;

    fn draw(
        &self,
        scene: &mut Scene,
        target: &mut Self::Target,
        grid: &Array1<f64>,
        frame: &Array1<f64>,
        bounds: Bounds,
    ) -> Result<(), PlotError>;

    /// Steps through n = 0..=nt, drawing one step out of `playback.every`
    /// and pausing after each. Returns the number of frames drawn.
    fn run<B, W>(
        &self,
        window: &mut Window<B>,
        domain: &Domain<f64>,
        wave: &W,
        playback: &Playback,
    ) -> Result<usize, PlotError>
    where
        B: Backend,
        W: Wave<f64> + ?Sized,
    {
        let every = playback.every.max(1);
        let bounds = bounds(domain);
        let mut target = self.prepare(window.scene_mut())?;

        let mut drawn = 0;
        for (n, t) in domain.times() {
            if n % every != 0 {
                continue;
            }
            let u = wave.sample(t, &domain.grid);
            self.draw(window.scene_mut(), &mut target, &domain.grid, &u, bounds)?;
            window.pause(playback.pause)?;
            trace!("frame n={} t={:.3}", n, t);
            drawn += 1;
        }
        Ok(drawn)
    }
}

fn replot(
    scene: &mut Scene,
    ax: AxesId,
    grid: &Array1<f64>,
    frame: &Array1<f64>,
    bounds: Bounds,
) -> Result<(), PlotError> {
    scene.cla(ax)?;
    scene.plot(ax, grid, frame)?;
    scene.axis(ax, bounds)
}

/// ## Clear and replot
///
/// Every frame clears the current axes and plots from scratch.
pub struct ClearReplot;

impl Renderer for ClearReplot {
    type Target = AxesId;

    fn prepare(&self, scene: &mut Scene) -> Result<AxesId, PlotError> {
        Ok(scene.gca())
    }

    fn draw(
        &self,
        scene: &mut Scene,
        ax: &mut AxesId,
        grid: &Array1<f64>,
        frame: &Array1<f64>,
        bounds: Bounds,
    ) -> Result<(), PlotError> {
        replot(scene, *ax, grid, frame, bounds)
    }
}

/// ## Clear and replot on explicit axes
///
/// Same as [`ClearReplot`], but on an axes of its own placed at `layout`,
/// so several of them can share a window.
#[derive(Debug, Default, Copy, Clone)]
pub struct OnAxes {
    pub layout: Layout,
}

impl Renderer for OnAxes {
    type Target = AxesId;

    fn prepare(&self, scene: &mut Scene) -> Result<AxesId, PlotError> {
        Ok(scene.add_subplot(self.layout))
    }

    fn draw(
        &self,
        scene: &mut Scene,
        ax: &mut AxesId,
        grid: &Array1<f64>,
        frame: &Array1<f64>,
        bounds: Bounds,
    ) -> Result<(), PlotError> {
        replot(scene, *ax, grid, frame, bounds)
    }
}

/// ## Mutate the plotted line
///
/// Plots the first frame once, then only swaps the y values of that line.
/// The grid is sent a single time.
pub struct MutateLine;

pub struct Tracked {
    axes: AxesId,
    line: Option<LineId>,
}

impl Renderer for MutateLine {
    type Target = Tracked;

    fn prepare(&self, scene: &mut Scene) -> Result<Tracked, PlotError> {
        Ok(Tracked {
            axes: scene.add_subplot(Layout::single()),
            line: None,
        })
    }

    fn draw(
        &self,
        scene: &mut Scene,
        target: &mut Tracked,
        grid: &Array1<f64>,
        frame: &Array1<f64>,
        bounds: Bounds,
    ) -> Result<(), PlotError> {
        match target.line {
            Some(line) => scene.set_ydata(line, frame),
            None => {
                let line = scene.plot(target.axes, grid, frame)?;
                scene.axis(target.axes, bounds)?;
                info!(
                    "plotted lines: [{}]",
                    scene.line_ids(target.axes)?.iter().join(", ")
                );
                target.line = Some(line);
                Ok(())
            }
        }
    }
}

/// Fixed arguments handed to [`advance`] on every frame.
#[derive(Debug, Clone)]
pub struct FrameArgs<W> {
    pub dt: f64,
    pub grid: Array1<f64>,
    pub wave: W,
    pub line: LineId,
}

/// Per-frame callback of [`animated`]: puts frame `n` into the line.
pub fn advance<W>(n: usize, args: &FrameArgs<W>, scene: &mut Scene) -> Result<(), PlotError>
where
    W: Wave<f64>,
{
    let t = n as f64 * args.dt;
    let u = args.wave.sample(t, &args.grid);
    scene.set_ydata(args.line, &u)?;
    debug!("animate called with n={}", n);
    Ok(())
}

/// ## Animation driven from outside
///
/// Plots frame 0 and hands [`advance`] to an [`Animation`] of `nt + 1`
/// frames, `interval` apart. Nothing is shown until the animation is
/// played or saved.
pub fn animated<W>(
    domain: &Domain<f64>,
    wave: W,
    interval: Duration,
) -> Result<Animation<BoxedUpdate>, PlotError>
where
    W: Wave<f64> + 'static,
{
    let mut scene = Scene::new();
    scene.set_title(TITLE);
    let ax = scene.add_subplot(Layout::single());
    let line = scene.plot_animated(ax, &domain.grid, &wave.sample(0., &domain.grid))?;
    // what autoscaling would settle on for the first frame
    scene.axis(ax, bounds(domain))?;

    let args = FrameArgs {
        dt: domain.dt(),
        grid: domain.grid.clone(),
        wave,
        line,
    };
    let update: BoxedUpdate = Box::new(move |n, scene: &mut Scene| advance(n, &args, scene));
    Ok(Animation::new(scene, update, domain.frames(), interval))
}
