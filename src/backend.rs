use crate::error::PlotError;
use crate::scene::Scene;
use gnuplot::{AxesCommon, Figure, Fix};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Something that can put a [`Scene`] on screen.
pub trait Backend {
    fn present(&mut self, scene: &Scene) -> Result<(), PlotError>;

    /// Wait between two frames.
    fn wait(&mut self, pause: Duration) {
        thread::sleep(pause);
    }

    /// Flush whatever is pending. Called once, after the last frame.
    fn finish(&mut self) -> Result<(), PlotError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Output {
    Window,
    Gif { path: PathBuf, delay: Duration },
}

/// A gnuplot process, drawing either into a window or into an animated gif.
pub struct Gnuplot {
    fig: Figure,
    output: Output,
    pages: usize,
}

/// gnuplot terminal for an animated gif, `delay` is in 1/100 s.
pub fn gif_terminal(delay: Duration) -> String {
    let centis = ((delay.as_millis() + 5) / 10).max(1);
    format!("gif animate optimize delay {} size 480,360", centis)
}

impl Gnuplot {
    pub fn window() -> Self {
        Self {
            fig: Figure::new(),
            output: Output::Window,
            pages: 0,
        }
    }

    pub fn gif<P: AsRef<Path>>(path: P, delay: Duration) -> Self {
        let path = path.as_ref().to_path_buf();
        let mut fig = Figure::new();
        fig.set_terminal(&gif_terminal(delay), &path.to_string_lossy());
        Self {
            fig,
            output: Output::Gif { path, delay },
            pages: 0,
        }
    }

    /// Frames presented so far.
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Frame delay of the gif, `None` for a window.
    pub fn delay(&self) -> Option<Duration> {
        match self.output {
            Output::Window => None,
            Output::Gif { delay, .. } => Some(delay),
        }
    }

    fn draw(&mut self, scene: &Scene) {
        if let Some(title) = scene.title() {
            self.fig.set_title(title);
        }

        for axes in scene.all_axes() {
            // a Layout index is always at least 1
            let layout = axes.layout;
            let ax = self
                .fig
                .axes2d()
                .set_pos_grid(layout.rows(), layout.cols(), layout.index() - 1)
                .set_x_grid(true)
                .set_y_grid(true);
            if let Some(bounds) = axes.bounds {
                ax.set_x_range(Fix(bounds.x[0]), Fix(bounds.x[1]))
                    .set_y_range(Fix(bounds.y[0]), Fix(bounds.y[1]));
            }
            for line in axes.lines() {
                ax.lines(&line.x, &line.y, &[]);
            }
        }
    }
}

impl Backend for Gnuplot {
    fn present(&mut self, scene: &Scene) -> Result<(), PlotError> {
        match self.output {
            Output::Window => {
                self.fig.clear_axes();
                self.draw(scene);
                self.fig
                    .show_and_keep_running()
                    .map_err(|e| PlotError::Backend(e.to_string()))?;
            }
            Output::Gif { .. } => {
                if self.pages > 0 {
                    self.fig.new_page();
                }
                self.draw(scene);
            }
        }
        self.pages += 1;
        Ok(())
    }

    fn wait(&mut self, pause: Duration) {
        // the gif carries its own delay
        if self.output == Output::Window {
            thread::sleep(pause);
        }
    }

    fn finish(&mut self) -> Result<(), PlotError> {
        match &self.output {
            Output::Window => {
                // gnuplot runs persistent, the last frame stays on screen
                if self.pages > 0 {
                    self.fig.close();
                }
            }
            Output::Gif { path, .. } => {
                if self.pages > 0 {
                    self.fig
                        .show_and_keep_running()
                        .map_err(|e| PlotError::Backend(e.to_string()))?;
                    self.fig.close();
                }
                info!("wrote {} frames to {}", self.pages, path.display());
            }
        }
        Ok(())
    }
}

/// Headless backend keeping a copy of every frame it was shown.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    frames: Vec<Scene>,
    waited: Duration,
    finished: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Scene] {
        &self.frames
    }

    /// Total time the frames asked to be waited for.
    pub fn waited(&self) -> Duration {
        self.waited
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Backend for Recorder {
    fn present(&mut self, scene: &Scene) -> Result<(), PlotError> {
        self.frames.push(scene.clone());
        debug!("recorded frame {}", self.frames.len());
        Ok(())
    }

    fn wait(&mut self, pause: Duration) {
        self.waited += pause;
    }

    fn finish(&mut self) -> Result<(), PlotError> {
        self.finished = true;
        Ok(())
    }
}

/// A scene bound to the backend showing it.
pub struct Window<B> {
    scene: Scene,
    backend: B,
}

impl<B: Backend> Window<B> {
    pub fn new(backend: B) -> Self {
        Self {
            scene: Scene::new(),
            backend,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Presents the scene, then waits `pause` before returning.
    pub fn pause(&mut self, pause: Duration) -> Result<(), PlotError> {
        self.backend.present(&self.scene)?;
        self.backend.wait(pause);
        Ok(())
    }

    pub fn close(mut self) -> Result<B, PlotError> {
        self.backend.finish()?;
        Ok(self.backend)
    }
}
