use crate::backend::{Backend, Gnuplot};
use crate::error::PlotError;
use crate::scene::Scene;
use log::info;
use std::path::Path;
use std::time::Duration;

/// Owns the frame loop: calls `update(n, scene)` for every frame and shows
/// the result, `interval` apart.
pub struct Animation<F> {
    scene: Scene,
    update: F,
    frames: usize,
    interval: Duration,
    repeat: bool,
}

impl<F> Animation<F>
where
    F: FnMut(usize, &mut Scene) -> Result<(), PlotError>,
{
    pub fn new(scene: Scene, update: F, frames: usize, interval: Duration) -> Self {
        Self {
            scene,
            update,
            frames,
            interval,
            repeat: false,
        }
    }

    /// Start over after the last frame when playing.
    pub fn repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Plays on `backend`. Does not return while `repeat` is set, unless
    /// a frame fails.
    pub fn play<B: Backend>(&mut self, backend: &mut B) -> Result<usize, PlotError> {
        let mut shown = 0;
        loop {
            shown += self.play_once(backend)?;
            if !self.repeat || self.frames == 0 {
                return Ok(shown);
            }
        }
    }

    /// Plays once into an animated gif at `path`, one page per frame.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, PlotError> {
        let mut gif = Gnuplot::gif(&path, self.interval);
        let shown = self.record(&mut gif)?;
        info!("saved animation to {}", path.as_ref().display());
        Ok(shown)
    }

    /// Plays once on `backend`, then finishes it.
    pub fn record<B: Backend>(&mut self, backend: &mut B) -> Result<usize, PlotError> {
        let shown = self.play_once(backend)?;
        backend.finish()?;
        Ok(shown)
    }

    fn play_once<B: Backend>(&mut self, backend: &mut B) -> Result<usize, PlotError> {
        for n in 0..self.frames {
            (self.update)(n, &mut self.scene)?;
            backend.present(&self.scene)?;
            backend.wait(self.interval);
        }
        Ok(self.frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Gnuplot, Recorder};
    use crate::scene::Layout;
    use ndarray::array;

    #[test]
    fn test_play_calls_update_per_frame() {
        let mut scene = Scene::new();
        let ax = scene.add_subplot(Layout::single());
        let line = scene.plot_animated(ax, &array![0., 1.], &array![0., 0.]).unwrap();

        let mut calls = Vec::new();
        let mut recorder = Recorder::new();
        {
            let mut anim = Animation::new(
                scene,
                |n, scene: &mut Scene| {
                    calls.push(n);
                    scene.set_ydata(line, &array![n as f64, -(n as f64)])
                },
                4,
                Duration::from_millis(200),
            );
            assert_eq!(anim.play(&mut recorder).unwrap(), 4);
            assert_eq!(anim.scene().line(line).unwrap().y, array![3., -3.]);
        }

        assert_eq!(calls, vec![0, 1, 2, 3]);
        assert_eq!(recorder.frames().len(), 4);
        assert_eq!(recorder.waited(), Duration::from_millis(800));
        assert_eq!(recorder.frames()[1].line(line).unwrap().y, array![1., -1.]);
    }

    #[test]
    fn test_failing_update_stops_playback() {
        let mut recorder = Recorder::new();
        let mut anim = Animation::new(
            Scene::new(),
            |n, _: &mut Scene| {
                if n == 2 {
                    Err(PlotError::Params("boom"))
                } else {
                    Ok(())
                }
            },
            5,
            Duration::from_millis(10),
        )
        .repeat(true);

        assert!(anim.play(&mut recorder).is_err());
        assert_eq!(recorder.frames().len(), 2);
    }

    #[test]
    fn test_record_plays_once_and_finishes() {
        let mut recorder = Recorder::new();
        let mut anim = Animation::new(
            Scene::new(),
            |_, _: &mut Scene| Ok(()),
            3,
            Duration::from_millis(200),
        )
        .repeat(true);

        assert_eq!(anim.record(&mut recorder).unwrap(), 3);
        assert!(recorder.is_finished());
        assert_eq!(recorder.waited(), Duration::from_millis(600));
    }

    #[test]
    fn test_gif_export_pages_and_delay() {
        let mut scene = Scene::new();
        let ax = scene.add_subplot(Layout::single());
        let line = scene.plot_animated(ax, &array![0., 1.], &array![0., 0.]).unwrap();
        let mut anim = Animation::new(
            scene,
            move |n, scene: &mut Scene| scene.set_ydata(line, &array![n as f64, 0.]),
            5,
            Duration::from_millis(120),
        );

        // the gif is only written by `finish`, so play without it
        let mut gif = Gnuplot::gif("export.gif", anim.interval());
        assert_eq!(anim.play(&mut gif).unwrap(), 5);
        assert_eq!(gif.pages(), 5);
        assert_eq!(gif.delay(), Some(Duration::from_millis(120)));
    }
}
