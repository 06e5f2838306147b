//! In-memory plot model: a figure holding axes, axes holding lines.
//!
//! Renderers only ever touch a `Scene`; turning it into pixels is the job
//! of a [`Backend`](crate::backend::Backend).

use crate::error::PlotError;
use ndarray::Array1;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AxesId(usize);

/// Handle to a plotted line, valid until its axes are cleared.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LineId {
    axes: AxesId,
    generation: usize,
    index: usize,
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line2D(axes {}, line {})", self.axes.0, self.index)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Bounds {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            x: [xmin, xmax],
            y: [ymin, ymax],
        }
    }
}

/// Subplot position, `index` counts from 1 like `add_subplot(rows, cols, index)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: u32,
    cols: u32,
    index: u32,
}

impl Layout {
    pub fn new(rows: u32, cols: u32, index: u32) -> Result<Self, PlotError> {
        let cells = rows.checked_mul(cols).unwrap_or(0);
        if index == 0 || index > cells {
            return Err(PlotError::Layout { rows, cols, index });
        }
        Ok(Self { rows, cols, index })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn single() -> Self {
        Self {
            rows: 1,
            cols: 1,
            index: 1,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::single()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
    /// redrawn by an animation rather than by the axes
    pub animated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    pub layout: Layout,
    pub bounds: Option<Bounds>,
    lines: Vec<Line>,
    generation: usize,
}

impl Axes {
    fn new(layout: Layout) -> Self {
        Self {
            layout,
            bounds: None,
            lines: Vec::new(),
            generation: 0,
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    title: Option<String>,
    axes: Vec<Axes>,
    current: Option<AxesId>,
    lines_created: usize,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Adds a new axes and makes it the current one.
    pub fn add_subplot(&mut self, layout: Layout) -> AxesId {
        let id = AxesId(self.axes.len());
        self.axes.push(Axes::new(layout));
        self.current = Some(id);
        id
    }

    /// The current axes, created on first use.
    pub fn gca(&mut self) -> AxesId {
        if let Some(id) = self.current {
            return id;
        }
        self.add_subplot(Layout::single())
    }

    pub fn all_axes(&self) -> &[Axes] {
        &self.axes
    }

    pub fn axes(&self, id: AxesId) -> Result<&Axes, PlotError> {
        self.axes.get(id.0).ok_or(PlotError::UnknownAxes(id))
    }

    fn axes_mut(&mut self, id: AxesId) -> Result<&mut Axes, PlotError> {
        self.axes.get_mut(id.0).ok_or(PlotError::UnknownAxes(id))
    }

    /// Removes every line and the bounds; earlier `LineId`s become stale.
    pub fn cla(&mut self, id: AxesId) -> Result<(), PlotError> {
        let axes = self.axes_mut(id)?;
        axes.lines.clear();
        axes.bounds = None;
        axes.generation += 1;
        Ok(())
    }

    pub fn axis(&mut self, id: AxesId, bounds: Bounds) -> Result<(), PlotError> {
        self.axes_mut(id)?.bounds = Some(bounds);
        Ok(())
    }

    pub fn plot(
        &mut self,
        id: AxesId,
        x: &Array1<f64>,
        y: &Array1<f64>,
    ) -> Result<LineId, PlotError> {
        self.add_line(id, x, y, false)
    }

    /// Like `plot`, for a line an animation will keep updating.
    pub fn plot_animated(
        &mut self,
        id: AxesId,
        x: &Array1<f64>,
        y: &Array1<f64>,
    ) -> Result<LineId, PlotError> {
        self.add_line(id, x, y, true)
    }

    fn add_line(
        &mut self,
        id: AxesId,
        x: &Array1<f64>,
        y: &Array1<f64>,
        animated: bool,
    ) -> Result<LineId, PlotError> {
        if x.len() != y.len() {
            return Err(PlotError::Length {
                expected: x.len(),
                got: y.len(),
            });
        }

        let axes = self.axes_mut(id)?;
        axes.lines.push(Line {
            x: x.clone(),
            y: y.clone(),
            animated,
        });
        let line = LineId {
            axes: id,
            generation: axes.generation,
            index: axes.lines.len() - 1,
        };
        self.lines_created += 1;
        Ok(line)
    }

    pub fn line_ids(&self, id: AxesId) -> Result<Vec<LineId>, PlotError> {
        let axes = self.axes(id)?;
        Ok((0..axes.lines.len())
            .map(|index| LineId {
                axes: id,
                generation: axes.generation,
                index,
            })
            .collect())
    }

    pub fn line(&self, id: LineId) -> Result<&Line, PlotError> {
        let axes = self.axes(id.axes)?;
        if axes.generation != id.generation {
            return Err(PlotError::StaleLine(id));
        }
        axes.lines.get(id.index).ok_or(PlotError::UnknownLine(id))
    }

    /// Replaces the y values of a line in place; x is left alone.
    pub fn set_ydata(&mut self, id: LineId, y: &Array1<f64>) -> Result<(), PlotError> {
        let axes = self.axes_mut(id.axes)?;
        if axes.generation != id.generation {
            return Err(PlotError::StaleLine(id));
        }
        let line = axes
            .lines
            .get_mut(id.index)
            .ok_or(PlotError::UnknownLine(id))?;
        if line.y.len() != y.len() {
            return Err(PlotError::Length {
                expected: line.y.len(),
                got: y.len(),
            });
        }
        line.y.assign(y);
        Ok(())
    }

    /// Lines ever added to this scene, cleared ones included.
    pub fn lines_created(&self) -> usize {
        self.lines_created
    }
}
