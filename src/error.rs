use crate::scene::{AxesId, LineId};
use failure::Fail;

#[derive(Debug, Fail)]
pub enum PlotError {
    #[fail(display = "gnuplot failed: {}", _0)]
    Backend(String),

    #[fail(display = "invalid parameters: {}", _0)]
    Params(&'static str),

    #[fail(display = "invalid subplot ({}, {}, {})", rows, cols, index)]
    Layout { rows: u32, cols: u32, index: u32 },

    #[fail(display = "no axes {:?} in this scene", _0)]
    UnknownAxes(AxesId),

    // the axes were cleared after the line was plotted
    #[fail(display = "{} is stale", _0)]
    StaleLine(LineId),

    #[fail(display = "{} does not exist", _0)]
    UnknownLine(LineId),

    #[fail(display = "expected {} values, got {}", expected, got)]
    Length { expected: usize, got: usize },
}
