pub mod animation;
pub mod backend;
pub mod base;
pub mod error;
pub mod render;
pub mod scene;
pub mod waves;

pub use animation::Animation;
pub use backend::{Backend, Gnuplot, Recorder, Window};
pub use base::{Domain, Params, Playback};
pub use error::PlotError;
pub use render::Renderer;
pub use waves::Wave;

pub type BoxedUpdate = Box<dyn FnMut(usize, &mut scene::Scene) -> Result<(), PlotError>>;
