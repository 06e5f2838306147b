use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::path::{Path, PathBuf};
use wave_plot::render::{self, ClearReplot, MutateLine, OnAxes, Renderer};
use wave_plot::waves::DampedWave;
use wave_plot::{Backend, Domain, Gnuplot, Params, PlotError, Playback, Recorder, Window};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// clear the current axes and plot again
    Clear,
    /// clear and plot on an explicitly created axes
    Axes,
    /// plot once, then only change the line's y values
    Mutate,
    /// let an animation object drive the frames
    Animate,
}

/// Animates u(t, x) = sin(x - c t) exp(-alpha t)
#[derive(Parser, Debug)]
#[command(name = "wave-plot")]
struct Args {
    #[arg(long, value_enum, default_value = "clear")]
    variant: Variant,

    /// Write the animation to a gif instead of a window (animate only)
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// Draw into a headless recorder, no gnuplot needed
    #[arg(long)]
    dry_run: bool,
}

fn play<B: Backend>(
    backend: B,
    variant: Variant,
    domain: &Domain<f64>,
    wave: DampedWave<f64>,
    playback: &Playback,
    save: Option<&Path>,
) -> Result<usize, PlotError> {
    let mut window = Window::new(backend);
    window.scene_mut().set_title(render::TITLE);
    let frames = match variant {
        Variant::Clear => ClearReplot.run(&mut window, domain, &wave, playback)?,
        Variant::Axes => OnAxes::default().run(&mut window, domain, &wave, playback)?,
        Variant::Mutate => MutateLine.run(&mut window, domain, &wave, playback)?,
        Variant::Animate => {
            let mut anim = render::animated(domain, wave, playback.interval)?;
            match save {
                Some(path) => anim.save(path)?,
                None => anim.play(window.backend_mut())?,
            }
        }
    };
    window.close()?;
    Ok(frames)
}

/// Where `--save` should write, if anywhere.
fn export_path(args: &Args) -> Option<&Path> {
    let path = args.save.as_deref()?;
    if args.variant != Variant::Animate {
        warn!("--save only applies to the animate variant, ignoring it");
        return None;
    }
    if args.dry_run {
        warn!("--save needs gnuplot, ignoring it for a dry run");
        return None;
    }
    Some(path)
}

fn main() -> Result<(), failure::Error> {
    env_logger::init();
    let args = Args::parse();

    let params = Params::default();
    let playback = Playback::default();
    let domain = Domain::from_params(&params)?;
    let wave = DampedWave {
        c: params.c,
        alpha: params.alpha,
    };

    info!("{:?} with {:?}", args.variant, params);

    let save = export_path(&args);
    let frames = if args.dry_run {
        play(Recorder::new(), args.variant, &domain, wave, &playback, save)?
    } else {
        play(Gnuplot::window(), args.variant, &domain, wave, &playback, save)?
    };
    info!("{} frames", frames);
    Ok(())
}
