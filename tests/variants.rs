use ndarray::Array1;
use rstest::rstest;
use std::time::Duration;
use wave_plot::render::{self, ClearReplot, MutateLine, OnAxes, Renderer};
use wave_plot::scene::{Layout, Scene};
use wave_plot::waves::DampedWave;
use wave_plot::{Domain, Params, Playback, Recorder, Wave, Window};

fn setup() -> (Domain<f64>, DampedWave<f64>) {
    let params = Params::default();
    let wave = DampedWave {
        c: params.c,
        alpha: params.alpha,
    };
    (Domain::from_params(&params).unwrap(), wave)
}

// the y values of the only line of the only axes
fn only_line(scene: &Scene) -> Array1<f64> {
    let axes = scene.all_axes();
    assert_eq!(axes.len(), 1);
    assert_eq!(axes[0].lines().len(), 1);
    axes[0].lines()[0].y.clone()
}

fn at_end(wave: &DampedWave<f64>, domain: &Domain<f64>) -> Array1<f64> {
    wave.sample(domain.time_at(domain.frames() - 1), &domain.grid)
}

fn record<R: Renderer>(renderer: R) -> (Recorder, usize) {
    let (domain, wave) = setup();
    let mut window = Window::new(Recorder::new());
    let drawn = renderer
        .run(&mut window, &domain, &wave, &Playback::default())
        .unwrap();
    let recorder = window.close().unwrap();
    (recorder, drawn)
}

fn check_frames(frames: &[Scene]) {
    let (domain, _) = setup();
    assert_eq!(frames.len(), 101);

    let first = only_line(&frames[0]);
    assert_eq!(first, domain.grid.mapv(f64::sin));

    let last = only_line(&frames[100]);
    let expected = domain
        .grid
        .mapv(|x| (x - 0.5 * 50.).sin() * (-0.05f64 * 50.).exp());
    for (u, e) in last.iter().zip(expected.iter()) {
        assert!((u - e).abs() < 1e-12);
    }
    let peak = last.iter().cloned().fold(0., f64::max);
    assert!((peak - (-2.5f64).exp()).abs() < 1e-3);

    for frame in frames {
        let axes = &frame.all_axes()[0];
        assert_eq!(axes.bounds, Some(render::bounds(&domain)));
        assert_eq!(axes.lines()[0].x, domain.grid);
    }
}

#[test]
fn clear_replot_end_to_end() {
    let (recorder, drawn) = record(ClearReplot);
    assert_eq!(drawn, 101);
    assert!(recorder.is_finished());
    check_frames(recorder.frames());
    assert_eq!(recorder.frames()[100].lines_created(), 101);
}

#[test]
fn explicit_axes_end_to_end() {
    let (recorder, drawn) = record(OnAxes::default());
    assert_eq!(drawn, 101);
    check_frames(recorder.frames());
    assert_eq!(recorder.frames()[100].lines_created(), 101);
}

#[test]
fn mutate_line_end_to_end() {
    let (recorder, drawn) = record(MutateLine);
    assert_eq!(drawn, 101);
    check_frames(recorder.frames());
    assert_eq!(recorder.frames()[100].lines_created(), 1);
    assert_eq!(recorder.waited(), Duration::from_millis(50) * 101);
}

#[test]
fn animation_end_to_end() {
    let (domain, wave) = setup();
    let mut anim = render::animated(&domain, wave, Duration::from_millis(200)).unwrap();
    assert_eq!(anim.frames(), 101);
    assert_eq!(anim.interval(), Duration::from_millis(200));
    assert!(anim.scene().all_axes()[0].lines()[0].animated);
    assert_eq!(anim.scene().title(), Some(render::TITLE));

    let mut recorder = Recorder::new();
    assert_eq!(anim.play(&mut recorder).unwrap(), 101);
    check_frames(recorder.frames());
    assert_eq!(recorder.frames()[100].lines_created(), 1);
}

#[test]
fn variants_draw_identical_frames() {
    let (redrawn, _) = record(ClearReplot);
    let (mutated, _) = record(MutateLine);
    for (a, b) in redrawn.frames().iter().zip(mutated.frames()) {
        assert_eq!(only_line(a), only_line(b));
    }
}

#[test]
fn axes_in_one_window_stay_independent() {
    let (domain, wave) = setup();
    let slow = DampedWave { c: 0.1, alpha: 0. };
    let mut window = Window::new(Recorder::new());
    let left = OnAxes {
        layout: Layout::new(1, 2, 1).unwrap(),
    };
    let right = OnAxes {
        layout: Layout::new(1, 2, 2).unwrap(),
    };

    left.run(&mut window, &domain, &wave, &Playback::default())
        .unwrap();
    right
        .run(&mut window, &domain, &slow, &Playback::default())
        .unwrap();

    let axes = window.scene().all_axes();
    assert_eq!(axes.len(), 2);
    assert_eq!(axes[0].layout.index(), 1);
    assert_eq!(axes[1].layout.index(), 2);
    assert_eq!(axes[0].lines()[0].y, at_end(&wave, &domain));
    assert_eq!(axes[1].lines()[0].y, at_end(&slow, &domain));
}

#[rstest]
#[case(1, 101)]
#[case(2, 51)]
#[case(10, 11)]
#[case(100, 2)]
#[case(1000, 1)]
fn draw_every_n_steps(#[case] every: usize, #[case] expected: usize) {
    let (domain, wave) = setup();
    let playback = Playback {
        every,
        ..Playback::default()
    };
    let mut window = Window::new(Recorder::new());
    let drawn = MutateLine
        .run(&mut window, &domain, &wave, &playback)
        .unwrap();
    assert_eq!(drawn, expected);
    assert_eq!(window.backend().frames().len(), expected);
}
