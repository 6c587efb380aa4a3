//! End-to-end cycle tests for PieTimerButton, driven by simulated time.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use pietimer::prelude::*;
use pietimer::render::{DrawCommand, RecordingRenderer};
use pietimer::{ObjectBase, global_registry};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn button_with_duration(millis: i64) -> PieTimerButton {
    init_global_registry();
    PieTimerButton::new(Color::from_rgba8(128, 128, 128, 0), Color::from_rgb8(255, 0, 0))
        .with_cycle_duration_ms(millis)
        .unwrap()
}

/// Tick until `total` has elapsed using steps of at most `step`.
fn run_for(button: &mut PieTimerButton, total: Duration, step: Duration) {
    let mut remaining = total;
    while !remaining.is_zero() {
        let dt = remaining.min(step);
        button.tick(dt);
        remaining -= dt;
    }
}

#[test]
fn sweep_and_fade_split_the_cycle_nine_to_one() {
    for millis in [10, 1000, 2500, 5000, 12_345] {
        let mut button = button_with_duration(millis);
        let cycle = ms(millis as u64);
        let sweep = button.sweep_duration();

        assert_eq!(sweep + button.fade_duration(), cycle);
        assert_eq!(sweep, ms(millis as u64 * 9 / 10));

        button.click();
        button.tick(sweep - ms(1));
        assert!(button.is_sweeping(), "{millis}ms: sweep ended early");

        button.tick(ms(1));
        assert!(button.is_fading_out(), "{millis}ms: fade did not start");

        button.tick(button.fade_duration() - ms(1));
        assert!(button.is_fading_out(), "{millis}ms: fade ended early");

        button.tick(ms(1));
        assert_eq!(button.state(), PieTimerState::Idle);
    }
}

#[test]
fn non_positive_duration_is_rejected() {
    let mut button = button_with_duration(1000);

    for bad in [0, -1, -5000] {
        match button.set_cycle_duration_ms(bad) {
            Err(PieTimerError::InvalidDuration { millis }) => assert_eq!(millis, bad),
            other => panic!("expected InvalidDuration, got {other:?}"),
        }
        assert_eq!(button.cycle_duration(), ms(1000));
    }
}

#[test]
fn rejected_duration_leaves_running_cycle_alone() {
    let mut button = button_with_duration(1000);
    button.click();
    button.tick(ms(300));

    assert!(button.set_cycle_duration_ms(0).is_err());
    assert_eq!(button.angle(), 120);
    assert!(button.is_sweeping());
}

#[test]
fn end_to_end_cycle_of_one_second() {
    let mut button = button_with_duration(1000);
    button.click();

    run_for(&mut button, ms(900), ms(16));
    assert_eq!(button.angle(), 360);
    assert!(button.is_fading_out());

    run_for(&mut button, ms(100), ms(16));
    assert_eq!(button.state(), PieTimerState::Idle);
    assert_eq!(button.angle(), 0);
    assert!(!button.is_fading_out());
    assert_eq!(button.fill_color(), Color::RED);
    assert_eq!(button.fill_color().alpha(), 1.0);
}

#[test]
fn angle_is_monotonic_and_bounded() {
    let mut button = button_with_duration(2500);
    let angles = Arc::new(Mutex::new(Vec::new()));
    let angles_clone = angles.clone();
    button
        .angle_changed
        .connect(move |&angle| angles_clone.lock().push(angle));

    let sweep = button.sweep_duration();
    button.click();
    run_for(&mut button, sweep, ms(7));

    let angles = angles.lock();
    assert!(!angles.is_empty());
    assert!(angles.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(angles.iter().all(|angle| (0..=360).contains(angle)));
    assert_eq!(angles.last(), Some(&360));
}

#[test]
fn one_large_tick_matches_many_small_ones() {
    let mut coarse = button_with_duration(1000);
    let mut fine = button_with_duration(1000);
    coarse.click();
    fine.click();

    coarse.tick(ms(960));
    run_for(&mut fine, ms(960), ms(1));

    assert_eq!(coarse.state(), fine.state());
    assert_eq!(coarse.angle(), fine.angle());
    let (a, b) = (coarse.fill_color().alpha(), fine.fill_color().alpha());
    assert!((a - b).abs() < 1e-3, "{a} vs {b}");
}

#[test]
fn restarting_mid_sweep_discards_the_old_sweep() {
    let mut button = button_with_duration(1000);
    let finished = Arc::new(Mutex::new(0u32));
    let finished_clone = finished.clone();
    button
        .sweep_finished
        .connect(move |_| *finished_clone.lock() += 1);

    button.click();
    button.tick(ms(800));
    button.click();
    assert_eq!(button.angle(), 0);

    // Past the point where the first sweep would have ended
    button.tick(ms(200));
    assert_eq!(*finished.lock(), 0);
    assert_eq!(button.angle(), 80);

    button.tick(ms(700));
    assert_eq!(*finished.lock(), 1);
}

#[test]
fn reset_from_every_state() {
    let checkpoints = [0, 100, 899, 900, 950, 999, 1000];
    for at in checkpoints {
        let mut button = button_with_duration(1000);
        button.click();
        button.tick(ms(at));

        button.reset();
        assert_eq!(button.angle(), 0, "reset at {at}ms");
        assert_eq!(button.fill_color(), button.original_fill_color());
        assert!(!button.is_fading_out());
        assert!(!button.is_sweeping());
        assert_eq!(button.state(), PieTimerState::Idle);

        button.reset();
        assert_eq!(button.angle(), 0);
        assert_eq!(button.state(), PieTimerState::Idle);
    }
}

#[test]
fn reset_before_any_click_is_harmless() {
    let mut button = button_with_duration(1000);
    let changes = Arc::new(Mutex::new(0u32));
    let changes_clone = changes.clone();
    button
        .state_changed
        .connect(move |_| *changes_clone.lock() += 1);

    button.reset();
    button.reset();
    assert_eq!(*changes.lock(), 0);
}

#[test]
fn hidden_widget_still_completes_its_cycle() {
    let mut button = button_with_duration(1000);
    button.set_visible(false);
    button.click();

    run_for(&mut button, ms(1000), ms(16));
    assert_eq!(button.state(), PieTimerState::Idle);

    let mut renderer = RecordingRenderer::new();
    let stats = paint_widget(&mut button, &mut renderer);
    assert_eq!(stats.draw_calls, 0);
}

#[test]
fn painted_frames_follow_the_cycle() {
    let mut button = button_with_duration(1000);
    let mut renderer = RecordingRenderer::new();
    let mut pies = 0;
    let mut ellipses = 0;

    button.click();
    for _ in 0..62 {
        button.tick(ms(16));
        paint_widget(&mut button, &mut renderer);

        let commands = renderer.commands();
        assert!(matches!(commands[0], DrawCommand::FillRect { .. }));
        match &commands[1] {
            DrawCommand::FillPie {
                start_angle,
                span_angle,
                ..
            } => {
                assert_eq!(*start_angle, 180.0);
                assert!((-359.0..=0.0).contains(span_angle));
                pies += 1;
            }
            DrawCommand::FillEllipse { .. } => ellipses += 1,
            other => panic!("unexpected command {other:?}"),
        }
    }

    // 56 ticks of 16ms reach 896ms; the 57th ends the sweep and the fade
    // runs until the 63rd.
    assert_eq!(pies, 56);
    assert_eq!(ellipses, 6);

    button.tick(ms(16));
    assert_eq!(button.state(), PieTimerState::Idle);
    paint_widget(&mut button, &mut renderer);
    assert!(matches!(renderer.commands()[1], DrawCommand::StrokeRect { .. }));
}

#[test]
fn parent_link_is_recorded() {
    init_global_registry();
    let parent = ObjectBase::new::<PieTimerButton>();
    let button = PieTimerButton::new(Color::WHITE, Color::BLUE)
        .with_parent(parent.id())
        .unwrap();

    assert_eq!(button.widget_base().parent_id(), Some(parent.id()));
    let registry = global_registry().unwrap();
    assert!(registry.children(parent.id()).unwrap().contains(&button.object_id()));
}

#[test]
fn button_from_config_file() {
    init_global_registry();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timer.toml");
    std::fs::write(
        &path,
        "fill = \"#0000FF\"\ncycle_duration_ms = 2000\nlabel = \"Start\"\n",
    )
    .unwrap();

    let config = PieTimerConfig::load(&path).unwrap();
    let mut button = PieTimerButton::from_config(&config).unwrap();
    assert_eq!(button.text(), "Start");
    assert_eq!(button.sweep_duration(), ms(1800));

    button.click();
    button.tick(ms(2000));
    assert_eq!(button.state(), PieTimerState::Idle);
    assert_eq!(button.fill_color(), Color::BLUE);
}

#[test]
fn longest_durations_click_and_tick_without_overflow() {
    init_global_registry();
    let mut button = PieTimerButton::new(Color::WHITE, Color::BLUE);

    button.set_cycle_duration(Duration::MAX).unwrap();
    assert_eq!(button.cycle_duration(), ms(u64::MAX));
    button.click();
    run_for(&mut button, ms(1000), ms(16));
    assert!(button.is_sweeping());
    assert_eq!(button.angle(), 0);

    button.set_cycle_duration_ms(i64::MAX).unwrap();
    button.click();
    button.tick(ms(16));
    assert_eq!(button.state(), PieTimerState::Sweeping);
    assert_eq!(
        button.sweep_duration() + button.fade_duration(),
        button.cycle_duration()
    );
}

#[test]
fn huge_configured_duration_is_accepted() {
    init_global_registry();
    let config = PieTimerConfig::from_toml_str("cycle_duration_ms = 9223372036854775807").unwrap();
    let mut button = PieTimerButton::from_config(&config).unwrap();
    assert_eq!(button.cycle_duration(), ms(i64::MAX as u64));

    // Out of TOML's range, but still valid when built in code
    let config = PieTimerConfig {
        cycle_duration_ms: u64::MAX,
        ..PieTimerConfig::default()
    };
    config.validate().unwrap();
    button = PieTimerButton::from_config(&config).unwrap();
    button.click();
    button.tick(ms(16));
    assert!(button.is_sweeping());
}

#[test]
fn changed_fill_color_gives_way_to_construction_color() {
    let mut button = button_with_duration(1000);
    let red = Color::from_rgb8(255, 0, 0);

    button.set_fill_color(Color::BLUE);
    button.click();
    run_for(&mut button, ms(900), ms(16));
    assert!(button.is_fading_out());
    assert_eq!(button.fill_color(), Color::BLUE);

    run_for(&mut button, ms(100), ms(16));
    assert_eq!(button.state(), PieTimerState::Idle);
    assert_eq!(button.fill_color(), red);
    assert_eq!(button.original_fill_color(), red);
}

#[test]
fn eased_sweep_still_reaches_full_circle() {
    let mut button = button_with_duration(1000);
    button.set_sweep_easing(Easing::EaseInOut);
    let angles = Arc::new(Mutex::new(Vec::new()));
    let sink = angles.clone();
    let id = button.angle_changed.connect(move |angle: &i32| sink.lock().push(*angle));

    button.click();
    run_for(&mut button, ms(450), ms(15));
    assert_eq!(button.angle(), 180);
    run_for(&mut button, ms(450), ms(15));
    assert!(button.is_fading_out());

    let seen = angles.lock().clone();
    assert!(seen.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(seen.last(), Some(&360));

    assert!(button.angle_changed.disconnect(id));
    assert_eq!(button.angle_changed.connection_count(), 0);
}

#[test]
fn moved_button_paints_at_its_position() {
    let mut button = button_with_duration(1000);
    button.set_geometry(Rect::new(30.0, 40.0, 10.0, 10.0));
    assert_eq!(button.geometry(), Rect::new(30.0, 40.0, 450.0, 450.0));
    assert_eq!(button.rect(), Rect::new(0.0, 0.0, 450.0, 450.0));

    let mut renderer = RecordingRenderer::new();
    paint_widget(&mut button, &mut renderer);
    assert!(!button.needs_repaint());
    assert!(matches!(
        renderer.commands()[0],
        DrawCommand::FillRect { rect, .. } if rect == Rect::new(30.0, 40.0, 450.0, 450.0)
    ));
}
