//! PieTimer Headless Demo
//!
//! Builds the standard demo button (transparent gray background, red fill,
//! 450x450), shortens its cycle to 2.5 seconds, clicks it, and drives one full
//! cycle at 60 frames per second through a recording renderer.
//!
//! An optional TOML config path replaces the built-in settings.
//!
//! Run with: cargo run -p pietimer --example headless_demo [config.toml]
//! Set `RUST_LOG=pietimer=debug` to see state transitions.

use std::time::Duration;

use pietimer::prelude::*;
use pietimer::render::{DrawCommand, RecordingRenderer};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_micros(16_667);

fn build_button() -> Result<PieTimerButton, Box<dyn std::error::Error>> {
    if let Some(path) = std::env::args().nth(1) {
        let config = PieTimerConfig::load(&path)?;
        tracing::info!(%path, "using config file");
        return Ok(PieTimerButton::from_config(&config)?);
    }

    let mut button = PieTimerButton::new(
        Color::from_rgba8(128, 128, 128, 0),
        Color::from_rgb8(255, 0, 0),
    )
    .with_cycle_duration_ms(5000)?;
    button.set_cycle_duration_ms(2500)?;
    Ok(button)
}

fn describe(command: &DrawCommand) -> String {
    match command {
        DrawCommand::FillPie { span_angle, .. } => format!("pie {:>4.0} deg", -span_angle),
        DrawCommand::FillEllipse { color, .. } => format!("circle alpha {:.2}", color.alpha()),
        _ => "button".to_owned(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    init_global_registry();
    let mut button = build_button()?;
    let mut renderer = RecordingRenderer::new();

    button.cycle_finished.connect(|_| tracing::info!("cycle finished"));

    println!(
        "cycle {:?}: sweep {:?}, fade {:?}",
        button.cycle_duration(),
        button.sweep_duration(),
        button.fade_duration()
    );

    button.click();

    let mut frame = 0u32;
    let mut elapsed = Duration::ZERO;
    while button.state() != PieTimerState::Idle {
        button.tick(FRAME);
        elapsed += FRAME;
        frame += 1;

        if button.needs_repaint() {
            let stats = paint_widget(&mut button, &mut renderer);
            // Log about four times a second
            if frame % 15 == 0 || button.state() == PieTimerState::Idle {
                let summary = renderer
                    .commands()
                    .get(1)
                    .map(describe)
                    .unwrap_or_default();
                println!(
                    "{:>6.3}s  {:<10} {:<20} draw calls: {}",
                    elapsed.as_secs_f32(),
                    format!("{:?}", button.state()),
                    summary,
                    stats.draw_calls
                );
            }
        }
    }

    println!("done after {frame} frames");
    Ok(())
}
