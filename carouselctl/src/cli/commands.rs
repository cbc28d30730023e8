use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use carousel_config::{ConfigLoad, ConfigLoader};
use carousel_core::{
    CarouselController, hops, presentable_window, spawn_carousel, wrap,
};
use tracing::info;

use super::render::StdoutRenderer;
use super::{PathArgs, RunArgs, ScriptEvent, WindowArgs};

pub fn window(args: WindowArgs) -> Result<()> {
    let slides = args.slides.build()?;
    let load = load_config(args.config)?;
    let radius = args.radius.unwrap_or(load.config.offset_radius);
    let current = wrap(args.current, slides.len());

    let window = presentable_window(current, radius, slides.len());
    if args.json {
        println!("{}", serde_json::to_string(&window)?);
        return Ok(());
    }

    for entry in window {
        let key = slides
            .key(entry.slide_index)
            .map(|key| key.to_string())
            .unwrap_or_default();
        println!("{:+} {} {}", entry.display_offset, entry.slide_index, key);
    }
    Ok(())
}

pub fn path(args: PathArgs) -> Result<()> {
    anyhow::ensure!(args.count > 0, "--count must be at least 1");

    let mut out = BufWriter::new(std::io::stdout().lock());
    for (step, index) in hops(args.from, args.to, args.count).enumerate() {
        if step > 0 {
            out.write_all(b" ")?;
        }
        write!(out, "{index}")?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

pub async fn run(args: RunArgs) -> Result<()> {
    let slides = args.slides.build()?;
    let load = load_config(args.config)?;

    let mut options = load.config.options();
    if let Some(interval) = args.interval {
        options.goto_interval = interval;
    }
    if let Some(radius) = args.radius {
        options.offset_radius = radius;
    }

    info!(
        slides = slides.len(),
        interval_ms = options.goto_interval.as_millis() as u64,
        radius = options.offset_radius,
        "starting carousel session"
    );

    let renderer = StdoutRenderer {
        json: args.json,
        show_navigation: load.config.show_navigation,
        animation: load.config.animation,
    };
    let handle = spawn_carousel(CarouselController::new(slides, options), renderer);

    for event in args.script {
        match event {
            ScriptEvent::Goto(target) => {
                handle.set_target(Some(target)).await?;
            }
            ScriptEvent::Clear => {
                handle.set_target(None).await?;
            }
            ScriptEvent::Move(step) => {
                handle.move_slide(step).await?;
            }
        }
        handle.wait_until_settled().await?;
    }

    let last = handle.shutdown().await?;
    info!(current = last.current_index, "carousel session finished");
    Ok(())
}

fn load_config(path: Option<std::path::PathBuf>) -> Result<ConfigLoad> {
    ConfigLoader::new()
        .with_config_path(path)
        .load()
        .context("failed to load carousel configuration")
}
