use std::time::Duration;
use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use raylib::prelude::*;

mod caption;
mod cli;
mod color;
mod config;
mod constants;
mod error;
mod input;
mod manifest;
mod scanner;
mod slide;
mod state;
mod texture_loader;

use crate::caption::{caption_for, Palette};
use crate::cli::Args;
use crate::config::Config;
use crate::constants::*;
use crate::manifest::Manifest;
use crate::slide::Slide;
use crate::state::SlideshowState;

fn load_slide(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    state: &SlideshowState,
    manifest: &Manifest,
    config: &Config,
) -> Option<Slide> {
    let path = state.current();
    let caption = caption_for(manifest, path, config.enable_text);

    match Slide::load(rl, thread, path, caption) {
        Ok(slide) => {
            info!("Showing {:?} ({}/{})", slide.path(), state.index() + 1, state.len());
            Some(slide)
        }
        Err(e) => {
            warn!("Skipping image: {}", e);
            None
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // --- Load config, manifest and playlist before opening the window ---
    let config = Config::load(&args.config)
        .with_context(|| format!("failed to load config {:?}", args.config))?;
    info!("Loaded config from {:?}", args.config);

    let manifest = Manifest::load(&config.manifest_path)
        .with_context(|| format!("failed to load manifest {:?}", config.manifest_path))?;
    info!("Loaded {} manifest entries from {:?}", manifest.len(), config.manifest_path);

    let images = scanner::playlist(&config.content_directory, config.is_random_order, config.random_seed)
        .with_context(|| format!("failed to list images in {:?}", config.content_directory))?;
    info!(
        "Found {} images in {:?}{}",
        images.len(),
        config.content_directory,
        if config.is_random_order { " (shuffled)" } else { "" }
    );

    let mut state = SlideshowState::new(images, config.slide_interval)?;
    let palette = Palette::from_config(&config);

    // --- Window ---
    let mut builder = raylib::init();
    let (width, height) = args.window_size();
    builder.size(width, height).title(WINDOW_TITLE).vsync();
    if args.windowed {
        builder.resizable();
    } else {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    if !args.windowed {
        rl.hide_cursor();
    }

    // A failed load keeps the previous slide on screen
    let mut slide = load_slide(&mut rl, &thread, &state, &manifest, &config);
    state.slide_shown();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let mut changed = false;

        if let Some(command) = input::poll(&rl) {
            state.apply(command);
            changed = true;
        }
        if state.tick(Duration::from_secs_f32(rl.get_frame_time())) {
            changed = true;
        }

        if changed {
            if let Some(next) = load_slide(&mut rl, &thread, &state, &manifest, &config) {
                slide = Some(next);
            }
            state.slide_shown();
        } else if rl.is_window_resized() {
            let (width, height) = (rl.get_screen_width(), rl.get_screen_height());
            if let Some(slide) = slide.as_mut() {
                slide.fit_to(width, height);
            }
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        if let Some(slide) = &slide {
            slide.draw(&mut d, &palette);
        }
    }

    Ok(())
}
