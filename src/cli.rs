use std::path::PathBuf;
use clap::Parser;
use crate::constants::{DEFAULT_CONFIG_PATH, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Fullscreen slideshow of a directory of images with optional captions.
#[derive(Parser, Debug)]
#[command(name = "kiosk-slideshow", version, about)]
pub struct Args {
    /// Path to the YAML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Open a resizable window instead of going fullscreen
    #[arg(long)]
    pub windowed: bool,
}

impl Args {
    /// Initial window size. Zero lets raylib take the monitor's own
    /// resolution when going fullscreen.
    pub fn window_size(&self) -> (i32, i32) {
        if self.windowed {
            (WINDOW_WIDTH, WINDOW_HEIGHT)
        } else {
            (0, 0)
        }
    }
}
