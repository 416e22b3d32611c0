use std::time::Duration;

pub const WINDOW_TITLE: &str = "Kiosk Slideshow";
pub const WINDOW_WIDTH: i32 = 1920;            // Size of the --windowed window
pub const WINDOW_HEIGHT: i32 = 1080;
pub const FPS: u32 = 30;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const DEFAULT_CONTENT_DIRECTORY: &str = "./content";
pub const DEFAULT_MANIFEST_PATH: &str = "./manifest.yaml";
pub const DEFAULT_SLIDE_INTERVAL: Duration = Duration::from_secs(30);
pub const DEFAULT_FILL_COLOR: &str = "#ADD8E6";  // light blue
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp"];

pub const CAPTION_BAND_HEIGHT: i32 = 150;      // Reserved at the bottom of the window
pub const CAPTION_PADDING: i32 = 10;
pub const TITLE_FONT_SIZE: i32 = 24;
pub const DESCRIPTION_FONT_SIZE: i32 = 20;
