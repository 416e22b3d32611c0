use std::path::{Path, PathBuf};
use raylib::prelude::*;
use crate::caption::{self, Caption, Palette};
use crate::constants::*;
use crate::error::Result;
use crate::texture_loader::load_texture_with_exif_rotation;

/// Where a scaled image lands on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Scales an image to fit the window above the caption band, keeping its
/// aspect ratio. The result is top-aligned and horizontally centered.
pub fn fit(image_width: i32, image_height: i32, screen_width: i32, screen_height: i32) -> Placement {
    let area_width = i64::from(screen_width.max(0));
    let area_height = i64::from((screen_height - CAPTION_BAND_HEIGHT).max(0));
    let (image_width, image_height) = (i64::from(image_width), i64::from(image_height));

    if image_width <= 0 || image_height <= 0 {
        return Placement { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };
    }

    // Whichever side hits the area first limits the scale
    let (width, height) = if area_width * image_height <= area_height * image_width {
        (area_width, image_height * area_width / image_width)
    } else {
        (image_width * area_height / image_height, area_height)
    };

    Placement {
        x: ((area_width - width) / 2) as f32,
        y: 0.0,
        width: width as f32,
        height: height as f32,
    }
}

pub struct Slide {
    path: PathBuf,
    image: Texture2D,
    caption: Option<Caption>,
    placement: Placement,
}

impl Slide {
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &Path,
        caption: Option<Caption>,
    ) -> Result<Self> {
        let image = load_texture_with_exif_rotation(rl, thread, path)?;
        let mut slide = Self {
            path: path.to_path_buf(),
            image,
            caption,
            placement: Placement { x: 0.0, y: 0.0, width: 0.0, height: 0.0 },
        };
        slide.fit_to(rl.get_screen_width(), rl.get_screen_height());
        Ok(slide)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fit_to(&mut self, screen_width: i32, screen_height: i32) {
        self.placement = fit(self.image.width(), self.image.height(), screen_width, screen_height);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, palette: &Palette) {
        let Placement { x, y, width, height } = self.placement;
        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, self.image.width() as f32, self.image.height() as f32),
            Rectangle::new(x, y, width, height),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );

        if let Some(caption) = &self.caption {
            caption::draw(d, caption, palette);
        }
    }
}
