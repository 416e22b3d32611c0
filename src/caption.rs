use std::path::Path;
use raylib::prelude::*;
use crate::config::Config;
use crate::constants::*;
use crate::manifest::Manifest;

const LINE_SPACING: i32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    pub title: String,
    pub description: String,
}

/// Colors of the caption overlay.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fill: Color,
    pub text: Color,
}

impl Palette {
    pub fn from_config(config: &Config) -> Self {
        Self {
            fill: config.fill_color.into(),
            text: config.text_color.into(),
        }
    }
}

/// A caption is shown only when text is enabled and the manifest has an entry
/// for exactly this image. NUL characters are dropped since raylib cannot
/// draw them.
pub fn caption_for(manifest: &Manifest, image: &Path, enable_text: bool) -> Option<Caption> {
    if !enable_text {
        return None;
    }
    manifest.find(image).map(|entry| Caption {
        title: entry.title.replace('\0', ""),
        description: entry.description.replace('\0', ""),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub font_size: i32,
}

/// Greedy word wrap. A word wider than `max_width` gets a line of its own.
/// Explicit newlines are kept.
pub fn wrap(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }
            let candidate = format!("{line} {word}");
            if measure(&candidate) <= max_width {
                line = candidate;
            } else {
                lines.push(std::mem::replace(&mut line, word.to_string()));
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines
}

/// Positions the title (centered) and the wrapped description so that the
/// block sits on the bottom edge of a `screen_width` x `screen_height` window.
pub fn layout(
    caption: &Caption,
    screen_width: i32,
    screen_height: i32,
    measure: impl Fn(&str, i32) -> i32,
) -> Vec<TextLine> {
    let max_width = (screen_width - 2 * CAPTION_PADDING).max(0);
    let line_height = |font_size: i32| font_size + LINE_SPACING;

    let title = caption.title.trim();
    let description = wrap(&caption.description, max_width, |s| measure(s, DESCRIPTION_FONT_SIZE));

    // Each block is padded above and below, like a packed vertical box
    let mut height = 0;
    if !title.is_empty() {
        height += line_height(TITLE_FONT_SIZE) + 2 * CAPTION_PADDING;
    }
    if !description.is_empty() {
        height += description.len() as i32 * line_height(DESCRIPTION_FONT_SIZE) + 2 * CAPTION_PADDING;
    }

    let mut y = screen_height - height;
    let mut lines = Vec::new();

    if !title.is_empty() {
        y += CAPTION_PADDING;
        let width = measure(title, TITLE_FONT_SIZE);
        lines.push(TextLine {
            text: title.to_string(),
            x: ((screen_width - width) / 2).max(CAPTION_PADDING),
            y,
            font_size: TITLE_FONT_SIZE,
        });
        y += line_height(TITLE_FONT_SIZE) + CAPTION_PADDING;
    }

    if !description.is_empty() {
        y += CAPTION_PADDING;
        for text in description {
            lines.push(TextLine {
                text,
                x: CAPTION_PADDING,
                y,
                font_size: DESCRIPTION_FONT_SIZE,
            });
            y += line_height(DESCRIPTION_FONT_SIZE);
        }
    }

    lines
}

pub fn draw(d: &mut RaylibDrawHandle, caption: &Caption, palette: &Palette) {
    let screen_width = d.get_screen_width();
    let screen_height = d.get_screen_height();

    d.draw_rectangle(
        0,
        screen_height - CAPTION_BAND_HEIGHT,
        screen_width,
        CAPTION_BAND_HEIGHT,
        palette.fill,
    );

    let lines = layout(caption, screen_width, screen_height, |text, size| d.measure_text(text, size));
    for line in lines {
        d.draw_text(&line.text, line.x, line.y, line.font_size, palette.text);
    }
}
