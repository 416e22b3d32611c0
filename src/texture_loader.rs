use std::fs;
use std::io::Cursor;
use std::path::Path;
use log::{debug, warn};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use crate::error::{Result, SlideshowError};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Transform {
    RotateCw,
    RotateCcw,
    FlipHorizontal,
    FlipVertical,
}

/// Steps that bring an image stored with the given EXIF orientation upright.
pub fn orientation_transforms(orientation: u16) -> &'static [Transform] {
    use Transform::*;
    match orientation {
        2 => &[FlipHorizontal],
        3 => &[RotateCw, RotateCw],
        4 => &[FlipVertical],
        5 => &[RotateCw, FlipHorizontal], // transpose
        6 => &[RotateCw],
        7 => &[RotateCw, FlipVertical],   // transverse
        8 => &[RotateCcw],
        _ => &[],                         // 1 (normal) and unknown values
    }
}

fn read_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Value::Short(values) = &field.value {
                    if let Some(&orientation) = values.first() {
                        return orientation;
                    }
                }
            }
            1
        }
        Err(e) => {
            warn!("Could not read EXIF data for {:?}: {}", image_path, e);
            1
        }
    }
}

fn extension(image_path: &Path) -> String {
    image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase()
}

/// Loads an image, applies its EXIF orientation and uploads it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let load_error = |reason: String| SlideshowError::ImageLoad {
        path: image_path.to_path_buf(),
        reason,
    };

    let file_bytes = fs::read(image_path).map_err(|e| load_error(e.to_string()))?;

    let extension = extension(image_path);
    // EXIF is only reliable for JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| load_error(e.to_string()))?;

    if image.width() <= 0 || image.height() <= 0 {
        return Err(load_error("image has no pixels".to_string()));
    }

    let transforms = orientation_transforms(orientation);
    if !transforms.is_empty() {
        debug!("Applying EXIF orientation {} to {:?}", orientation, image_path);
    }
    for transform in transforms {
        match transform {
            Transform::RotateCw => image.rotate_cw(),
            Transform::RotateCcw => image.rotate_ccw(),
            Transform::FlipHorizontal => image.flip_horizontal(),
            Transform::FlipVertical => image.flip_vertical(),
        }
    }

    let mut texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| load_error(e.to_string()))?;
    texture.set_texture_filter(thread, TextureFilter::TEXTURE_FILTER_BILINEAR);

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Applies the transforms to a pixel coordinate of a w x h image
    fn apply(transforms: &[Transform], (mut x, mut y): (i32, i32), (mut w, mut h): (i32, i32)) -> (i32, i32) {
        for t in transforms {
            (x, y, w, h) = match t {
                Transform::RotateCw => (h - 1 - y, x, h, w),
                Transform::RotateCcw => (y, w - 1 - x, h, w),
                Transform::FlipHorizontal => (w - 1 - x, y, w, h),
                Transform::FlipVertical => (x, h - 1 - y, w, h),
            };
        }
        (x, y)
    }

    #[test]
    fn normal_and_unknown_orientations_are_untouched() {
        assert!(orientation_transforms(1).is_empty());
        assert!(orientation_transforms(0).is_empty());
        assert!(orientation_transforms(9).is_empty());
    }

    #[test]
    fn rotations() {
        let size = (4, 3);
        // Top-left corner of the stored image
        assert_eq!(apply(orientation_transforms(6), (0, 0), size), (2, 0));
        assert_eq!(apply(orientation_transforms(8), (0, 0), size), (0, 3));
        assert_eq!(apply(orientation_transforms(3), (0, 0), size), (3, 2));
    }

    #[test]
    fn transpose_and_transverse() {
        let size = (4, 3);
        // Orientation 5 swaps axes, 7 swaps and mirrors both
        assert_eq!(apply(orientation_transforms(5), (1, 2), size), (2, 1));
        assert_eq!(apply(orientation_transforms(7), (1, 2), size), (0, 2));
    }

    #[test]
    fn mirrors() {
        let size = (4, 3);
        assert_eq!(apply(orientation_transforms(2), (1, 2), size), (2, 2));
        assert_eq!(apply(orientation_transforms(4), (1, 2), size), (1, 0));
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(extension(Path::new("a/B.JPG")), "jpg");
        assert_eq!(extension(Path::new("noext")), "");
    }

    #[test]
    fn missing_exif_defaults_to_normal() {
        assert_eq!(read_orientation(Path::new("x.jpg"), b"not a jpeg"), 1);
    }
}
