use std::path::{Path, PathBuf};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use walkdir::WalkDir;
use crate::constants::IMAGE_EXTENSIONS;
use crate::error::{Result, SlideshowError};

/// Recursively lists the images under `root`, visiting each directory in
/// file-name order. Symlinks are followed, so linked images are listed too.
/// Any unreadable entry, including a dangling link, aborts the walk.
pub fn list_images(root: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_image(entry.path()) {
            images.push(entry.into_path());
        }
    }

    if images.is_empty() {
        return Err(SlideshowError::NoImagesFound(root.to_path_buf()));
    }
    Ok(images)
}

// Case-insensitive, so `.JPG` counts as well as `.jpg`
pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Lists the images under `root`, shuffled once when `random_order` is set.
pub fn playlist(root: &Path, random_order: bool, seed: Option<u64>) -> Result<Vec<PathBuf>> {
    let mut images = list_images(root)?;
    if random_order {
        shuffle(&mut images, seed);
    }
    Ok(images)
}

/// Shuffles once. A fixed seed gives the same order on every run.
pub fn shuffle(images: &mut [PathBuf], seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    images.shuffle(&mut rng);
}
