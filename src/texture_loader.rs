use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::announcement::Announcement;

/// Background textures for the announcement list, one slot per record.
///
/// Slides without an image, with a remote image, or whose image failed to
/// load get an empty slot and render over the solid backdrop instead.
pub struct SlideTextures {
    textures: Vec<Option<Texture2D>>,
}

impl SlideTextures {
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        announcements: &[Announcement],
        base_dir: &Path,
    ) -> Self {
        let mut textures = Vec::with_capacity(announcements.len());
        for announcement in announcements {
            let texture = announcement.image.as_deref().and_then(|image| {
                if image.starts_with("http://") || image.starts_with("https://") {
                    warn!(image, "remote images are not fetched, rendering without background");
                    return None;
                }
                let path = resolve_image_path(base_dir, image);
                match load_texture_with_exif_rotation(rl, thread, &path) {
                    Ok(texture) => Some(texture),
                    Err(e) => {
                        warn!(image, error = %e, "skipping background image");
                        None
                    }
                }
            });
            textures.push(texture);
        }
        Self { textures }
    }

    pub fn get(&self, index: usize) -> Option<&Texture2D> {
        self.textures.get(index).and_then(|t| t.as_ref())
    }
}

// Image paths in the announcements file are relative to the file itself.
fn resolve_image_path(base_dir: &Path, image: &str) -> PathBuf {
    let path = Path::new(image);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Load an image file, apply its EXIF orientation, and upload it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read image {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF orientation is only reliable in JPEG containers.
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_exif_orientation(&file_bytes, image_path)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow!("failed to decode image {}: {}", image_path.display(), e))?;

    // 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW.
    // Mirrored orientations (2, 4, 5, 7) pass through untouched.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {}", image_path.display(), e))
}

fn read_exif_orientation(file_bytes: &[u8], image_path: &Path) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY) {
            Some(field) => match &field.value {
                Value::Short(values) if !values.is_empty() => values[0],
                _ => 1,
            },
            None => 1,
        },
        Err(e) => {
            debug!(image = %image_path.display(), "no EXIF orientation: {}", e);
            1
        }
    }
}
