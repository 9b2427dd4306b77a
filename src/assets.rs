use std::path::Path;

use anyhow::{Context, Result};
use image::{io::Reader as ImageReader, RgbaImage};
use opengl_graphics::{Texture, TextureSettings};

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Ground,
    Box,
}

impl TextureKind {
    pub fn path(self) -> &'static str {
        match self {
            TextureKind::Ground => GROUND_TEXTURE_PATH,
            TextureKind::Box => BOX_TEXTURE_PATH,
        }
    }
}

/// Every texture the program draws. Needs a live GL context to load.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Textures {
    #[derivative(Debug = "ignore")]
    ground: Texture,
    #[derivative(Debug = "ignore")]
    crate_box: Texture,
}

impl Textures {
    pub fn load() -> Result<Self> {
        Ok(Self {
            ground: load_texture(TextureKind::Ground.path())?,
            crate_box: load_texture(TextureKind::Box.path())?,
        })
    }

    pub fn get(&self, kind: TextureKind) -> &Texture {
        match kind {
            TextureKind::Ground => &self.ground,
            TextureKind::Box => &self.crate_box,
        }
    }
}

pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    let image = ImageReader::open(path)
        .with_context(|| format!("could not open texture {}", path.display()))?
        .decode()
        .with_context(|| format!("could not decode texture {}", path.display()))?
        .to_rgba8();
    Ok(image)
}

pub fn load_texture<P: AsRef<Path>>(path: P) -> Result<Texture> {
    let path = path.as_ref();
    let image = decode_image(path)?;
    info!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(Texture::from_image(&image, &TextureSettings::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_texture_names_its_path() {
        let err = decode_image("assets/tiles/does_not_exist.png").unwrap_err();
        assert!(format!("{:#}", err).contains("does_not_exist.png"));
    }

    #[test]
    fn bundled_tiles_match_sprite_size() {
        for kind in [TextureKind::Ground, TextureKind::Box] {
            let image = decode_image(kind.path()).unwrap();
            assert_eq!(image.width() as i32, BODY_SPRITE_PX);
            assert_eq!(image.height() as i32, BODY_SPRITE_PX);
        }
    }

    #[test]
    fn kinds_have_distinct_paths() {
        assert_ne!(TextureKind::Ground.path(), TextureKind::Box.path());
    }
}
