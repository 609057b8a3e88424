use std::path::Path;

use anyhow::{Context, Result};
use image::{DynamicImage, imageops::FilterType};
use tracing::info;

use crate::game::Rgb;

/// A bitmap scaled to sub-pixel resolution
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Icon {
    /// Scale an image to `width` x `height` sub-pixels, compositing any
    /// transparency over black
    pub fn from_image(image: &DynamicImage, width: u32, height: u32) -> Self {
        let scaled = image
            .resize_exact(width, height, FilterType::Triangle)
            .to_rgba8();

        let pixels = scaled
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                let over_black = |c: u8| (u16::from(c) * u16::from(a) / 255) as u8;
                Rgb::new(over_black(r), over_black(g), over_black(b))
            })
            .collect();

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[(y * self.width + x) as usize]
    }
}

/// The two faces of the Cheat-Bot switch
#[derive(Debug, Clone)]
pub struct ToggleIcons {
    pub on: Icon,
    pub off: Icon,
}

impl ToggleIcons {
    /// Load both icons from disk; a missing or unreadable file is an error
    pub fn load(on: &Path, off: &Path, width: u32, height: u32) -> Result<Self> {
        let on_image = image::open(on)
            .with_context(|| format!("Failed to load toggle icon {}", on.display()))?;
        let off_image = image::open(off)
            .with_context(|| format!("Failed to load toggle icon {}", off.display()))?;

        info!(
            on = %on.display(),
            off = %off.display(),
            width,
            height,
            "toggle icons loaded"
        );

        Ok(Self::from_images(&on_image, &off_image, width, height))
    }

    pub fn from_images(on: &DynamicImage, off: &DynamicImage, width: u32, height: u32) -> Self {
        Self {
            on: Icon::from_image(on, width, height),
            off: Icon::from_image(off, width, height),
        }
    }

    pub fn for_state(&self, enabled: bool) -> &Icon {
        if enabled {
            &self.on
        } else {
            &self.off
        }
    }
}
