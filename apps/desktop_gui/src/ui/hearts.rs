//! Heart frame textures, decoded once per asset path.

use std::{collections::HashMap, path::PathBuf};

use eframe::egui;
use egui::TextureHandle;

pub struct HeartTextures {
    asset_root: PathBuf,
    cache: HashMap<&'static str, Option<TextureHandle>>,
}

impl HeartTextures {
    pub fn new(asset_root: PathBuf) -> Self {
        Self {
            asset_root,
            cache: HashMap::new(),
        }
    }

    /// `None` when the asset is missing or undecodable; the caller draws a glyph instead.
    pub fn get(&mut self, ctx: &egui::Context, src: &'static str) -> Option<TextureHandle> {
        let asset_root = &self.asset_root;
        self.cache
            .entry(src)
            .or_insert_with(|| load_heart_texture(ctx, asset_root, src))
            .clone()
    }
}

fn load_heart_texture(
    ctx: &egui::Context,
    asset_root: &std::path::Path,
    src: &'static str,
) -> Option<TextureHandle> {
    let path = asset_root.join(src);
    let decoded = match image::open(&path) {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::warn!(path = %path.display(), "heart frame unavailable: {err}");
            return None;
        }
    };
    let rgba = decoded.to_rgba8();
    let [w, h] = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied([w, h], rgba.as_raw());
    Some(ctx.load_texture(
        format!("heart-frame:{src}"),
        color_image,
        egui::TextureOptions::LINEAR,
    ))
}
