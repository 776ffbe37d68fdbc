//! Preview frame decoding and pick-point coordinate mapping.

use crate::telemetry::PreviewFrame;
use anyhow::Context as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use eframe::egui;

/// Decode a base64 JPEG/PNG payload into an egui color image.
pub fn decode_frame(frame: &PreviewFrame) -> anyhow::Result<egui::ColorImage> {
    let bytes = BASE64
        .decode(frame.data.as_bytes())
        .context("preview payload is not valid base64")?;
    let image = image::load_from_memory(&bytes).context("preview payload is not a valid image")?;
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, &rgba))
}

/// Texture cache keyed by frame timestamp so each frame is decoded once.
/// A frame that fails to decode is remembered and not retried.
pub struct PreviewTexture {
    timestamp: String,
    handle: Option<egui::TextureHandle>,
}

impl PreviewTexture {
    pub fn get(
        cache: &mut Option<PreviewTexture>,
        ctx: &egui::Context,
        frame: &PreviewFrame,
    ) -> Option<egui::TextureHandle> {
        if let Some(cached) = cache.as_ref() {
            if cached.timestamp == frame.timestamp {
                return cached.handle.clone();
            }
        }
        let handle = match decode_frame(frame) {
            Ok(image) => Some(ctx.load_texture("camera-preview", image, Default::default())),
            Err(err) => {
                tracing::warn!("failed to decode preview frame: {err:#}");
                None
            }
        };
        *cache = Some(PreviewTexture {
            timestamp: frame.timestamp.clone(),
            handle: handle.clone(),
        });
        handle
    }
}

/// Map a click inside the rendered preview rect to the frame's native pixel
/// coordinates, clamped to the frame bounds. A zero-sized dimension falls
/// back to a 1:1 ratio.
pub fn map_click_to_native(
    rel_x: f32,
    rel_y: f32,
    rect_w: f32,
    rect_h: f32,
    native_w: u32,
    native_h: u32,
) -> (i32, i32) {
    let x_ratio = if native_w > 0 && rect_w > 0.0 {
        native_w as f32 / rect_w
    } else {
        1.0
    };
    let y_ratio = if native_h > 0 && rect_h > 0.0 {
        native_h as f32 / rect_h
    } else {
        1.0
    };
    let x = (rel_x * x_ratio).round().clamp(0.0, native_w as f32) as i32;
    let y = (rel_y * y_ratio).round().clamp(0.0, native_h as f32) as i32;
    (x, y)
}
