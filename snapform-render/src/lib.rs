/*
    Snap-form - form builder prototype
    Copyright (C) 2025 OpenLabs

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

//! Rasterizes the responses chart to PNG, for exports outside the browser.

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache};
use snapform_core::analytics::{ChartGeometry, DataPoint, Padding, Range};
use thiserror::Error;
use tiny_skia::*;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to create pixmap: {0}")]
    PixmapCreationError(String),

    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}

/// Colors as `#rrggbb`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub background: String,
    pub grid: String,
    pub line: String,
    pub text: String,
    pub font_size: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            grid: "#e4e4e7".to_string(),
            line: "#2563eb".to_string(),
            text: "#71717a".to_string(),
            font_size: 11.0,
        }
    }
}

impl ChartStyle {
    pub fn dark() -> Self {
        Self {
            background: "#09090b".to_string(),
            grid: "#27272a".to_string(),
            line: "#60a5fa".to_string(),
            text: "#a1a1aa".to_string(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy)]
enum Anchor {
    Start,
    Middle,
    End,
}

struct Palette {
    background: Color,
    grid: Color,
    line: Color,
    text: Color,
}

impl Palette {
    fn from_style(style: &ChartStyle) -> Result<Self, RenderError> {
        let color = |hex: &str| parse_color(hex).ok_or_else(|| RenderError::InvalidColorFormat(hex.to_string()));
        Ok(Self {
            background: color(&style.background)?,
            grid: color(&style.grid)?,
            line: color(&style.line)?,
            text: color(&style.text)?,
        })
    }
}

pub struct ChartRenderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    /// Renders one of the built-in ranges with the default style.
    pub fn render_range(&mut self, range: Range, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        self.render_png(range.dataset(), width, height, &ChartStyle::default())
    }

    pub fn render_png(
        &mut self,
        data: &[DataPoint],
        width: u32,
        height: u32,
        style: &ChartStyle,
    ) -> Result<Vec<u8>, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions(format!("{}x{}", width, height)));
        }
        let palette = Palette::from_style(style)?;
        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| RenderError::PixmapCreationError(format!("{}x{}", width, height)))?;
        pixmap.fill(palette.background);

        let geometry = ChartGeometry::layout(data, width as f64, height as f64, Padding::default());
        debug!(points = geometry.points.len(), axis_max = geometry.axis_max, width, height, "rendering chart");

        let left = geometry.padding.left as f32;
        let right = (geometry.width - geometry.padding.right) as f32;

        let mut grid_paint = Paint::default();
        grid_paint.set_color(palette.grid);
        grid_paint.anti_alias = true;
        let grid_stroke = Stroke {
            width: 1.0,
            dash: StrokeDash::new(vec![3.0, 3.0], 0.0),
            ..Stroke::default()
        };

        for &(value, y) in &geometry.y_ticks {
            let y = y as f32;
            let mut pb = PathBuilder::new();
            pb.move_to(left, y);
            pb.line_to(right, y);
            if let Some(path) = pb.finish() {
                pixmap.stroke_path(&path, &grid_paint, &grid_stroke, Transform::identity(), None);
            }
            self.draw_text(&mut pixmap, &value.to_string(), left - 6.0, y, Anchor::End, style.font_size, palette.text);
        }

        if let Some(area) = chart_path(&geometry, true) {
            let mut fill = palette.line;
            fill.set_alpha(0.2);
            let mut paint = Paint::default();
            paint.set_color(fill);
            paint.anti_alias = true;
            pixmap.fill_path(&area, &paint, FillRule::Winding, Transform::identity(), None);
        }

        if let Some(line) = chart_path(&geometry, false) {
            let mut paint = Paint::default();
            paint.set_color(palette.line);
            paint.anti_alias = true;
            let stroke = Stroke { width: 2.0, line_join: LineJoin::Round, ..Stroke::default() };
            pixmap.stroke_path(&line, &paint, &stroke, Transform::identity(), None);
        }

        let label_y = (geometry.height - 12.0) as f32;
        for point in &geometry.points {
            self.draw_text(&mut pixmap, point.label, point.x as f32, label_y, Anchor::Middle, style.font_size, palette.text);
        }

        pixmap.encode_png().map_err(|e| RenderError::EncodingError(e.to_string()))
    }

    /// Draws `text` with its vertical center on `y`.
    #[allow(clippy::too_many_arguments)]
    fn draw_text(&mut self, pixmap: &mut Pixmap, text: &str, x: f32, y: f32, anchor: Anchor, font_size: f32, color: Color) {
        let metrics = Metrics::new(font_size, font_size * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        let attrs = Attrs::new().family(Family::SansSerif);
        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut self.font_system, false);

        for run in buffer.layout_runs() {
            let origin_x = match anchor {
                Anchor::Start => x,
                Anchor::Middle => x - run.line_w / 2.0,
                Anchor::End => x - run.line_w,
            };
            let origin_y = y - metrics.line_height / 2.0;

            for glyph in run.glyphs {
                let physical_glyph = glyph.physical((0., 0.), 1.0);
                let Some(image) = self.swash_cache.get_image(&mut self.font_system, physical_glyph.cache_key) else {
                    trace!("glyph missing from cache");
                    continue;
                };

                let width = image.placement.width;
                let height = image.placement.height;
                let Some(size) = IntSize::from_wh(width, height) else {
                    continue;
                };

                let pixels = match glyph_pixels(&image.data, width * height, color) {
                    Some(pixels) => pixels,
                    None => {
                        trace!(len = image.data.len(), "unknown glyph image format");
                        continue;
                    }
                };

                if let Some(glyph_pixmap) = Pixmap::from_vec(pixels, size) {
                    let glyph_x = origin_x + physical_glyph.x as f32 + image.placement.left as f32;
                    let glyph_y = origin_y + run.line_y + physical_glyph.y as f32 - image.placement.top as f32;
                    pixmap.draw_pixmap(
                        0,
                        0,
                        glyph_pixmap.as_ref(),
                        &PixmapPaint::default(),
                        Transform::from_translate(glyph_x, glyph_y),
                        None,
                    );
                }
            }
        }
    }
}

/// Premultiplied RGBA8 for a swash glyph: either an alpha mask tinted with `color` or color RGBA.
fn glyph_pixels(data: &[u8], area: u32, color: Color) -> Option<Vec<u8>> {
    let area = area as usize;
    let mut pixels = Vec::with_capacity(area * 4);

    if data.len() == area {
        for mask in data {
            let alpha = color.alpha() * (*mask as f32 / 255.0);
            pixels.push((color.red() * alpha * 255.0) as u8);
            pixels.push((color.green() * alpha * 255.0) as u8);
            pixels.push((color.blue() * alpha * 255.0) as u8);
            pixels.push((alpha * 255.0) as u8);
        }
    } else if data.len() == area * 4 {
        for chunk in data.chunks(4) {
            let a = chunk[3] as f32 / 255.0;
            pixels.push((chunk[0] as f32 * a) as u8);
            pixels.push((chunk[1] as f32 * a) as u8);
            pixels.push((chunk[2] as f32 * a) as u8);
            pixels.push(chunk[3]);
        }
    } else {
        return None;
    }

    Some(pixels)
}

fn chart_path(geometry: &ChartGeometry, closed: bool) -> Option<Path> {
    let (first, last) = (geometry.points.first()?, geometry.points.last()?);
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for point in &geometry.points[1..] {
        pb.line_to(point.x as f32, point.y as f32);
    }
    if closed {
        pb.line_to(last.x as f32, geometry.baseline as f32);
        pb.line_to(first.x as f32, geometry.baseline as f32);
        pb.close();
    }
    pb.finish()
}

fn parse_color(hex: &str) -> Option<Color> {
    if !hex.starts_with('#') || hex.len() != 7 {
        return None;
    }

    let r = u8::from_str_radix(hex.get(1..3)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(3..5)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(5..7)?, 16).ok()?;

    Some(Color::from_rgba8(r, g, b, 255))
}
