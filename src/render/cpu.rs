use crate::foundation::core::{Point, Rgba8, Viewport};
use crate::foundation::error::{BorderlineError, BorderlineResult};
use crate::render::backend::{BackendKind, FrameRGBA, RenderBackend, RenderSettings};
use crate::render::surface::{BlendMode, FillStyle, StrokeStyle, Surface};

/// CPU raster surface powered by `vello_cpu`.
///
/// Draw calls are recorded into a `vello_cpu::RenderContext`; [`RenderBackend::present`]
/// rasterizes them into a premultiplied RGBA8 frame.
pub struct CpuSurface {
    width: u16,
    height: u16,
    settings: RenderSettings,
    ctx: vello_cpu::RenderContext,
    path: vello_cpu::kurbo::BezPath,
    stroke: Option<StrokeStyle>,
    fill: Option<FillStyle>,
}

impl CpuSurface {
    pub fn new(viewport: Viewport, settings: RenderSettings) -> BorderlineResult<Self> {
        let width: u16 = viewport
            .width
            .try_into()
            .map_err(|_| BorderlineError::render("surface width exceeds u16"))?;
        let height: u16 = viewport
            .height
            .try_into()
            .map_err(|_| BorderlineError::render("surface height exceeds u16"))?;
        let mut surface = Self {
            width,
            height,
            settings,
            ctx: vello_cpu::RenderContext::new(width, height),
            path: vello_cpu::kurbo::BezPath::new(),
            stroke: None,
            fill: None,
        };
        surface.clear();
        Ok(surface)
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Rasterize everything drawn since the last `clear` into a frame.
    pub fn readback(&mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn draw_current_path(&mut self, color: Rgba8, opacity: f32, blend: BlendMode, fill: bool) {
        let path = std::mem::take(&mut self.path);
        let drawable = path
            .elements()
            .iter()
            .any(|el| !matches!(el, vello_cpu::kurbo::PathEl::MoveTo(_)));
        if !drawable {
            return;
        }

        // A single even-odd fill never overlaps itself, so its opacity folds into the paint.
        let paint = if fill { color.with_opacity(opacity) } else { color };
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            paint.r, paint.g, paint.b, paint.a,
        ));

        let mut layers = 0;
        if blend == BlendMode::Screen {
            self.ctx.push_blend_layer(vello_cpu::peniko::BlendMode::new(
                vello_cpu::peniko::Mix::Screen,
                vello_cpu::peniko::Compose::SrcOver,
            ));
            layers += 1;
        }
        if !fill && opacity < 1.0 {
            self.ctx.push_opacity_layer(opacity.clamp(0.0, 1.0));
            layers += 1;
        }

        if fill {
            self.ctx.set_fill_rule(vello_cpu::peniko::Fill::EvenOdd);
            self.ctx.fill_path(&path);
            self.ctx.set_fill_rule(vello_cpu::peniko::Fill::NonZero);
        } else {
            let width = self.stroke.map_or(1.0, |s| s.width.max(0.0));
            self.ctx.set_stroke(
                vello_cpu::kurbo::Stroke::new(width)
                    .with_join(vello_cpu::kurbo::Join::Round)
                    .with_caps(vello_cpu::kurbo::Cap::Round),
            );
            self.ctx.stroke_path(&path);
        }

        for _ in 0..layers {
            self.ctx.pop_layer();
        }
    }
}

impl Surface for CpuSurface {
    fn clear(&mut self) {
        self.ctx = vello_cpu::RenderContext::new(self.width, self.height);
        self.path = vello_cpu::kurbo::BezPath::new();
        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(self.width),
                f64::from(self.height),
            ));
        }
    }

    fn set_stroke_style(&mut self, style: &StrokeStyle) {
        self.stroke = Some(*style);
    }

    fn move_to(&mut self, p: Point) {
        self.path.move_to(point_to_cpu(p));
    }

    fn line_to(&mut self, p: Point) {
        if self.path.elements().is_empty() {
            self.path.move_to(point_to_cpu(p));
            return;
        }
        self.path.line_to(point_to_cpu(p));
    }

    fn stroke(&mut self) {
        match self.stroke {
            Some(style) => self.draw_current_path(style.color, style.opacity, style.blend, false),
            None => self.path = vello_cpu::kurbo::BezPath::new(),
        }
    }

    fn begin_fill(&mut self, style: &FillStyle) {
        self.path = vello_cpu::kurbo::BezPath::new();
        self.fill = Some(*style);
    }

    fn end_fill(&mut self) {
        if let Some(style) = self.fill.take() {
            self.draw_current_path(style.color, style.opacity, BlendMode::Normal, true);
        }
    }
}

impl RenderBackend for CpuSurface {
    fn kind(&self) -> BackendKind {
        BackendKind::Cpu
    }

    fn present(&mut self) -> BorderlineResult<Option<FrameRGBA>> {
        Ok(Some(self.readback()))
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
