use crate::foundation::core::Viewport;
use crate::foundation::error::{BorderlineError, BorderlineResult};
use crate::render::cpu::CpuSurface;
use crate::render::record::RecordingSurface;
use crate::render::surface::Surface;

/// Rasterized output of a backend. `data` is tightly packed RGBA8, row-major.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy of the frame with straight (non-premultiplied) alpha, as image encoders expect.
    pub fn to_straight_alpha(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                px[0] = 0;
                px[1] = 0;
                px[2] = 0;
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    pub clear_rgba: Option<[u8; 4]>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// GPU-accelerated drawing. Not available in this build; see [`create_backend_with_fallback`].
    Accelerated,
    Cpu,
    Recording,
}

/// A [`Surface`] that can hand back what it drew.
pub trait RenderBackend: Surface {
    fn kind(&self) -> BackendKind;

    /// Finish the frame. Raster backends return pixels; recording backends return `None`.
    fn present(&mut self) -> BorderlineResult<Option<FrameRGBA>>;
}

impl RenderBackend for RecordingSurface {
    fn kind(&self) -> BackendKind {
        BackendKind::Recording
    }

    fn present(&mut self) -> BorderlineResult<Option<FrameRGBA>> {
        Ok(None)
    }
}

pub fn create_backend(
    kind: BackendKind,
    viewport: Viewport,
    settings: &RenderSettings,
) -> BorderlineResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(CpuSurface::new(viewport, settings.clone())?)),
        BackendKind::Recording => Ok(Box::new(RecordingSurface::new())),
        BackendKind::Accelerated => Err(BorderlineError::unsupported(
            "accelerated backend is not available",
        )),
    }
}

/// Like [`create_backend`], but an unsupported backend degrades to the CPU one.
///
/// Returns the backend together with the kind that was actually created.
pub fn create_backend_with_fallback(
    kind: BackendKind,
    viewport: Viewport,
    settings: &RenderSettings,
) -> BorderlineResult<(Box<dyn RenderBackend>, BackendKind)> {
    match create_backend(kind, viewport, settings) {
        Ok(backend) => Ok((backend, kind)),
        Err(err) if err.is_unsupported() => {
            tracing::warn!(requested = ?kind, error = %err, "backend unavailable, falling back to cpu");
            let backend = create_backend(BackendKind::Cpu, viewport, settings)?;
            Ok((backend, BackendKind::Cpu))
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
