use crate::foundation::math::wrap_longitude;
use crate::geo::feature::LonLat;
use crate::projection::raw::ConicEqualArea;

/// One inset of a composite projection.
///
/// Coordinates are rotated by `rotate_deg`, projected with a conic equal-area projection,
/// re-centered so that `center` lands on the origin, then scaled and offset into the shared
/// unit frame (y down).
#[derive(Clone, Copy, Debug, PartialEq)]
struct Inset {
    rotate_deg: f64,
    center: (f64, f64),
    conic: ConicEqualArea,
    scale: f64,
    offset: (f64, f64),
    lon: (f64, f64),
    lat: (f64, f64),
}

impl Inset {
    fn contains(&self, p: LonLat) -> bool {
        let (lo, hi) = self.lon;
        let in_lon = if lo <= hi {
            p.lon >= lo && p.lon <= hi
        } else {
            p.lon >= lo || p.lon <= hi
        };
        in_lon && p.lat >= self.lat.0 && p.lat <= self.lat.1
    }

    fn project(&self, p: LonLat) -> (f64, f64) {
        let lambda = wrap_longitude(p.lon + self.rotate_deg).to_radians();
        let (x, y) = self.conic.project(lambda, p.lat.to_radians());
        let (cx, cy) = self
            .conic
            .project(self.center.0.to_radians(), self.center.1.to_radians());
        (
            (x - cx) * self.scale + self.offset.0,
            -(y - cy) * self.scale + self.offset.1,
        )
    }
}

/// Conterminous United States with Alaska and Hawaii relocated to the lower-left corner.
///
/// Positions outside all three insets (e.g. Guam, Puerto Rico) have no image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CompositeUsa {
    insets: [Inset; 3],
}

impl Default for CompositeUsa {
    fn default() -> Self {
        let lower48 = Inset {
            rotate_deg: 96.0,
            center: (-0.6, 38.7),
            conic: ConicEqualArea::new(29.5, 45.5),
            scale: 1.0,
            offset: (0.0, 0.0),
            lon: (-125.0, -66.0),
            lat: (24.0, 50.0),
        };
        // Aleutians extend past the antimeridian; the longitude range wraps.
        let alaska = Inset {
            rotate_deg: 154.0,
            center: (-2.0, 58.5),
            conic: ConicEqualArea::new(55.0, 65.0),
            scale: 0.35,
            offset: (-0.307, 0.201),
            lon: (172.0, -129.0),
            lat: (50.0, 72.0),
        };
        let hawaii = Inset {
            rotate_deg: 157.0,
            center: (-3.0, 19.9),
            conic: ConicEqualArea::new(8.0, 18.0),
            scale: 1.0,
            offset: (-0.205, 0.212),
            lon: (-161.0, -154.0),
            lat: (18.0, 23.0),
        };
        Self {
            insets: [lower48, alaska, hawaii],
        }
    }
}

impl CompositeUsa {
    pub(crate) fn project(&self, p: LonLat) -> Option<(f64, f64)> {
        self.insets
            .iter()
            .find(|inset| inset.contains(p))
            .map(|inset| inset.project(p))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/composite.rs"]
mod tests;
