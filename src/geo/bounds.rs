use crate::foundation::math::wrap_longitude;
use crate::geo::feature::LonLat;

/// Geographic bounding box in degrees.
///
/// Boxes built by [`GeoBounds::antimeridian_aware`] may have `max.lon < min.lon`, meaning the
/// box wraps across the 180th meridian.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoBounds {
    pub min: LonLat,
    pub max: LonLat,
}

impl GeoBounds {
    pub fn new(min: LonLat, max: LonLat) -> Self {
        Self { min, max }
    }

    /// Plain component-wise min/max over `points`, ignoring non-finite positions.
    pub fn from_points(points: impl IntoIterator<Item = LonLat>) -> Option<Self> {
        let mut it = points
            .into_iter()
            .filter(|p| p.lon.is_finite() && p.lat.is_finite());
        let first = it.next()?;
        let mut b = Self::new(first, first);
        for p in it {
            b.min.lon = b.min.lon.min(p.lon);
            b.min.lat = b.min.lat.min(p.lat);
            b.max.lon = b.max.lon.max(p.lon);
            b.max.lat = b.max.lat.max(p.lat);
        }
        Some(b)
    }

    /// Smallest longitude interval covering every point, allowed to wrap across ±180.
    ///
    /// The interval is the complement of the widest empty gap between consecutive longitudes
    /// on the circle. When that gap straddles the antimeridian the result is an ordinary box;
    /// otherwise `max.lon < min.lon`.
    pub fn antimeridian_aware(points: impl IntoIterator<Item = LonLat>) -> Option<Self> {
        let mut lons = Vec::new();
        let mut min_lat = f64::INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        for p in points {
            if !(p.lon.is_finite() && p.lat.is_finite()) {
                continue;
            }
            lons.push(wrap_longitude(p.lon));
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
        }
        if lons.is_empty() {
            return None;
        }
        lons.sort_by(f64::total_cmp);

        let n = lons.len();
        let mut widest = lons[0] + 360.0 - lons[n - 1];
        let mut split = None;
        for i in 0..n - 1 {
            let gap = lons[i + 1] - lons[i];
            if gap > widest {
                widest = gap;
                split = Some(i);
            }
        }

        let (min_lon, max_lon) = match split {
            None => (lons[0], lons[n - 1]),
            Some(i) => (lons[i + 1], lons[i]),
        };
        Some(Self::new(
            LonLat::new(min_lon, min_lat),
            LonLat::new(max_lon, max_lat),
        ))
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.max.lon < self.min.lon
    }

    /// Longitude midpoint, unwrapping across the antimeridian when the box crosses it.
    pub fn center_lon(&self) -> f64 {
        let max = if self.crosses_antimeridian() {
            self.max.lon + 360.0
        } else {
            self.max.lon
        };
        wrap_longitude((self.min.lon + max) / 2.0)
    }

    /// Axis-aligned overlap test. Touching edges count as overlapping.
    pub fn intersects(&self, other: &GeoBounds) -> bool {
        !(self.max.lon < other.min.lon
            || other.max.lon < self.min.lon
            || self.max.lat < other.min.lat
            || other.max.lat < self.min.lat)
    }

    pub fn to_array(&self) -> [[f64; 2]; 2] {
        [[self.min.lon, self.min.lat], [self.max.lon, self.max.lat]]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geo/bounds.rs"]
mod tests;
