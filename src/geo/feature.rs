use crate::foundation::error::{BorderlineError, BorderlineResult};

/// A geographic position in degrees.
///
/// Serialized as a GeoJSON position (`[lon, lat]`); trailing elements such as altitude are
/// accepted on input and dropped.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl TryFrom<Vec<f64>> for LonLat {
    type Error = String;

    fn try_from(v: Vec<f64>) -> Result<Self, Self::Error> {
        match v.as_slice() {
            [lon, lat, ..] => Ok(Self::new(*lon, *lat)),
            _ => Err(format!("position needs at least 2 numbers, got {}", v.len())),
        }
    }
}

impl From<LonLat> for [f64; 2] {
    fn from(p: LonLat) -> Self {
        [p.lon, p.lat]
    }
}

/// GeoJSON-shaped geometry. Only polygonal geometry animates; line geometry feeds the
/// disputed-border overlay.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Polygon(Vec<Vec<LonLat>>),
    MultiPolygon(Vec<Vec<Vec<LonLat>>>),
    LineString(Vec<LonLat>),
    MultiLineString(Vec<Vec<LonLat>>),
}

impl Geometry {
    /// Polygon parts: one for `Polygon`, one per element for `MultiPolygon`, none otherwise.
    /// Each part is a list of rings, outer boundary first, then holes.
    pub fn polygon_parts(&self) -> Vec<&[Vec<LonLat>]> {
        match self {
            Self::Polygon(rings) => vec![rings.as_slice()],
            Self::MultiPolygon(parts) => parts.iter().map(Vec::as_slice).collect(),
            Self::LineString(_) | Self::MultiLineString(_) => Vec::new(),
        }
    }

    /// Line strings: one for `LineString`, one per element for `MultiLineString`, none otherwise.
    pub fn line_strings(&self) -> Vec<&[LonLat]> {
        match self {
            Self::LineString(line) => vec![line.as_slice()],
            Self::MultiLineString(lines) => lines.iter().map(Vec::as_slice).collect(),
            Self::Polygon(_) | Self::MultiPolygon(_) => Vec::new(),
        }
    }

    pub fn positions(&self) -> Box<dyn Iterator<Item = LonLat> + '_> {
        match self {
            Self::Polygon(rings) | Self::MultiLineString(rings) => {
                Box::new(rings.iter().flatten().copied())
            }
            Self::MultiPolygon(parts) => Box::new(parts.iter().flatten().flatten().copied()),
            Self::LineString(line) => Box::new(line.iter().copied()),
        }
    }
}

/// A single geographic feature with optional identifying properties.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Feature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub properties: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// Identity keys used to match a feature against projection rules and name lookups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureIdentity {
    /// Upper-cased ISO codes (alpha-3 / alpha-2) and the feature id, if any.
    pub codes: Vec<String>,
    /// Normalized names (trimmed, lower-cased, single-spaced).
    pub names: Vec<String>,
}

impl FeatureIdentity {
    pub fn has_code(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c.eq_ignore_ascii_case(code))
    }

    pub fn has_name(&self, name: &str) -> bool {
        let name = normalize_name(name);
        self.names.iter().any(|n| *n == name)
    }
}

const CODE_KEYS: &[&str] = &["ISO_A3", "ISO_A2", "iso_a3", "iso_a2", "ADM0_A3", "id"];
const NAME_KEYS: &[&str] = &["NAME", "ADMIN", "NAME_LONG", "name", "admin"];

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            id: None,
            properties: None,
            geometry: Some(geometry),
        }
    }

    pub fn polygon(rings: Vec<Vec<LonLat>>) -> Self {
        Self::new(Geometry::Polygon(rings))
    }

    pub fn multi_polygon(parts: Vec<Vec<Vec<LonLat>>>) -> Self {
        Self::new(Geometry::MultiPolygon(parts))
    }

    pub fn with_property(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.properties
            .get_or_insert_with(serde_json::Map::new)
            .insert(key.to_owned(), value.into());
        self
    }

    pub fn polygon_parts(&self) -> Vec<&[Vec<LonLat>]> {
        self.geometry
            .as_ref()
            .map(Geometry::polygon_parts)
            .unwrap_or_default()
    }

    pub fn positions(&self) -> Box<dyn Iterator<Item = LonLat> + '_> {
        match &self.geometry {
            Some(g) => g.positions(),
            None => Box::new(std::iter::empty()),
        }
    }

    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.as_ref()?.get(key)?.as_str()
    }

    pub fn identity(&self) -> FeatureIdentity {
        let mut out = FeatureIdentity::default();

        let mut push_code = |s: &str| {
            let s = s.trim();
            // Natural Earth uses "-99" for "no code".
            if !s.is_empty() && s != "-99" {
                let up = s.to_ascii_uppercase();
                if !out.codes.contains(&up) {
                    out.codes.push(up);
                }
            }
        };
        if let Some(serde_json::Value::String(id)) = &self.id {
            push_code(id);
        }
        for key in CODE_KEYS {
            if let Some(v) = self.property_str(key) {
                push_code(v);
            }
        }

        for key in NAME_KEYS {
            if let Some(v) = self.property_str(key) {
                let n = normalize_name(v);
                if !n.is_empty() && !out.names.contains(&n) {
                    out.names.push(n);
                }
            }
        }
        out
    }
}

/// A parsed GeoJSON document: a single feature or a collection.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum GeoDocument {
    Feature(Feature),
    FeatureCollection { features: Vec<Feature> },
}

impl GeoDocument {
    pub fn from_json_str(s: &str) -> BorderlineResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn into_features(self) -> Vec<Feature> {
        match self {
            Self::Feature(f) => vec![f],
            Self::FeatureCollection { features } => features,
        }
    }

    /// Find a feature whose ISO code or normalized name equals `query`.
    pub fn find(&self, query: &str) -> Option<&Feature> {
        let features = match self {
            Self::Feature(f) => std::slice::from_ref(f),
            Self::FeatureCollection { features } => features.as_slice(),
        };
        features.iter().find(|f| {
            let ident = f.identity();
            ident.has_code(query.trim()) || ident.has_name(query)
        })
    }

    /// Take the feature matching `query`, or the first one when no query is given.
    pub fn select(self, query: Option<&str>) -> BorderlineResult<Feature> {
        match query {
            Some(q) => self.find(q).cloned().ok_or_else(|| {
                BorderlineError::validation(format!("no feature matches '{q}'"))
            }),
            None => self
                .into_features()
                .into_iter()
                .next()
                .ok_or_else(|| BorderlineError::validation("document contains no features")),
        }
    }
}

pub(crate) fn normalize_name(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/geo/feature.rs"]
mod tests;
