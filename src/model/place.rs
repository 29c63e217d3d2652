use serde::Serialize;
use serde_json::{Map, Value};

/// A geotagged place. `properties` is schema-less: any subset of
/// attributes (`name`, `amenity`, `address`, `phone`, ...) may be present
/// on any record, and consumers must tolerate missing keys.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceRecord {
    pub id: i64,
    pub kind: RecordKind,
    pub properties: Map<String, Value>,
    pub geometry: Geometry,
}

/// Record kind tag. Only one variant exists today; the tag is kept on the
/// wire for future record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordKind {
    Feature,
}

#[derive(Debug, Clone, Serialize)]
pub struct Geometry {
    pub kind: GeometryKind,
    /// Ordered as `[longitude, latitude]`, longitude first.
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GeometryKind {
    Point,
}

impl Geometry {
    pub fn point(lng: f64, lat: f64) -> Geometry {
        Geometry { kind: GeometryKind::Point, coordinates: [lng, lat] }
    }

    pub fn lng(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn lat(&self) -> f64 {
        self.coordinates[1]
    }
}
