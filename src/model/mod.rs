mod place;

pub use place::{Geometry, GeometryKind, PlaceRecord, RecordKind};
