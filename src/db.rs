use anyhow::{Context as _, Result};
use rusqlite::functions::FunctionFlags;
use rusqlite::types::{Type, ValueRef};
use rusqlite::{Connection, Row};
use serde_json::{Map, Value};

use crate::model::{Geometry, PlaceRecord, RecordKind};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS places (
    id INTEGER PRIMARY KEY,
    lat REAL NOT NULL,
    lon REAL NOT NULL,
    tags TEXT NOT NULL DEFAULT '{}'
);
";

pub fn open(path: &str) -> Result<Connection> {
    let conn = Connection::open(path).with_context(|| format!("unable to open database at {path}"))?;
    init(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    init(Connection::open_in_memory()?)
}

fn init(conn: Connection) -> Result<Connection> {
    conn.execute_batch(SCHEMA).context("unable to apply schema")?;
    register_functions(&conn)?;
    Ok(conn)
}

/// SQL functions the query compiler relies on. Both are deterministic, so
/// SQLite may fold repeated calls within a statement.
fn register_functions(conn: &Connection) -> Result<()> {
    let flags = FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC;

    conn.create_scalar_function("haversine_m", 4, flags, |ctx| {
        let lat1: f64 = ctx.get(0)?;
        let lon1: f64 = ctx.get(1)?;
        let lat2: f64 = ctx.get(2)?;
        let lon2: f64 = ctx.get(3)?;
        Ok(haversine_m(lat1, lon1, lat2, lon2))
    })
    .context("unable to register haversine_m")?;

    conn.create_scalar_function("contains_nocase", 2, flags, |ctx| {
        let haystack = match ctx.get_raw(0) {
            ValueRef::Null => return Ok(false),
            ValueRef::Text(text) => String::from_utf8_lossy(text).into_owned(),
            ValueRef::Integer(n) => n.to_string(),
            ValueRef::Real(n) => n.to_string(),
            ValueRef::Blob(_) => return Ok(false),
        };
        let needle: String = ctx.get(1)?;
        Ok(haystack.to_lowercase().contains(&needle.to_lowercase()))
    })
    .context("unable to register contains_nocase")?;

    Ok(())
}

/// Great-circle distance in meters between two WGS84 coordinates.
pub fn haversine_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const EARTH_RADIUS_M: f64 = 6_371_000.0;

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * a.sqrt().asin()
}

/// Maps a `SELECT id, lat, lon, tags` row to a record. A tags column that
/// is not a JSON object is a malformed datastore response and fails the
/// whole query.
pub fn place_mapper() -> impl FnMut(&Row<'_>) -> rusqlite::Result<PlaceRecord> {
    |row| {
        let id: i64 = row.get(0)?;
        let lat: f64 = row.get(1)?;
        let lon: f64 = row.get(2)?;
        let tags: String = row.get(3)?;

        let properties: Map<String, Value> = serde_json::from_str(&tags)
            .map_err(|err| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(err)))?;

        Ok(PlaceRecord {
            id,
            kind: RecordKind::Feature,
            properties,
            geometry: Geometry::point(lon, lat),
        })
    }
}
