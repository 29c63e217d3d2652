use serde::Deserialize;

use crate::error::ApiError;
use crate::query::clause::{attr, Clause, PlaceQuery};
use crate::query::page::Paginator;

pub const RADIUS_DEFAULT_M: f64 = 1000.0;
pub const RADIUS_CAP_M: f64 = 5000.0;

#[derive(Debug, Default, Deserialize)]
pub struct NearbyParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
    pub category: Option<String>,
}

/// Builds the "within radius of point" predicate, nearest-first, with an
/// optional exact amenity refinement. There is no fallback coordinate:
/// a missing or non-numeric `lat`/`lng` is a hard error.
pub fn build(params: &NearbyParams) -> Result<PlaceQuery, ApiError> {
    let lat = required_number("lat", params.lat.as_deref())?;
    let lng = required_number("lng", params.lng.as_deref())?;

    let radius = optional_number("radius", params.radius.as_deref())?.unwrap_or(RADIUS_DEFAULT_M);
    let radius_m = radius.min(RADIUS_CAP_M);

    let mut clauses = vec![Clause::Near { lat, lng, radius_m }];

    if let Some(category) = params.category.as_deref().filter(|c| !c.is_empty()) {
        clauses.push(Clause::Eq { field: attr::AMENITY, value: category.to_owned() });
    }

    let page = Paginator::NEARBY.window(params.page.as_deref(), params.limit.as_deref())?;

    Ok(PlaceQuery { clauses, page })
}

fn required_number(name: &str, raw: Option<&str>) -> Result<f64, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::validation(format!("{name} is required")))?;
    parse_number(name, raw)
}

fn optional_number(name: &str, raw: Option<&str>) -> Result<Option<f64>, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => parse_number(name, raw).map(Some),
    }
}

fn parse_number(name: &str, raw: &str) -> Result<f64, ApiError> {
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ApiError::validation(format!("{name} must be a number")))
}
