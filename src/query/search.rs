use serde::Deserialize;

use crate::error::ApiError;
use crate::query::clause::{attr, Clause, PlaceQuery};
use crate::query::page::Paginator;

/// The attributes free-text search scans. Matching is plain substring,
/// not token or fuzzy: "caf" matches "Café".
pub const SEARCH_FIELDS: &[&str] = &[
    attr::NAME,
    attr::AMENITY,
    attr::ADDRESS,
    attr::PHONE,
    attr::SHOP,
    attr::BRAND,
    attr::OPERATOR,
    attr::POSTCODE,
    attr::DISTRICT,
];

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

/// Builds the free-text predicate: an OR of case-insensitive substring
/// matches across every search field. The widest scan of the three
/// filters, which is why it carries the largest result cap.
pub fn build(params: &SearchParams) -> Result<PlaceQuery, ApiError> {
    let term = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::validation("q is required"))?;

    let clauses = vec![Clause::AnyContains { fields: SEARCH_FIELDS, term: term.to_owned() }];
    let page = Paginator::SEARCH.window(params.page.as_deref(), params.limit.as_deref())?;

    Ok(PlaceQuery { clauses, page })
}
