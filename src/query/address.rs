use serde::Deserialize;

use crate::error::ApiError;
use crate::query::clause::{attr, Clause, Page, PlaceQuery};

/// By-address lookups are a single fixed window: at most 50 records,
/// no offset. The endpoint takes no pagination parameters.
const WINDOW: Page = Page { offset: 0, limit: 50 };

#[derive(Debug, Default, Deserialize)]
pub struct AddressParams {
    pub street: Option<String>,
    pub postal: Option<String>,
    pub arrondissement: Option<String>,
}

/// Builds the structured address predicate: the address attribute must
/// contain `street` as a case-insensitive substring, refined by exact
/// postal code and district matches when supplied.
pub fn build(params: &AddressParams) -> Result<PlaceQuery, ApiError> {
    let street = params
        .street
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::validation("street is required"))?;

    let mut clauses = vec![Clause::Contains { field: attr::ADDRESS, term: street.to_owned() }];

    if let Some(postal) = non_empty(params.postal.as_deref()) {
        clauses.push(Clause::Eq { field: attr::POSTCODE, value: postal });
    }

    if let Some(district) = non_empty(params.arrondissement.as_deref()) {
        clauses.push(Clause::Eq { field: attr::DISTRICT, value: district });
    }

    Ok(PlaceQuery { clauses, page: WINDOW })
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
}
