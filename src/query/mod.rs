//! Query construction and result shaping.
//!
//! Each endpoint is one filter (`nearby`, `address`, `search`) that turns
//! loosely-typed request parameters into a validated [`PlaceQuery`], plus
//! [`run`], which executes the query through the store port and wraps the
//! page in the uniform `{count, data}` envelope.

pub mod address;
pub mod clause;
pub mod nearby;
pub mod page;
pub mod search;

pub use clause::{Clause, Page, PlaceQuery};

use serde::Serialize;

use crate::error::ApiError;
use crate::model::PlaceRecord;
use crate::repository::PlaceStore;

/// The uniform response wrapper. `count` is the number of records in this
/// page, not the total number of matches; callers detect the last page by
/// comparing `data.len()` against the limit they asked for.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub count: usize,
    pub data: Vec<PlaceRecord>,
}

pub fn run(store: &dyn PlaceStore, query: &PlaceQuery) -> Result<Envelope, ApiError> {
    let data = store.query(query)?;
    Ok(Envelope { count: data.len(), data })
}
