use std::sync::Mutex;

use rusqlite::{Connection, ToSql};
use thiserror::Error;

use crate::db;
use crate::model::PlaceRecord;
use crate::query::{Clause, PlaceQuery};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("datastore query failed")]
    Sqlite(#[from] rusqlite::Error),

    #[error("datastore connection poisoned")]
    Poisoned,
}

/// The query port. The pipeline only ever talks to the datastore through
/// this trait, so tests can inject a fake store.
pub trait PlaceStore: Send + Sync {
    fn query(&self, query: &PlaceQuery) -> Result<Vec<PlaceRecord>, StoreError>;
}

/// SQLite-backed store over the `places` table. Predicate clauses compile
/// to SQL; the offset/limit window is applied by SQLite, never against an
/// in-memory collection.
pub struct SqlitePlaceStore {
    conn: Mutex<Connection>,
}

impl SqlitePlaceStore {
    pub fn new(conn: Connection) -> SqlitePlaceStore {
        SqlitePlaceStore { conn: Mutex::new(conn) }
    }
}

impl PlaceStore for SqlitePlaceStore {
    fn query(&self, query: &PlaceQuery) -> Result<Vec<PlaceRecord>, StoreError> {
        let (sql, params) = compile(query);

        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            db::place_mapper(),
        )?;

        let mut places = Vec::new();
        for place in rows {
            places.push(place?);
        }

        Ok(places)
    }
}

/// Compiles clauses into a single SELECT. Proximity doubles as the sort
/// key so results come back nearest-first.
fn compile(query: &PlaceQuery) -> (String, Vec<Box<dyn ToSql>>) {
    let mut predicates: Vec<String> = Vec::new();
    let mut params: Vec<Box<dyn ToSql>> = Vec::new();
    let mut order: Option<(String, Vec<Box<dyn ToSql>>)> = None;

    for clause in &query.clauses {
        match clause {
            Clause::Eq { field, value } => {
                predicates.push(format!("{} = ?", attr_sql(field)));
                params.push(Box::new(value.clone()));
            }
            Clause::Contains { field, term } => {
                predicates.push(format!("contains_nocase({}, ?)", attr_sql(field)));
                params.push(Box::new(term.clone()));
            }
            Clause::AnyContains { fields, term } => {
                let alternatives: Vec<String> = fields
                    .iter()
                    .map(|field| {
                        params.push(Box::new(term.clone()));
                        format!("contains_nocase({}, ?)", attr_sql(field))
                    })
                    .collect();
                predicates.push(format!("({})", alternatives.join(" OR ")));
            }
            Clause::Near { lat, lng, radius_m } => {
                predicates.push("haversine_m(lat, lon, ?, ?) <= ?".to_owned());
                params.push(Box::new(*lat));
                params.push(Box::new(*lng));
                params.push(Box::new(*radius_m));
                order = Some((
                    "haversine_m(lat, lon, ?, ?)".to_owned(),
                    vec![Box::new(*lat) as Box<dyn ToSql>, Box::new(*lng)],
                ));
            }
        }
    }

    let mut sql = String::from("SELECT id, lat, lon, tags FROM places");
    if !predicates.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&predicates.join(" AND "));
    }
    if let Some((expr, order_params)) = order {
        sql.push_str(" ORDER BY ");
        sql.push_str(&expr);
        params.extend(order_params);
    }
    sql.push_str(" LIMIT ? OFFSET ?");
    params.push(Box::new(window_bound(query.page.limit)));
    params.push(Box::new(window_bound(query.page.offset)));

    (sql, params)
}

fn attr_sql(field: &str) -> String {
    format!("json_extract(tags, '$.\"{field}\"')")
}

fn window_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
