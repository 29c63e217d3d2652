#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web::Data;
use actix_web::{test, App};
use rusqlite::params;
use serde_json::Value;

use aroundme::controller;
use aroundme::db;
use aroundme::repository::SqlitePlaceStore;
use aroundme::state::AppState;

pub type SeedRow = (i64, f64, f64, Value);

/// App state over an in-memory database seeded with the given rows.
pub fn seeded_state(rows: &[SeedRow]) -> Data<AppState> {
    let conn = db::open_in_memory().unwrap();
    for (id, lat, lon, tags) in rows {
        conn.execute(
            "INSERT INTO places (id, lat, lon, tags) VALUES (?, ?, ?, ?)",
            params![id, lat, lon, tags.to_string()],
        )
        .unwrap();
    }

    let state = AppState::new();
    state.set_store(Arc::new(SqlitePlaceStore::new(conn)));
    Data::new(state)
}

/// App state whose store was never attached.
pub fn unready_state() -> Data<AppState> {
    Data::new(AppState::new())
}

pub async fn get(state: &Data<AppState>, path: &str) -> (u16, Value) {
    let (status, body) = get_raw(state, path).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get_raw(state: &Data<AppState>, path: &str) -> (u16, Vec<u8>) {
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .service(controller::place::index)
            .service(controller::place::nearby_places)
            .service(controller::place::places_by_address)
            .service(controller::place::search_places),
    )
    .await;

    let req = test::TestRequest::get().uri(path).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    let body = test::read_body(resp).await.to_vec();
    (status, body)
}

pub fn ids(envelope: &Value) -> Vec<i64> {
    envelope["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .map(|record| record["id"].as_i64().expect("id should be an integer"))
        .collect()
}

pub fn assert_count_matches_data(envelope: &Value) {
    let len = envelope["data"].as_array().expect("data should be an array").len();
    assert_eq!(envelope["count"].as_u64(), Some(len as u64));
}
