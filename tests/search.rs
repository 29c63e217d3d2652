mod common;

use common::{assert_count_matches_data, get, ids, seeded_state, unready_state, SeedRow};
use serde_json::json;

fn mixed_rows() -> Vec<SeedRow> {
    vec![
        (1, 48.8530, 2.3499, json!({"name": "Café de Paris", "amenity": "cafe"})),
        (2, 48.8606, 2.3376, json!({"name": "Dépannage Express", "phone": "0142CAF777"})),
        (3, 48.8584, 2.2945, json!({"name": "Tour Bistro", "brand": "Bistrot Groupe"})),
        (4, 48.8738, 2.3320, json!({"name": "Kiosque", "operator": "Mairie de Paris"})),
        (5, 48.8790, 2.3540, json!({"shop": "bakery", "addr:district": "10e"})),
        (6, 48.8566, 2.3522, json!({"name": "Nothing relevant"})),
    ]
}

#[actix_web::test]
async fn empty_term_is_a_400() {
    let state = seeded_state(&mixed_rows());

    let (status, body) = get(&state, "/api/places/search").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "q is required");

    let (status, _) = get(&state, "/api/places/search?q=%20%20").await;
    assert_eq!(status, 400);
}

#[actix_web::test]
async fn unready_datastore_is_a_503() {
    let state = unready_state();
    let (status, body) = get(&state, "/api/places/search?q=caf").await;
    assert_eq!(status, 503);
    assert_eq!(body["error"], "datastore not ready");
}

#[actix_web::test]
async fn term_matches_any_of_the_fields() {
    let state = seeded_state(&mixed_rows());

    // "caf" hits the name of one record and the phone of another.
    let (status, body) = get(&state, "/api/places/search?q=caf").await;
    assert_eq!(status, 200);
    let mut found = ids(&body);
    found.sort_unstable();
    assert_eq!(found, vec![1, 2]);
    assert_count_matches_data(&body);

    let (_, body) = get(&state, "/api/places/search?q=bakery").await;
    assert_eq!(ids(&body), vec![5]);

    let (_, body) = get(&state, "/api/places/search?q=mairie").await;
    assert_eq!(ids(&body), vec![4]);

    let (_, body) = get(&state, "/api/places/search?q=10e").await;
    assert_eq!(ids(&body), vec![5]);
}

#[actix_web::test]
async fn whitespace_around_the_term_is_ignored() {
    let state = seeded_state(&mixed_rows());

    let (status, body) = get(&state, "/api/places/search?q=%20bistro%20").await;
    assert_eq!(status, 200);
    assert_eq!(ids(&body), vec![3]);
}

#[actix_web::test]
async fn no_match_is_an_empty_envelope_not_an_error() {
    let state = seeded_state(&mixed_rows());

    let (status, body) = get(&state, "/api/places/search?q=zzz").await;
    assert_eq!(status, 200);
    assert_eq!(body["count"], 0);
    assert_eq!(ids(&body), Vec::<i64>::new());
}

#[actix_web::test]
async fn limit_is_capped_at_200() {
    let rows: Vec<SeedRow> = (1..=210)
        .map(|i| (i, 48.85, 2.35, json!({"name": format!("Café {i}")})))
        .collect();
    let state = seeded_state(&rows);

    let (status, body) = get(&state, "/api/places/search?q=caf&limit=1000").await;
    assert_eq!(status, 200);
    assert_eq!(body["count"], 200);
}

#[actix_web::test]
async fn second_page_skips_the_first_window() {
    let rows: Vec<SeedRow> = (1..=25)
        .map(|i| (i, 48.85, 2.35, json!({"name": format!("Café {i}")})))
        .collect();
    let state = seeded_state(&rows);

    let (status, body) = get(&state, "/api/places/search?q=caf&limit=10&page=2").await;
    assert_eq!(status, 200);
    assert_eq!(ids(&body), (11..=20).collect::<Vec<i64>>());
}

#[actix_web::test]
async fn record_shape_is_preserved_in_the_envelope() {
    let state = seeded_state(&mixed_rows());

    let (_, body) = get(&state, "/api/places/search?q=Caf%C3%A9%20de%20Paris").await;
    let record = &body["data"][0];
    assert_eq!(record["id"], 1);
    assert_eq!(record["kind"], "Feature");
    assert_eq!(record["geometry"]["kind"], "Point");
    assert_eq!(record["geometry"]["coordinates"][0], 2.3499);
    assert_eq!(record["geometry"]["coordinates"][1], 48.8530);
    assert_eq!(record["properties"]["amenity"], "cafe");
}
