mod place;

pub use place::{PlaceStore, SqlitePlaceStore, StoreError};
