/// Attribute keys the filters match against. Field names fed into
/// compiled queries come only from these constants, never from request
/// input.
pub mod attr {
    pub const NAME: &str = "name";
    pub const AMENITY: &str = "amenity";
    pub const ADDRESS: &str = "address";
    pub const PHONE: &str = "phone";
    pub const SHOP: &str = "shop";
    pub const BRAND: &str = "brand";
    pub const OPERATOR: &str = "operator";
    pub const POSTCODE: &str = "addr:postcode";
    pub const DISTRICT: &str = "addr:district";
}

/// One typed predicate condition. A filter accumulates clauses instead of
/// building a query document piecemeal, and the datastore adapter compiles
/// them into whatever form it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// The attribute equals the value exactly.
    Eq { field: &'static str, value: String },

    /// The attribute contains the term as a case-insensitive substring.
    /// Records lacking the attribute never match.
    Contains { field: &'static str, term: String },

    /// At least one of the attributes contains the term as a
    /// case-insensitive substring.
    AnyContains { fields: &'static [&'static str], term: String },

    /// The record's point lies within `radius_m` meters of the reference
    /// coordinate. Results come back nearest-first; the ordering is part
    /// of the datastore contract, not re-sorted here.
    Near { lat: f64, lng: f64, radius_m: f64 },
}

/// The window of results to return, applied datastore-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u64,
    pub limit: u64,
}

/// A fully validated query: predicate clauses combined with AND, plus the
/// result window. Pure data; executing it is the store's job.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceQuery {
    pub clauses: Vec<Clause>,
    pub page: Page,
}
