use crate::error::ApiError;
use crate::query::clause::Page;

/// Computes the result window for a paginated endpoint.
///
/// The offset multiplies the requested limit, while the window size is
/// separately clamped to the endpoint cap. A caller asking for
/// `page=2&limit=1000` therefore skips 1000 records but still receives at
/// most `cap`.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    pub default_limit: u64,
    pub cap: u64,
}

impl Paginator {
    pub const NEARBY: Paginator = Paginator { default_limit: 20, cap: 50 };
    pub const SEARCH: Paginator = Paginator { default_limit: 50, cap: 200 };

    pub fn window(&self, page: Option<&str>, limit: Option<&str>) -> Result<Page, ApiError> {
        let page = int_param("page", page, 1)?.max(1) as u64;
        let limit = int_param("limit", limit, self.default_limit as i64)?.max(0) as u64;

        Ok(Page {
            offset: (page - 1).saturating_mul(limit),
            limit: limit.clamp(1, self.cap),
        })
    }
}

fn int_param(name: &str, raw: Option<&str>, default: i64) -> Result<i64, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(default),
        Some(s) => s
            .parse()
            .map_err(|_| ApiError::validation(format!("{name} must be a number"))),
    }
}
