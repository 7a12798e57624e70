//! Pagination query binding.

use pagehelper_config::PaginationConfig;
use pagehelper_core::{PageHelperResult, PageRequest, ValidateExt};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Untrusted pagination parameters, e.g. from a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(default)]
    #[validate(range(min = 1, message = "Page number must be at least 1"))]
    pub page_num: Option<usize>,
    #[serde(default)]
    #[validate(range(min = 1, message = "Page size must be at least 1"))]
    pub page_size: Option<usize>,
    #[serde(default)]
    #[validate(
        length(max = 256, message = "Order by is too long"),
        custom(function = "pagehelper_core::rules::safe_order_by")
    )]
    pub order_by: Option<String>,
    #[serde(default)]
    pub count: Option<bool>,
}

impl PageQuery {
    /// Validates the query and resolves it into a request.
    ///
    /// Missing values fall back to `config`; the page size is clamped to
    /// `config.max_page_size` and blank sort expressions are dropped.
    pub fn into_page_request(self, config: &PaginationConfig) -> PageHelperResult<PageRequest> {
        self.validate_request()?;

        let page_size = config.clamp_page_size(self.page_size.unwrap_or(config.default_page_size));
        let mut request = PageRequest::new(self.page_num.unwrap_or(1), page_size)
            .with_count(self.count.unwrap_or(config.default_count));
        if let Some(order_by) = self.order_by.filter(|o| !o.trim().is_empty()) {
            request = request.with_order_by(order_by);
        }
        Ok(request)
    }
}
