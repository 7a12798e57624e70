//! Pagination engine boundary.
//!
//! The engine owns a "next query" slot: configuration written before a
//! data-access call is consumed by the first query that runs afterwards.
//! [`LocalPageEngine`] keeps that slot per thread.

use pagehelper_config::PaginationConfig;
use pagehelper_core::{Interface, Page, PageRequest};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use tracing::debug;

thread_local! {
    static LOCAL_PAGE: RefCell<Option<PageDirective>> = const { RefCell::new(None) };
}

/// Pagination settings for the next query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDirective {
    /// 1-based page number.
    pub page_num: usize,
    pub page_size: usize,
    /// Whether the engine runs a count query.
    pub count: bool,
    /// Engine-side correction of out-of-range page numbers; `None` defers
    /// to the engine default.
    pub reasonable: Option<bool>,
    /// Whether a page size of zero returns every row; `None` defers to the
    /// engine default.
    pub page_size_zero: Option<bool>,
    /// Ordering expression applied to the query.
    pub order_by: Option<String>,
    /// Set when only a sort was requested and no paging.
    pub order_by_only: bool,
}

impl PageDirective {
    /// Builds the directive a configurer issues for `request`.
    ///
    /// Returns `None` when the request is absent or unpaged. Out-of-range
    /// correction is switched off and the page-size-zero behaviour is left
    /// to the engine.
    #[must_use]
    pub fn for_request(request: Option<&PageRequest>, count: bool) -> Option<Self> {
        let request = request.filter(|r| r.is_paged())?;
        Some(Self {
            page_num: request.page_number,
            page_size: request.page_size,
            count,
            reasonable: Some(false),
            page_size_zero: None,
            order_by: None,
            order_by_only: false,
        })
    }

    /// Builds a directive that only sorts the next query.
    #[must_use]
    pub fn sort_only(order_by: impl Into<String>) -> Self {
        Self {
            page_num: 0,
            page_size: 0,
            count: false,
            reasonable: None,
            page_size_zero: None,
            order_by: Some(order_by.into()),
            order_by_only: true,
        }
    }

    /// Returns true if the directive limits the query to one page.
    #[must_use]
    pub const fn is_paged(&self) -> bool {
        !self.order_by_only && self.page_num >= 1 && self.page_size >= 1
    }

    /// Row offset of the requested page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page_num.saturating_sub(1) * self.page_size
    }

    /// Row limit of the requested page.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.page_size
    }

    /// Wraps the rows a query returned under this directive into a page.
    ///
    /// Sort-only directives produce a single page holding every row.
    #[must_use]
    pub fn into_page<T>(self, records: Vec<T>, total: u64, navigate_pages: usize) -> Page<T> {
        if self.is_paged() {
            Page::with_navigate_pages(records, self.page_num, self.page_size, total, navigate_pages)
        } else {
            Page::of(records)
        }
    }

    /// Wraps query rows into a page using the configured navigation width.
    #[must_use]
    pub fn into_page_with<T>(self, records: Vec<T>, total: u64, config: &PaginationConfig) -> Page<T> {
        self.into_page(records, total, config.navigate_pages)
    }
}

/// The external pagination engine's configuration calls.
#[cfg_attr(test, mockall::automock)]
pub trait PaginationEngine: Interface {
    /// Configures the next query as one page.
    fn start_page(&self, directive: PageDirective);

    /// Sets the ordering of the next query.
    fn order_by(&self, order_by: &str);
}

/// Thread-local pagination engine slot.
///
/// Each thread owns its own pending directive, so callers on independent
/// threads never see each other's configuration.
#[derive(shaku::Component, Debug, Default, Clone, Copy)]
#[shaku(interface = PaginationEngine)]
pub struct LocalPageEngine {}

impl LocalPageEngine {
    /// Creates a new engine handle.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Returns the pending directive of the current thread.
    #[must_use]
    pub fn current() -> Option<PageDirective> {
        LOCAL_PAGE.with(|slot| slot.borrow().clone())
    }

    /// Removes and returns the pending directive; called by the next query.
    #[must_use]
    pub fn take() -> Option<PageDirective> {
        LOCAL_PAGE.with(|slot| slot.borrow_mut().take())
    }

    /// Discards the pending directive of the current thread.
    pub fn clear() {
        LOCAL_PAGE.with(|slot| slot.borrow_mut().take());
    }
}

impl PaginationEngine for LocalPageEngine {
    fn start_page(&self, mut directive: PageDirective) {
        LOCAL_PAGE.with(|slot| {
            let mut slot = slot.borrow_mut();
            // A sort set before paging started still applies.
            if directive.order_by.is_none() {
                if let Some(pending) = slot.take().filter(|p| p.order_by_only) {
                    directive.order_by = pending.order_by;
                }
            }
            debug!(
                page_num = directive.page_num,
                page_size = directive.page_size,
                count = directive.count,
                "Pending page directive set"
            );
            *slot = Some(directive);
        });
    }

    fn order_by(&self, order_by: &str) {
        LOCAL_PAGE.with(|slot| {
            let mut slot = slot.borrow_mut();
            match slot.as_mut() {
                Some(pending) => pending.order_by = Some(order_by.to_string()),
                None => *slot = Some(PageDirective::sort_only(order_by)),
            }
        });
        debug!(order_by, "Pending sort set");
    }
}
