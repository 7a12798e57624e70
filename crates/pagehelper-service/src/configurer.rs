//! Pagination request configuration.
//!
//! Translates a [`PageRequest`] into configuration calls on the pagination
//! engine. Every call only writes the engine's "next query" slot; nothing
//! here runs a query.

use crate::engine::{PageDirective, PaginationEngine};
use pagehelper_core::{Interface, PageRequest};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Configures pagination for the next data-access call.
pub trait PaginationConfigurer: Interface {
    /// Forwards an ordering expression verbatim to the engine.
    ///
    /// The expression is not checked here; a malformed one fails when the
    /// query runs.
    fn apply_sort(&self, order_by: &str);

    /// Starts paging with an explicit count-query flag.
    ///
    /// Does nothing when `request` is absent or unpaged.
    fn begin_paging_with_count(&self, request: Option<&PageRequest>, count: bool);

    /// Starts paging with a count query.
    fn begin_paging(&self, request: Option<&PageRequest>) {
        self.begin_paging_with_count(request, true);
    }

    /// Starts paging with a count query, then applies `order_by`.
    ///
    /// The count query always runs on this path, and the sort is applied
    /// even when `request` is absent or unpaged. Use
    /// [`begin_paging_as_requested`](Self::begin_paging_as_requested) to
    /// combine a sort with a custom count flag.
    fn begin_paging_with_sort(&self, request: Option<&PageRequest>, order_by: &str) {
        self.begin_paging(request);
        self.apply_sort(order_by);
    }

    /// Starts paging honouring the request's own count flag and sort.
    fn begin_paging_as_requested(&self, request: Option<&PageRequest>) {
        let Some(request) = request else {
            return;
        };
        self.begin_paging_with_count(Some(request), request.count);
        if let Some(order_by) = request.order_by.as_deref() {
            self.apply_sort(order_by);
        }
    }
}

/// Default configurer writing to an injected pagination engine.
#[derive(Component)]
#[shaku(interface = PaginationConfigurer)]
pub struct PageHelper {
    #[shaku(inject)]
    engine: Arc<dyn PaginationEngine>,
}

impl PageHelper {
    /// Creates a configurer over `engine`.
    pub fn new(engine: Arc<dyn PaginationEngine>) -> Self {
        Self { engine }
    }
}

impl PaginationConfigurer for PageHelper {
    fn apply_sort(&self, order_by: &str) {
        debug!(order_by, "Applying sort to next query");
        self.engine.order_by(order_by);
    }

    fn begin_paging_with_count(&self, request: Option<&PageRequest>, count: bool) {
        match PageDirective::for_request(request, count) {
            Some(directive) => {
                debug!(
                    page_num = directive.page_num,
                    page_size = directive.page_size,
                    count = directive.count,
                    "Starting paged query"
                );
                self.engine.start_page(directive);
            }
            None => debug!("Request is absent or unpaged, pagination not applied"),
        }
    }
}

impl std::fmt::Debug for PageHelper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageHelper").finish_non_exhaustive()
    }
}
