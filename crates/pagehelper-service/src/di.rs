//! Dependency injection module using Shaku.
//!
//! `PageHelperModule` wires the thread-local engine into the default
//! configurer, so callers resolve `dyn PaginationConfigurer` instead of
//! constructing [`PageHelper`] themselves.

use crate::{LocalPageEngine, PageHelper};
use shaku::module;
use std::sync::Arc;
use tracing::debug;

module! {
    pub PageHelperModule {
        components = [
            LocalPageEngine,
            PageHelper,
        ],
        providers = [],
    }
}

/// Builds the default pagination module.
#[must_use]
pub fn build_page_helper_module() -> Arc<PageHelperModule> {
    debug!("Building pagination module");
    Arc::new(PageHelperModule::builder().build())
}
