//! Page result transformation.
//!
//! Re-types the records of a [`Page`] while copying its metadata unchanged.
//! Absent or empty input always yields [`empty_page`], whatever mapper or
//! target type accompanies it.

use pagehelper_core::{
    BoxError, CopyProperties, Mapper, Page, PageHelperError, PageHelperResult,
};
use std::fmt;
use tracing::debug;

/// Factory for empty target records, filled by [`transform_into`].
pub struct TargetType<R> {
    factory: Box<dyn Fn() -> Result<R, BoxError> + Send + Sync>,
}

impl<R: Default + 'static> TargetType<R> {
    /// Constructs targets with `R::default()`.
    #[must_use]
    pub fn default_constructed() -> Self {
        Self {
            factory: Box::new(|| Ok(R::default())),
        }
    }
}

impl<R: 'static> TargetType<R> {
    /// Constructs targets with a fallible factory.
    pub fn with_factory<F, E>(factory: F) -> Self
    where
        F: Fn() -> Result<R, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self {
            factory: Box::new(move || factory().map_err(Into::into)),
        }
    }
}

impl<R> TargetType<R> {
    /// Creates one empty target record.
    pub fn instantiate(&self) -> PageHelperResult<R> {
        (self.factory)().map_err(PageHelperError::construction::<R, _>)
    }
}

impl<R> fmt::Debug for TargetType<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetType")
            .field("type", &std::any::type_name::<R>())
            .finish_non_exhaustive()
    }
}

/// Returns the canonical empty page.
#[must_use]
pub fn empty_page<R>() -> Page<R> {
    Page::empty()
}

fn non_empty<T>(page: Option<Page<T>>) -> Option<Page<T>> {
    page.filter(|p| !p.is_empty())
}

/// Transforms a page by constructing each target and copying the fields it
/// shares with the source record.
///
/// A failing factory aborts the whole transformation with
/// [`PageHelperError::Construction`]; no placeholder records are produced.
pub fn transform_into<T, R>(
    page: Option<Page<T>>,
    target: &TargetType<R>,
) -> PageHelperResult<Page<R>>
where
    R: CopyProperties<T>,
{
    let Some(page) = non_empty(page) else {
        return Ok(empty_page());
    };

    debug!(
        records = page.len(),
        target = std::any::type_name::<R>(),
        "Copying page records into target type"
    );
    page.try_map(|record| {
        let mut copy = target.instantiate()?;
        copy.copy_properties(&record);
        Ok(copy)
    })
}

/// Transforms a page by applying `mapper` to each record in order.
///
/// `mapper` may be `None` only when the page is absent or empty; otherwise
/// the call fails with [`PageHelperError::InvalidArgument`].
pub fn transform<T, R, F>(page: Option<Page<T>>, mapper: Option<F>) -> PageHelperResult<Page<R>>
where
    F: FnMut(T) -> R,
{
    let Some(page) = non_empty(page) else {
        return Ok(empty_page());
    };
    let mapper = mapper.ok_or_else(|| {
        PageHelperError::invalid_argument("mapper must be provided for a page with records")
    })?;

    debug!(records = page.len(), "Mapping page records");
    Ok(page.map(mapper))
}

/// Transforms a page with a fallible mapper.
///
/// The first failure aborts the transformation with
/// [`PageHelperError::Mapping`] wrapping the mapper's error.
pub fn try_transform<T, R, E, F>(
    page: Option<Page<T>>,
    mapper: Option<F>,
) -> PageHelperResult<Page<R>>
where
    F: FnMut(T) -> Result<R, E>,
    E: Into<BoxError>,
{
    let Some(page) = non_empty(page) else {
        return Ok(empty_page());
    };
    let mut mapper = mapper.ok_or_else(|| {
        PageHelperError::invalid_argument("mapper must be provided for a page with records")
    })?;

    debug!(records = page.len(), "Mapping page records");
    page.try_map(|record| mapper(record).map_err(PageHelperError::mapping))
}

/// Transforms a page with a [`Mapper`] implementation.
pub fn transform_with<M, T, R>(page: Option<Page<T>>) -> Page<R>
where
    M: Mapper<T, R>,
{
    non_empty(page).map_or_else(empty_page, |page| page.map(M::map))
}
