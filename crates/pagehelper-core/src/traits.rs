//! Mapping traits between query rows and view types.

/// Trait for mapping between domain records and DTOs.
pub trait Mapper<From, To> {
    /// Maps from source type to target type.
    fn map(from: From) -> To;
}

/// Trait for bidirectional mapping between domain records and DTOs.
pub trait BiMapper<A, B>: Mapper<A, B> {
    /// Maps from target type back to source type.
    fn map_back(from: B) -> A;
}

/// Copies the fields a target shares with a source record.
///
/// This is the compile-time counterpart of a reflective bean copy: only the
/// fields listed in the implementation are copied, and a name or type
/// mismatch fails to compile instead of being skipped at runtime. Implement
/// it by hand or with [`copy_properties!`](crate::copy_properties).
pub trait CopyProperties<S: ?Sized> {
    /// Overwrites the shared fields of `self` with those of `source`.
    fn copy_properties(&mut self, source: &S);
}

/// Implements [`CopyProperties`] for the listed same-named fields.
///
/// ```
/// use pagehelper_core::{copy_properties, CopyProperties};
///
/// struct UserRow { id: u64, name: String, password_hash: String }
///
/// #[derive(Default)]
/// struct UserView { id: u64, name: String, display: bool }
///
/// copy_properties!(UserRow => UserView { id, name });
///
/// let row = UserRow { id: 7, name: "ada".into(), password_hash: "x".into() };
/// let mut view = UserView::default();
/// view.copy_properties(&row);
/// assert_eq!(view.id, 7);
/// assert_eq!(view.name, "ada");
/// assert!(!view.display);
/// ```
#[macro_export]
macro_rules! copy_properties {
    ($source:ty => $target:ty { $($field:ident),* $(,)? }) => {
        impl $crate::CopyProperties<$source> for $target {
            fn copy_properties(&mut self, source: &$source) {
                let _ = source;
                $(self.$field = ::core::clone::Clone::clone(&source.$field);)*
            }
        }
    };
}
