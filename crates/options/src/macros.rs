//! Fluent setter generation for option records.
//!
//! Invoked inside an `impl` block; each entry expands to a consuming
//! `with_*` method so records can be configured in a single chain.

macro_rules! setters {
    ($($setter:ident => $field:ident: $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Sets `", stringify!($field), "`.")]
            #[must_use]
            pub fn $setter(mut self, $field: impl Into<$ty>) -> Self {
                self.$field = $field.into();
                self
            }
        )*
    };
}

/// Like `setters!` for `Option<T>` fields: the setter takes `T` and stores `Some`.
macro_rules! optional_setters {
    ($($setter:ident => $field:ident: $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Sets `", stringify!($field), "`; it is absent unless set.")]
            #[must_use]
            pub fn $setter(mut self, $field: impl Into<$ty>) -> Self {
                self.$field = Some($field.into());
                self
            }
        )*
    };
}
