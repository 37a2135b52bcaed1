/// Generates `From` conversions into [`crate::Error`], one per
/// `source => Variant` pair, so submodule errors propagate with `?`.
///
/// ```rust,ignore
/// impl_err! {
///     GeoError => Geo,
///     ClusterError => Cluster,
/// }
/// ```
#[macro_export]
macro_rules! impl_err {
    ($($from:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$from> for $crate::Error {
                fn from(value: $from) -> Self {
                    $crate::Error::$variant(value)
                }
            }
        )+
    };
}
