//! Procedural macros for xtpoint.
//!
//! - `#[bootstrap]` - declare a function as a loadable unit collected at link time

use proc_macro::TokenStream;

mod bootstrap;

/// Declare a function as a loadable unit.
///
/// The function keeps its name and signature. A unit entry pointing at it is
/// submitted to `inventory`, so `Loader::load(&Collected, ..)` will call it.
///
/// ```rust,ignore
/// #[xtpoint::bootstrap(name = "canada/bundle")]
/// fn canada(ext: &Dispatcher, di: &Di) {
///     ext.point("canada.bootstrap").extend(captain());
/// }
///
/// // Fallible entry points are supported too
/// #[xtpoint::bootstrap]
/// fn fallible(ext: &Dispatcher, di: &Di) -> Result<(), BoxError> {
///     Ok(())
/// }
/// ```
///
/// Without `name`, the unit is named `module::path::fn_name`.
#[proc_macro_attribute]
pub fn bootstrap(attr: TokenStream, item: TokenStream) -> TokenStream {
    bootstrap::bootstrap_impl(attr, item)
}
