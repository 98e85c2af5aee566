mod log;
mod loggable;

use proc_macro::TokenStream;

/// Emits a loggable value through `tracing` at the level it declares.
///
/// `log!(value)`; the value is borrowed, not consumed.
#[proc_macro]
pub fn log(input: TokenStream) -> TokenStream {
    log::log_impl(input)
}

/// Declares an enum whose variants each carry a display message and a `tracing::Level`.
#[proc_macro]
pub fn loggable(input: TokenStream) -> TokenStream {
    loggable::loggable_impl(input)
}
