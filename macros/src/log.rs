use proc_macro::TokenStream;
use quote::quote;
use syn::{Expr, parse_macro_input};

pub fn log_impl(input: TokenStream) -> TokenStream {
    let value_expr = parse_macro_input!(input as Expr);

    quote! {
        {
            let value = &#value_expr;
            let level = value.level();
            let message = value.to_string();

            match level {
                tracing::Level::ERROR => tracing::error!("{}", message),
                tracing::Level::WARN => tracing::warn!("{}", message),
                tracing::Level::INFO => tracing::info!("{}", message),
                tracing::Level::DEBUG => tracing::debug!("{}", message),
                tracing::Level::TRACE => tracing::trace!("{}", message),
            }
        }
    }
    .into()
}
