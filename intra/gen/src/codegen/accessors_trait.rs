//! `Accessors` trait generation.
//!
//! Generates the trait that carries every accessor as a provided method,
//! plus its implementation for `IntraClient`. Other client wrappers only
//! need to supply `client()` to get the whole accessor surface.

use proc_macro2::TokenStream;
use quote::quote;

use crate::codegen::accessor::generate_accessor;
use crate::collision::ResolvedAccessor;

/// Generates the `Accessors` trait and its `IntraClient` implementation.
///
/// ## Examples
///
/// ```ignore
/// // Generated code:
/// #[allow(non_snake_case)]
/// pub trait Accessors {
///     /// Returns the client requests are issued through.
///     fn client(&self) -> &IntraClient;
///
///     fn Users(&self, id: Option<&str>, options: QueryOptions) -> RequestHandle<'_> { ... }
/// }
///
/// impl Accessors for IntraClient {
///     fn client(&self) -> &IntraClient {
///         self
///     }
/// }
/// ```
pub fn generate_accessors_trait(accessors: &[ResolvedAccessor]) -> TokenStream {
    let methods = accessors.iter().map(generate_accessor);

    quote! {
        /// Path accessors for every documented intra resource.
        ///
        /// Accessors only build the request path; the returned
        /// [`RequestHandle`] performs the call. Method names are the
        /// accessor names of the documented paths.
        #[allow(non_snake_case)]
        pub trait Accessors {
            /// Returns the client requests are issued through.
            fn client(&self) -> &IntraClient;

            #(#methods)*
        }

        impl Accessors for IntraClient {
            fn client(&self) -> &IntraClient {
                self
            }
        }
    }
}
