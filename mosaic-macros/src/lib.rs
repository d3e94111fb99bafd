//! Procedural macros for Mosaic.
//!
//! - `#[derive(ComponentKind)]` - implements `ComponentKind` for a fieldless enum

use proc_macro::TokenStream;

mod kind;

/// Derive macro for implementing the `ComponentKind` trait.
///
/// Each variant maps to a registry type key. By default the key is the
/// variant name with its first letter lowercased (`TestWithTitleProp` becomes
/// `testWithTitleProp`). Override it with `#[component(key = "...")]`.
///
/// ```rust,ignore
/// #[derive(Clone, Copy, Debug, PartialEq, ComponentKind)]
/// enum Block {
///     Hero,
///     #[component(key = "teaser-list")]
///     TeaserList,
/// }
///
/// assert_eq!(Block::Hero.type_key(), "hero");
/// assert_eq!(Block::TeaserList.type_key(), "teaser-list");
/// ```
#[proc_macro_derive(ComponentKind, attributes(component))]
pub fn derive_component_kind(input: TokenStream) -> TokenStream {
    kind::derive_component_kind_impl(input)
}
