//! Closed enumerations of component kinds.

/// A closed set of component type keys.
///
/// Implement this (or derive it with `#[derive(ComponentKind)]` from
/// `mosaic-macros`) on a fieldless enum to check call sites against the known
/// kinds at compile time, and to verify at build time that every kind has a
/// registration.
///
/// ```rust
/// use mosaic_core::ComponentKind;
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Block {
///     Hero,
///     Teaser,
/// }
///
/// impl ComponentKind for Block {
///     const ALL: &'static [Self] = &[Block::Hero, Block::Teaser];
///
///     fn type_key(&self) -> &'static str {
///         match self {
///             Block::Hero => "hero",
///             Block::Teaser => "teaser",
///         }
///     }
/// }
///
/// assert_eq!(Block::from_type_key("teaser"), Some(Block::Teaser));
/// assert_eq!(Block::from_type_key("unknown"), None);
/// ```
pub trait ComponentKind: Copy + Send + Sync + 'static {
    /// Every kind, in declaration order.
    const ALL: &'static [Self];

    /// The registry type key of this kind.
    fn type_key(&self) -> &'static str;

    /// Look up a kind by type key.
    fn from_type_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.type_key() == key)
    }
}
