//! Style registry: deduplication and name resolution
//!
//! The registry is owned by a single workbook build. It is never shared as
//! process-wide state, so two workbooks built in the same process cannot see
//! each other's style identifiers.

use super::Style;
use crate::error::{Error, Result};
use ahash::AHashMap;
use serde::Serialize;

/// Name under which the built-in default style is always reachable
pub const DEFAULT_STYLE_NAME: &str = "DEFAULT_STYLE";

/// Opaque handle for a resolved style
///
/// Ids are indices into the owning registry's style table; id 0 is always
/// the built-in default style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct StyleId(u32);

impl StyleId {
    /// The built-in default style
    pub const DEFAULT: StyleId = StyleId(0);

    /// Index into the serialized style table
    pub fn index(self) -> u32 {
        self.0
    }
}

/// A reference to a style, resolved through [`StyleRegistry::resolve`]
///
/// Callers may refer to a style by a registered name, by an inline
/// definition (registered on first use, deduplicated), or by an
/// already-resolved id.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleRef {
    /// A name previously bound via [`StyleRegistry::register_named`]
    Named(String),
    /// An inline definition, registered at the point of use
    Inline(Style),
    /// An id handed out earlier by the same registry
    Resolved(StyleId),
}

impl From<&str> for StyleRef {
    fn from(name: &str) -> Self {
        StyleRef::Named(name.to_string())
    }
}

impl From<String> for StyleRef {
    fn from(name: String) -> Self {
        StyleRef::Named(name)
    }
}

impl From<Style> for StyleRef {
    fn from(style: Style) -> Self {
        StyleRef::Inline(style)
    }
}

impl From<StyleId> for StyleRef {
    fn from(id: StyleId) -> Self {
        StyleRef::Resolved(id)
    }
}

/// Per-workbook style table
///
/// Structurally identical definitions resolve to the same [`StyleId`], so a
/// serialized document never duplicates style payloads.
#[derive(Debug)]
pub struct StyleRegistry {
    /// All unique styles (index 0 is the default)
    styles: Vec<Style>,
    /// Structural-hash lookup for deduplication
    index_map: AHashMap<StyleKey, u32>,
    /// Stable name → id bindings
    names: AHashMap<String, StyleId>,
}

/// Key for style lookup (hash-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct StyleKey(u64);

impl StyleKey {
    fn from_style(style: &Style) -> Self {
        use std::hash::{Hash, Hasher};
        let mut hasher = ahash::AHasher::default();
        style.hash(&mut hasher);
        StyleKey(hasher.finish())
    }
}

impl StyleRegistry {
    /// Create a registry with the default style at id 0
    pub fn new() -> Self {
        let mut registry = Self {
            styles: Vec::with_capacity(16),
            index_map: AHashMap::with_capacity(16),
            names: AHashMap::with_capacity(16),
        };

        let default = Style::default();
        registry.index_map.insert(StyleKey::from_style(&default), 0);
        registry.styles.push(default);
        registry
            .names
            .insert(DEFAULT_STYLE_NAME.to_string(), StyleId::DEFAULT);

        registry
    }

    /// Register a style, returning its id
    ///
    /// Idempotent: re-registering a structurally equal definition returns
    /// the same id.
    pub fn register(&mut self, style: Style) -> StyleId {
        let key = StyleKey::from_style(&style);

        if let Some(&idx) = self.index_map.get(&key) {
            // Hash collision check
            if self.styles[idx as usize] == style {
                return StyleId(idx);
            }
        }

        let idx = self.styles.len() as u32;
        self.index_map.insert(key, idx);
        self.styles.push(style);
        StyleId(idx)
    }

    /// Register a style under a stable name
    ///
    /// Re-binding an existing name moves it to the new definition (last
    /// write wins). The reserved default name cannot be rebound.
    pub fn register_named<S: Into<String>>(&mut self, name: S, style: Style) -> Result<StyleId> {
        let name = name.into();
        if name == DEFAULT_STYLE_NAME {
            return Err(Error::other(format!(
                "style name '{}' is reserved",
                DEFAULT_STYLE_NAME
            )));
        }
        let id = self.register(style);
        self.names.insert(name, id);
        Ok(id)
    }

    /// Resolve a style reference to an id
    ///
    /// Fails [`Error::UnknownStyle`] immediately for an unbound name or an
    /// id this registry never handed out; inline definitions are registered
    /// (deduplication applies).
    pub fn resolve(&mut self, style: &StyleRef) -> Result<StyleId> {
        match style {
            StyleRef::Named(name) => self
                .names
                .get(name)
                .copied()
                .ok_or_else(|| Error::UnknownStyle(name.clone())),
            StyleRef::Inline(style) => Ok(self.register(style.clone())),
            StyleRef::Resolved(id) => {
                if (id.index() as usize) < self.styles.len() {
                    Ok(*id)
                } else {
                    Err(Error::UnknownStyle(format!("id #{}", id.index())))
                }
            }
        }
    }

    /// Get a style by id
    pub fn get(&self, id: StyleId) -> Option<&Style> {
        self.styles.get(id.index() as usize)
    }

    /// Look up the id bound to a name, if any
    pub fn lookup(&self, name: &str) -> Option<StyleId> {
        self.names.get(name).copied()
    }

    /// Number of distinct styles (including the default)
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if only the default style is present
    pub fn is_empty(&self) -> bool {
        self.styles.len() <= 1
    }

    /// Iterate over all styles in id order
    pub fn styles(&self) -> impl Iterator<Item = (StyleId, &Style)> {
        self.styles
            .iter()
            .enumerate()
            .map(|(i, s)| (StyleId(i as u32), s))
    }

    /// Clear all non-built-in entries and name bindings
    ///
    /// The registry is usable for a fresh build afterwards; the default
    /// style and its reserved name survive.
    pub fn reset(&mut self) {
        self.styles.truncate(1);
        self.index_map.clear();
        self.index_map
            .insert(StyleKey::from_style(&self.styles[0]), 0);
        self.names.clear();
        self.names
            .insert(DEFAULT_STYLE_NAME.to_string(), StyleId::DEFAULT);
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_style() {
        let registry = StyleRegistry::new();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(StyleId::DEFAULT), Some(&Style::default()));
        assert_eq!(registry.lookup(DEFAULT_STYLE_NAME), Some(StyleId::DEFAULT));
    }

    #[test]
    fn test_deduplication() {
        let mut registry = StyleRegistry::new();

        let id1 = registry.register(Style::new().bold(true));
        let id2 = registry.register(Style::new().bold(true));
        let id3 = registry.register(Style::new().italic(true));

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(registry.len(), 3); // default + 2 custom
    }

    #[test]
    fn test_register_default_is_id_zero() {
        let mut registry = StyleRegistry::new();
        assert_eq!(registry.register(Style::default()), StyleId::DEFAULT);
    }

    #[test]
    fn test_named_resolution() {
        let mut registry = StyleRegistry::new();
        let id = registry
            .register_named("header", Style::new().bold(true))
            .unwrap();

        assert_eq!(registry.resolve(&StyleRef::from("header")).unwrap(), id);
        assert!(matches!(
            registry.resolve(&StyleRef::from("not_found_style")),
            Err(Error::UnknownStyle(_))
        ));
    }

    #[test]
    fn test_named_rebinding_last_write_wins() {
        let mut registry = StyleRegistry::new();
        let first = registry
            .register_named("accent", Style::new().bold(true))
            .unwrap();
        let second = registry
            .register_named("accent", Style::new().italic(true))
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(registry.lookup("accent"), Some(second));
    }

    #[test]
    fn test_reserved_name() {
        let mut registry = StyleRegistry::new();
        assert!(registry
            .register_named(DEFAULT_STYLE_NAME, Style::new().bold(true))
            .is_err());
    }

    #[test]
    fn test_inline_and_resolved_refs() {
        let mut registry = StyleRegistry::new();
        let style = Style::new().fill_color(Color::RED);

        let inline_id = registry.resolve(&StyleRef::from(style.clone())).unwrap();
        // Same structural definition resolves to the same id
        assert_eq!(registry.resolve(&StyleRef::from(style)).unwrap(), inline_id);
        // A resolved id round-trips
        assert_eq!(
            registry.resolve(&StyleRef::from(inline_id)).unwrap(),
            inline_id
        );
    }

    #[test]
    fn test_resolved_id_from_foreign_registry() {
        let mut big = StyleRegistry::new();
        let foreign = big.register(Style::new().bold(true));

        let mut fresh = StyleRegistry::new();
        assert!(matches!(
            fresh.resolve(&StyleRef::from(foreign)),
            Err(Error::UnknownStyle(_))
        ));
    }

    #[test]
    fn test_reset_isolates_builds() {
        let mut registry = StyleRegistry::new();
        registry
            .register_named("header", Style::new().bold(true))
            .unwrap();
        assert_eq!(registry.len(), 2);

        registry.reset();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("header"), None);
        assert_eq!(registry.lookup(DEFAULT_STYLE_NAME), Some(StyleId::DEFAULT));

        // Ids restart cleanly for the next build
        let id = registry.register(Style::new().italic(true));
        assert_eq!(id.index(), 1);
    }
}
