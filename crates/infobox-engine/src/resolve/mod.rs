//! # Link Resolution
//!
//! A [`LinkResolver`] maps a display name (a note title, an image name) to a
//! canonical reference. The parser calls it for thumbnail URLs; the renderer
//! calls it for `[[link]]` targets. Resolution never fails: a resolver with
//! no mapping echoes its input.
//!
//! Implementations:
//! - [`IdentityResolver`]: echoes everything
//! - [`MapResolver`]: exact lookup in a table
//! - any `Fn(&str) -> String`
//! - [`crate::io::VaultResolver`]: files under a notes folder

use std::collections::HashMap;

pub trait LinkResolver {
    /// Best-effort canonical reference for `reference`; echoes it on a miss.
    fn resolve(&self, reference: &str) -> String;

    /// Human-readable name for an already resolved reference, used as the
    /// label of links that don't carry one.
    fn display_name(&self, resolved: &str) -> String {
        default_display_name(resolved)
    }
}

/// Last `/` segment of `resolved`, without a trailing `.md`.
pub fn default_display_name(resolved: &str) -> String {
    let name = resolved.rsplit('/').next().unwrap_or(resolved);
    name.strip_suffix(".md").unwrap_or(name).to_string()
}

/// Resolver that returns every reference unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl LinkResolver for IdentityResolver {
    fn resolve(&self, reference: &str) -> String {
        reference.to_string()
    }
}

/// Resolver backed by an exact-match lookup table.
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    links: HashMap<String, String>,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, name: K, target: V) {
        self.links.insert(name.into(), target.into());
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapResolver {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut resolver = Self::new();
        for (k, v) in iter {
            resolver.insert(k, v);
        }
        resolver
    }
}

impl LinkResolver for MapResolver {
    fn resolve(&self, reference: &str) -> String {
        self.links
            .get(reference)
            .cloned()
            .unwrap_or_else(|| reference.to_string())
    }
}

impl<F> LinkResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, reference: &str) -> String {
        self(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_echoes() {
        assert_eq!(IdentityResolver.resolve("John Doe"), "John Doe");
        assert_eq!(IdentityResolver.display_name("John Doe"), "John Doe");
    }

    #[test]
    fn map_resolver_falls_back_to_input() {
        let r: MapResolver = [("John Doe", "People/John Doe.md")].into_iter().collect();
        assert_eq!(r.len(), 1);
        assert_eq!(r.resolve("John Doe"), "People/John Doe.md");
        assert_eq!(r.resolve("john doe"), "john doe");
    }

    #[test]
    fn closures_are_resolvers() {
        let upper = |s: &str| s.to_uppercase();
        assert_eq!(upper.resolve("abc"), "ABC");
    }

    #[test]
    fn display_name_strips_folders_and_md() {
        assert_eq!(default_display_name("People/John Doe.md"), "John Doe");
        assert_eq!(default_display_name("img/cat.png"), "cat.png");
        assert_eq!(default_display_name("plain"), "plain");
        assert_eq!(default_display_name(""), "");
    }
}
