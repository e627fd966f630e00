use std::fmt;

use url::Url;

use crate::encoding::{decode_component, encode_component};
use crate::key::QueryKey;
use crate::query_item::QueryItem;
use crate::representable::QueryRepresentable;

/// An ordered collection of URL query items with typed access.
///
/// Stores `(name, optional value)` pairs in insertion order. Reads act on
/// the *first* item with a matching name; later duplicates are inert.
/// Writes update the first match in place, so a name keeps its position
/// across set cycles. The container has value semantics: a `clone` is
/// fully independent of the original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryWrangler {
    items: Vec<QueryItem>,
}

impl QueryWrangler {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build from query items in order, e.g. pairs handed over by a URL
    /// parser. Duplicate names are accepted; accessors see the first one.
    pub fn from_items(items: impl IntoIterator<Item = QueryItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Parse from a query string (with or without leading `?`).
    ///
    /// Segments without `=` become name-only items, empty segments from
    /// runs of `&` are skipped, and names/values are percent+plus decoded.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let items = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((name, value)) => {
                    QueryItem::new(decode_component(name), decode_component(value))
                }
                None => QueryItem::name_only(decode_component(segment)),
            })
            .collect();

        Self { items }
    }

    /// The underlying items, in storage order.
    pub fn items(&self) -> &[QueryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item with the given name, if any.
    pub fn item(&self, name: &str) -> Option<&QueryItem> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Check whether any item has the given name.
    pub fn has(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name() == name)
    }

    /// Value of the first item with the given name. A name-only item and a
    /// missing item both read as `None`.
    pub fn get_raw(&self, name: &str) -> Option<&str> {
        self.item(name).and_then(QueryItem::value)
    }

    /// Set or remove the value stored for a name.
    ///
    /// With `Some`, the first matching item is replaced in place (keeping
    /// its position) and any later duplicates are dropped; a missing name
    /// is appended at the end. With `None`, every item with the name is
    /// removed; removing an absent name is a no-op.
    pub fn set_raw(&mut self, name: &str, value: Option<&str>) {
        let Some(value) = value else {
            self.items.retain(|item| item.name() != name);
            return;
        };

        let mut updated = false;
        self.items.retain_mut(|item| {
            if item.name() != name {
                return true;
            }
            if updated {
                return false;
            }
            updated = true;
            *item = QueryItem::new(name, value);
            true
        });
        if !updated {
            self.items.push(QueryItem::new(name, value));
        }
    }

    /// Typed read through `key`'s conversion.
    ///
    /// Returns `None` when the item is absent or its value fails to parse;
    /// the two cases are deliberately indistinguishable. A bool-typed key
    /// only returns `None` for a missing item, since bool parsing is total.
    pub fn get<T: QueryRepresentable>(&self, key: QueryKey<T>) -> Option<T> {
        self.get_raw(key.name()).and_then(T::from_query_value)
    }

    /// Typed read that falls back to the type's default (`""`, `0`,
    /// `false`) when [`get`](Self::get) would return `None`.
    pub fn get_or_default<T: QueryRepresentable + Default>(&self, key: QueryKey<T>) -> T {
        self.get(key).unwrap_or_default()
    }

    /// Typed write through `key`'s conversion.
    ///
    /// `set(key, None)` removes the item entirely rather than storing an
    /// empty value.
    pub fn set<T: QueryRepresentable>(&mut self, key: QueryKey<T>, value: impl Into<Option<T>>) {
        match value.into() {
            Some(value) => self.set_raw(key.name(), Some(&value.to_query_value())),
            None => self.set_raw(key.name(), None),
        }
    }

    /// Iterate over `(name, value)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.items.iter().map(|item| (item.name(), item.value()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(QueryItem::name)
    }

    pub fn values(&self) -> impl Iterator<Item = Option<&str>> {
        self.items.iter().map(QueryItem::value)
    }

    /// Serialize to a query string with leading `?`, or an empty string
    /// when there are no items. Name-only items serialize without `=`.
    pub fn serialize(&self) -> String {
        if self.items.is_empty() {
            return String::new();
        }

        let mut out = String::from("?");
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(&encode_component(item.name()));
            if let Some(value) = item.value() {
                out.push('=');
                out.push_str(&encode_component(value));
            }
        }
        out
    }
}

/// Diagnostic rendering: every item as `name: value` (or `none`) in
/// storage order. Not a round-trip format; use
/// [`serialize`](QueryWrangler::serialize) for that.
impl fmt::Display for QueryWrangler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QueryWrangler{{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", item.name(), item.value().unwrap_or("none"))?;
        }
        write!(f, "}}")
    }
}

impl From<&str> for QueryWrangler {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

impl From<String> for QueryWrangler {
    fn from(query: String) -> Self {
        Self::parse(&query)
    }
}

/// Build from a parsed URL's decoded query pairs.
impl From<&Url> for QueryWrangler {
    fn from(url: &Url) -> Self {
        Self::from_items(
            url.query_pairs()
                .map(|(name, value)| QueryItem::new(name, value)),
        )
    }
}

impl FromIterator<QueryItem> for QueryWrangler {
    fn from_iter<I: IntoIterator<Item = QueryItem>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

fn item_pair(item: &QueryItem) -> (&str, Option<&str>) {
    (item.name(), item.value())
}

impl<'a> IntoIterator for &'a QueryWrangler {
    type Item = (&'a str, Option<&'a str>);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, QueryItem>,
        fn(&'a QueryItem) -> (&'a str, Option<&'a str>),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().map(item_pair)
    }
}
