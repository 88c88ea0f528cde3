use std::fmt;

/// A key and the payload stored alongside it.
///
/// The key decides where the entry sits in the trie and in the iteration order; the payload is
/// opaque to the trie.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry<V = ()> {
    key: String,
    data: V,
}

impl<V> Entry<V> {
    pub fn new(key: impl Into<String>, data: V) -> Self {
        Self {
            key: key.into(),
            data,
        }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn data(&self) -> &V {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut V {
        &mut self.data
    }

    pub fn into_parts(self) -> (String, V) {
        (self.key, self.data)
    }

    pub(crate) fn key_mut(&mut self) -> &mut String {
        &mut self.key
    }
}

impl<V: Default> Entry<V> {
    /// An entry with a default payload.
    pub fn from_key(key: impl Into<String>) -> Self {
        Self::new(key, V::default())
    }
}

impl<V> fmt::Display for Entry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl<K: Into<String>, V> From<(K, V)> for Entry<V> {
    fn from((key, data): (K, V)) -> Self {
        Self::new(key, data)
    }
}
