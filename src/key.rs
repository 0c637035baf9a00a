//! Defines traits and structs for extracting ordering keys from sequence items.
//!
//! Sort, search and map operations compare keys rather than whole items. A bare
//! sequence uses the item itself as key (`Identity`); a map-like sequence of
//! pairs uses the first component (`First`).

/// A trait for types that borrow a key of type `Self::Key` out of an item `T`.
pub trait KeyExtractor<T> {
    /// The key type; may be unsized (e.g. `str` or `[u8]`).
    type Key: ?Sized;

    /// Returns the key of `item`.
    fn key<'a>(&self, item: &'a T) -> &'a Self::Key;
}

/// Uses the item itself as its key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<T> KeyExtractor<T> for Identity {
    type Key = T;

    fn key<'a>(&self, item: &'a T) -> &'a T {
        item
    }
}

/// Uses the first component of a pair as its key.
#[derive(Debug, Clone, Copy, Default)]
pub struct First;

impl<K, V> KeyExtractor<(K, V)> for First {
    type Key = K;

    fn key<'a>(&self, item: &'a (K, V)) -> &'a K {
        &item.0
    }
}

/// Uses the second component of a pair as its key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Second;

impl<K, V> KeyExtractor<(K, V)> for Second {
    type Key = V;

    fn key<'a>(&self, item: &'a (K, V)) -> &'a V {
        &item.1
    }
}

/// Uses the string contents of an `AsRef<str>` item as its key.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsStr;

impl<T: AsRef<str>> KeyExtractor<T> for AsStr {
    type Key = str;

    fn key<'a>(&self, item: &'a T) -> &'a str {
        item.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let item = 42u32;
        assert_eq!(Identity.key(&item), &42);
    }

    #[test]
    fn test_first_and_second() {
        let entry = (3usize, "three");
        assert_eq!(First.key(&entry), &3);
        assert_eq!(Second.key(&entry), &"three");
    }

    #[test]
    fn test_as_str_string() {
        let item = "hello".to_string();
        assert_eq!(AsStr.key(&item), "hello");
    }

    // Custom type that implements AsRef<str>
    #[derive(Clone, Debug, Hash, Eq, PartialEq)]
    struct MyCustomStrKey(String);
    impl AsRef<str> for MyCustomStrKey {
        fn as_ref(&self) -> &str {
            self.0.as_ref()
        }
    }

    #[test]
    fn test_as_str_custom() {
        let item = MyCustomStrKey("custom_str".to_string());
        assert_eq!(AsStr.key(&item), "custom_str");
    }
}
