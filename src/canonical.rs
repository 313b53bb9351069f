use crate::{standardize, StandardizeError};
use core::{borrow::Borrow, cmp::Ordering, fmt, hash, ops::Deref, str::FromStr};
use ref_cast::{ref_cast_custom, RefCastCustom};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A standardized URI slice.
///
/// The owned counterpart of `CanonicalStr` is [`Canonical`].
///
/// The string is a canonical form meant only for comparison: it is not
/// necessarily a valid URI and should not be dereferenced.
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct CanonicalStr {
    inner: str,
}

impl CanonicalStr {
    /// Converts a string slice to a `CanonicalStr` slice assuming it
    /// is the output of a standardization.
    #[ref_cast_custom]
    pub(crate) const fn new_validated(s: &str) -> &Self;

    /// Yields the underlying string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the length of the slice in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Checks whether the slice is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// A standardized URI, as returned by [`standardize`].
///
/// Two URIs are equivalent if and only if their standardized forms
/// compare equal.
///
/// # Examples
///
/// ```
/// use uri_equiv::{standardize, Canonical};
///
/// let a = standardize("HTTP://ABC.com/%7Esmith/home.html")?;
/// let b: Canonical = "http://abc.com:80/~smith/home.html".parse()?;
///
/// assert_eq!(a, b);
/// assert_eq!(a, "http://abc.com:80/~smith/home.html");
/// # Ok::<_, uri_equiv::StandardizeError>(())
/// ```
#[derive(Clone)]
pub struct Canonical {
    buf: String,
}

impl Canonical {
    pub(crate) fn new_validated(buf: String) -> Self {
        Self { buf }
    }

    /// Borrows the standardized URI as a `CanonicalStr` slice.
    #[inline]
    #[must_use]
    pub fn as_canonical_str(&self) -> &CanonicalStr {
        CanonicalStr::new_validated(&self.buf)
    }

    /// Consumes this `Canonical` and yields the underlying `String`.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Deref for Canonical {
    type Target = CanonicalStr;

    #[inline]
    fn deref(&self) -> &CanonicalStr {
        self.as_canonical_str()
    }
}

impl AsRef<CanonicalStr> for Canonical {
    #[inline]
    fn as_ref(&self) -> &CanonicalStr {
        self
    }
}

impl AsRef<str> for Canonical {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.buf
    }
}

impl AsRef<str> for CanonicalStr {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<CanonicalStr> for Canonical {
    #[inline]
    fn borrow(&self) -> &CanonicalStr {
        self
    }
}

impl ToOwned for CanonicalStr {
    type Owned = Canonical;

    #[inline]
    fn to_owned(&self) -> Canonical {
        Canonical::new_validated(self.inner.to_owned())
    }
}

impl From<&CanonicalStr> for Canonical {
    #[inline]
    fn from(s: &CanonicalStr) -> Self {
        s.to_owned()
    }
}

impl From<Canonical> for String {
    #[inline]
    fn from(c: Canonical) -> Self {
        c.buf
    }
}

impl FromStr for Canonical {
    type Err = StandardizeError;

    /// Standardizes a URI with the default configuration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        standardize(s)
    }
}

impl PartialEq for CanonicalStr {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl PartialEq<str> for CanonicalStr {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl PartialEq<&str> for CanonicalStr {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        &self.inner == *other
    }
}

impl Eq for CanonicalStr {}

impl hash::Hash for CanonicalStr {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(&self.inner, state);
    }
}

impl PartialOrd for CanonicalStr {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CanonicalStr {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl PartialEq for Canonical {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl PartialEq<CanonicalStr> for Canonical {
    #[inline]
    fn eq(&self, other: &CanonicalStr) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialEq<str> for Canonical {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.buf == other
    }
}

impl PartialEq<&str> for Canonical {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.buf == *other
    }
}

impl Eq for Canonical {}

impl hash::Hash for Canonical {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(self.as_canonical_str(), state);
    }
}

impl PartialOrd for Canonical {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Canonical {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.buf.cmp(&other.buf)
    }
}

impl fmt::Debug for CanonicalStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for CanonicalStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.buf, f)
    }
}

impl fmt::Display for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.buf, f)
    }
}

#[cfg(feature = "serde")]
impl Serialize for CanonicalStr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Canonical {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Deserializes a URI string and standardizes it with the default configuration.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Canonical {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        standardize(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn borrow_and_own() {
        let c = Canonical::new_validated("http://a.com:80/x".to_owned());
        let s: &CanonicalStr = c.borrow();
        assert_eq!(s, "http://a.com:80/x");
        assert_eq!(s.len(), 17);
        assert!(!s.is_empty());
        assert_eq!(s.to_owned(), c);
        assert_eq!(String::from(c.clone()), "http://a.com:80/x");
        assert_eq!(c.into_string(), "http://a.com:80/x");
    }

    #[test]
    fn hash_set_lookup_by_slice() {
        let set: HashSet<Canonical> = ["http://a.com/x", "HTTP://A.COM:80/x", "http://b.com/x"]
            .into_iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(set.len(), 2);

        let key = CanonicalStr::new_validated("http://a.com:80/x");
        assert!(set.contains(key));
    }

    #[test]
    fn fmt() {
        let c = Canonical::new_validated("http://a.com:80/x".to_owned());
        assert_eq!(c.to_string(), "http://a.com:80/x");
        assert_eq!(format!("{c:?}"), "\"http://a.com:80/x\"");
        assert_eq!(format!("{:?}", c.as_canonical_str()), "\"http://a.com:80/x\"");
    }

    #[test]
    fn from_str() {
        assert_eq!("".parse::<Canonical>(), Err(StandardizeError::EmptyInput));
    }
}
