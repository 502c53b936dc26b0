use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::str::FromStr;

/// Type-safe integer identifier. The phantom type parameter `T` keeps ids of
/// different record types apart; on disk it is a bare JSON integer.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    pub value: u64,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: u64) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// The id that follows this one in issue order, or None once the
    /// id space is used up.
    pub fn next(self) -> Option<Self> {
        self.value.checked_add(1).map(Self::new)
    }
}

impl<T> FromStr for Id<T> {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.trim().parse()?))
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Foo;

    #[test]
    fn next_increments() {
        let id = Id::<Foo>::new(41);
        assert_eq!(id.next(), Some(Id::new(42)));
    }

    #[test]
    fn next_stops_at_max() {
        assert_eq!(Id::<Foo>::new(u64::MAX).next(), None);
    }

    #[test]
    fn ids_with_same_value_are_equal() {
        assert_eq!(Id::<Foo>::new(7), Id::<Foo>::new(7));
        assert!(Id::<Foo>::new(7) < Id::<Foo>::new(8));
    }

    #[test]
    fn parse_accepts_padded_input() {
        let parsed: Id<Foo> = " 12 ".parse().unwrap();
        assert_eq!(parsed, Id::new(12));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("twelve".parse::<Id<Foo>>().is_err());
        assert!("-3".parse::<Id<Foo>>().is_err());
    }

    #[test]
    fn serializes_as_plain_integer() {
        let id = Id::<Foo>::new(99);
        assert_eq!(serde_json::to_string(&id).unwrap(), "99");
        let back: Id<Foo> = serde_json::from_str("99").unwrap();
        assert_eq!(back, id);
    }
}
