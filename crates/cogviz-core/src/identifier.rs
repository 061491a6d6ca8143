//! Node identifiers backed by a global string interner.
//!
//! Cognitive objects carry string ids chosen by the upstream producer. The
//! layout engine keys every piece of per-node state (positions, pins, levels,
//! link endpoints) by an [`Id`], which is a `Copy` handle to the interned
//! string.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner shared by all identifiers.
///
/// # Thread Safety
///
/// Access goes through a `Mutex`, so identifiers can be created from any thread
/// even though the layout engine itself is single-threaded.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Interned identifier of a node in the cognitive graph.
///
/// # Examples
///
/// ```
/// use cogviz_core::identifier::Id;
///
/// let a = Id::new("obj-1");
/// let b: Id = "obj-1".into();
///
/// assert_eq!(a, b);
/// assert_eq!(a, "obj-1");
/// assert_eq!(a.to_string(), "obj-1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Interns `name` and returns its identifier.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        match interner.resolve(self.0) {
            Some(value) => f.write_str(value),
            None => write!(f, "<unresolved:{:?}>", self.0),
        }
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<&String> for Id {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "obj-1"`
    fn eq(&self, other: &str) -> bool {
        interner().resolve(self.0) == Some(other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
