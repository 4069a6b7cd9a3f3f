use std::fmt::{Display, Formatter};

/// A handle to a node in the [`Bdd`][crate::bdd::Bdd] store.
///
/// A handle is just the node's position in the store. It is never reused and
/// never changes meaning for the lifetime of the manager that issued it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Ref(u32);

impl Ref {
    /// The constant `false` terminal.
    pub const FALSE: Self = Self(0);
    /// The constant `true` terminal.
    pub const TRUE: Self = Self(1);

    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Return the index of the referenced node.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the raw underlying value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn is_terminal(self) -> bool {
        self.0 <= 1
    }
}

impl From<Ref> for u32 {
    fn from(r: Ref) -> Self {
        r.0
    }
}

impl Display for Ref {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}
