//! Child slots and the tagging primitives
//!
//! The C-family version of this technique steals the low bit of a child
//! pointer to mean "this is a back-reference to an ancestor, not a child."
//! Here the discriminant is a typed enum variant instead of an address bit:
//! a `BackRef` can never be dereferenced as a child by accident, and no
//! alignment precondition is needed.

use super::NodeId;

/// A resolvable reference to a node, or nothing.
///
/// `None` is the canonical empty sentinel: "no child" when read out of a
/// `Slot`, "no ancestor" when stored inside a back-reference.
pub type Link = Option<NodeId>;

/// One child slot of a node.
///
/// At rest a slot is `Empty` or `Child`. During a threaded traversal, a slot
/// that was `Empty`-or-descended-through temporarily becomes `BackRef`,
/// recording the node's parent in the walk; the traversal restores it before
/// leaving the node behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// No child.
    Empty,

    /// Owns the subtree rooted at the given node.
    Child(NodeId),

    /// Transient back-reference to the node's parent in the current walk
    /// (`None` for the synthetic dummy root, which has no ancestor).
    BackRef(Link),
}

impl Slot {
    /// Mark a link as a back-reference rather than a child.
    ///
    /// `link` may be `None`: the dummy root's own back-reference is a tagged
    /// empty link.
    #[inline]
    pub fn tag(link: Link) -> Self {
        Slot::BackRef(link)
    }

    /// Strip the tag, recovering the underlying link.
    ///
    /// Defined only on tagged slots; `untag(tag(x)) == x` for every `x`
    /// including `None`.
    #[inline]
    pub fn untag(self) -> Link {
        debug_assert!(self.is_tagged(), "untag on untagged slot {:?}", self);
        match self {
            Slot::BackRef(link) => link,
            _ => None,
        }
    }

    /// Whether this slot currently holds a back-reference.
    ///
    /// False for ordinary children and for empty slots.
    #[inline]
    pub fn is_tagged(self) -> bool {
        matches!(self, Slot::BackRef(_))
    }

    /// The child this slot owns, if it is an ordinary child slot.
    #[inline]
    pub fn child(self) -> Link {
        match self {
            Slot::Child(id) => Some(id),
            _ => None,
        }
    }

    /// Re-wrap a link as an ownership slot (inverse of [`Slot::child`]).
    #[inline]
    pub fn from_link(link: Link) -> Self {
        match link {
            Some(id) => Slot::Child(id),
            None => Slot::Empty,
        }
    }
}
