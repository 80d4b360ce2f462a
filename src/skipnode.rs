//! Nodes, the arena that stores them, and the base-chain iterators.

use std::{fmt, ops};

// ////////////////////////////////////////////////////////////////////////////
// Node model
// ////////////////////////////////////////////////////////////////////////////

/// Handle to a node within its [`Arena`].
///
/// Handles are plain indices. The arena never moves a live node, so a handle
/// stays valid until the node it names is freed; lane slots and base-chain
/// links all refer to nodes through handles rather than forming a second
/// ownership graph over them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct NodeId(usize);

/// A single express-lane slot on a node or on the head sentinel.
///
/// A slot starts out *pending* on an ordinary node and becomes *established*
/// when the node is promoted into the lane. The head's slots are established
/// from the start: this asymmetry lets any node be the first to populate a
/// lane by splicing directly off the head, while an ordinary node cannot
/// serve as a lane splice point until something has promoted it there.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Shortcut {
    /// Whether the owner is a member of this lane.
    pub established: bool,
    /// The next lane member, if any.
    pub target: Option<NodeId>,
}

impl Shortcut {
    /// The initial state of every slot on a freshly created node.
    pub const PENDING: Self = Shortcut {
        established: false,
        target: None,
    };

    /// The permanent initial state of every slot on the head sentinel.
    pub const ESTABLISHED: Self = Shortcut {
        established: true,
        target: None,
    };
}

/// A node of the base chain.
///
/// The value is immutable once created. `next` is the level-0 link that
/// every node carries; `shortcuts` holds the node's lane slots, sized once
/// at creation to the lane capacity of the owning list and never resized.
#[derive(Clone, Debug)]
pub(crate) struct SkipNode<T> {
    pub value: T,
    pub next: Option<NodeId>,
    pub shortcuts: Vec<Shortcut>,
}

impl<T> SkipNode<T> {
    /// Create a new node with `lanes` pending lane slots and no successor.
    pub fn new(value: T, lanes: usize) -> Self {
        SkipNode {
            value,
            next: None,
            shortcuts: vec![Shortcut::PENDING; lanes],
        }
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Arena
// ////////////////////////////////////////////////////////////////////////////

/// Slab-style storage for the nodes of a list.
///
/// Freed slots are kept on a free list and reused by later insertions, so a
/// long-lived list does not grow beyond its high-water mark.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<SkipNode<T>>>,
    free: Vec<usize>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Store a node, returning its handle.
    pub fn insert(&mut self, node: SkipNode<T>) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Free a node, reclaiming its slot and returning the node.
    ///
    /// The caller must have unlinked the node from the base chain and from
    /// every lane beforehand; any handle to it becomes stale.
    pub fn remove(&mut self, id: NodeId) -> SkipNode<T> {
        let node = self.slots[id.0].take().expect("stale node handle");
        self.free.push(id.0);
        node
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<T> ops::Index<NodeId> for Arena<T> {
    type Output = SkipNode<T>;

    fn index(&self, id: NodeId) -> &SkipNode<T> {
        self.slots[id.0].as_ref().expect("stale node handle")
    }
}

impl<T> ops::IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut SkipNode<T> {
        self.slots[id.0].as_mut().expect("stale node handle")
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Iterators
// ////////////////////////////////////////////////////////////////////////////
//
// Iteration always follows the base chain, which holds every element in
// sorted order; the lanes are irrelevant here.

/// Iterator over the elements of a list, in sorted order.
pub struct Iter<'a, T> {
    pub(crate) arena: &'a Arena<T>,
    pub(crate) next: Option<NodeId>,
    pub(crate) size: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = &self.arena[id];
        self.next = node.next;
        self.size -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size, Some(self.size))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("size", &self.size).finish()
    }
}

/// Owning iterator over the elements of a list, in sorted order.
pub struct IntoIter<T> {
    pub(crate) arena: Arena<T>,
    pub(crate) next: Option<NodeId>,
    pub(crate) size: usize,
}

impl<T> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("size", &self.size).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let id = self.next?;
        let node = self.arena.remove(id);
        self.next = node.next;
        self.size -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size, Some(self.size))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
