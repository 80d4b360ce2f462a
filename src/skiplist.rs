//! The ordered skip list itself.

use std::{cmp, cmp::Ordering, fmt, hash, hash::Hash, iter};

use crate::{
    level_generator::{Geometric, LevelGenerator},
    skipnode::{Arena, IntoIter, Iter, NodeId, Shortcut, SkipNode},
};

// ////////////////////////////////////////////////////////////////////////////
// SkipList
// ////////////////////////////////////////////////////////////////////////////

/// A splice point at some lane: the head sentinel or an interior node.
///
/// The head logically precedes every element, so it is a valid predecessor
/// at every lane as well as on the base chain.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Pred {
    Head,
    Node(NodeId),
}

/// An ordered skip list.
///
/// Elements are kept sorted at all times on a base chain, with a configured
/// number of express lanes above it providing the expected `O(log(n))`
/// search, insertion and removal. The list is a multiset: inserting a value
/// already present keeps both copies, adjacent on the base chain.
///
/// The list relies on `T`'s [`Ord`] implementation being a total order that
/// never changes while the element is stored. Interior mutability that
/// alters the ordering of stored elements will corrupt the structure.
///
/// # Examples
///
/// ```
/// use lanelist::SkipList;
///
/// let mut list = SkipList::new(5);
/// list.insert(3);
/// list.insert(1);
/// list.insert(2);
///
/// assert!(list.contains(&2));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub struct SkipList<T> {
    /// Node storage; the base chain and the lanes index into it.
    arena: Arena<T>,
    /// First node of the base chain. The list is empty iff this is `None`.
    first: Option<NodeId>,
    /// The head sentinel's lane slots, all permanently established.
    head_shortcuts: Vec<Shortcut>,
    len: usize,
    level_generator: Box<dyn LevelGenerator>,
}

// ///////////////////////////////////////////////
// Inherent methods
// ///////////////////////////////////////////////

impl<T> SkipList<T> {
    /// The height used by [`SkipList::default`], giving 14 express lanes.
    pub const DEFAULT_MAX_HEIGHT: usize = 16;

    /// Create a new, empty skip list.
    ///
    /// `max_height` bounds the total height of the structure; it yields
    /// `max_height - 2` express lanes above the base chain. Heights below 3
    /// leave no lanes at all, degrading the list to a plain sorted linked
    /// list. That is legal, not an error.
    ///
    /// Lane promotion uses a fair coin ([`Geometric`] with `p = 0.5`).
    ///
    /// # Examples
    ///
    /// ```
    /// use lanelist::SkipList;
    ///
    /// let list: SkipList<i64> = SkipList::new(5);
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new(max_height: usize) -> Self {
        Self::with_level_generator(max_height, Geometric::default())
    }

    /// Create a new, empty skip list drawing promotion counts from the
    /// given generator instead of the default fair coin.
    ///
    /// Passing a seeded or scripted [`LevelGenerator`] makes the lane
    /// structure fully deterministic, which tests rely on.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanelist::{Geometric, SkipList};
    ///
    /// let generator = Geometric::new(0.25).expect("valid probability");
    /// let mut list: SkipList<i64> = SkipList::with_level_generator(5, generator);
    /// list.insert(1);
    /// assert!(!list.is_empty());
    /// ```
    #[must_use]
    pub fn with_level_generator<G>(max_height: usize, level_generator: G) -> Self
    where
        G: LevelGenerator + 'static,
    {
        let lanes = max_height.saturating_sub(2);
        SkipList {
            arena: Arena::new(),
            first: None,
            head_shortcuts: vec![Shortcut::ESTABLISHED; lanes],
            len: 0,
            level_generator: Box::new(level_generator),
        }
    }

    /// Returns the number of elements in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanelist::SkipList;
    ///
    /// let mut list = SkipList::new(5);
    /// list.extend(0..10);
    /// assert_eq!(list.len(), 10);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanelist::SkipList;
    ///
    /// let mut list = SkipList::new(5);
    /// assert!(list.is_empty());
    ///
    /// list.insert(1);
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Clears the list, removing all elements.
    ///
    /// The height configured at construction is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanelist::SkipList;
    ///
    /// let mut list = SkipList::new(5);
    /// list.extend(0..10);
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.arena.clear();
        self.first = None;
        for slot in &mut self.head_shortcuts {
            *slot = Shortcut::ESTABLISHED;
        }
        self.len = 0;
    }

    /// Creates an iterator over the elements of the list, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanelist::SkipList;
    ///
    /// let mut list = SkipList::new(5);
    /// list.extend(0..10);
    /// for value in list.iter() {
    ///     println!("Value: {value}");
    /// }
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            next: self.first,
            size: self.len,
        }
    }

    /// The number of express lanes above the base chain.
    fn lanes(&self) -> usize {
        self.head_shortcuts.len()
    }

    /// The lane slot of the given splice point.
    fn slot(&self, pred: Pred, lane: usize) -> Shortcut {
        match pred {
            Pred::Head => self.head_shortcuts[lane],
            Pred::Node(id) => self.arena[id].shortcuts[lane],
        }
    }

    /// Mutable access to the lane slot of the given splice point.
    fn slot_mut(&mut self, pred: Pred, lane: usize) -> &mut Shortcut {
        match pred {
            Pred::Head => &mut self.head_shortcuts[lane],
            Pred::Node(id) => &mut self.arena[id].shortcuts[lane],
        }
    }

    /// The base-chain successor of the given splice point.
    fn next_of(&self, pred: Pred) -> Option<NodeId> {
        match pred {
            Pred::Head => self.first,
            Pred::Node(id) => self.arena[id].next,
        }
    }

    /// Rewrite the base-chain successor of the given splice point.
    fn set_next(&mut self, pred: Pred, next: Option<NodeId>) {
        match pred {
            Pred::Head => self.first = next,
            Pred::Node(id) => self.arena[id].next = next,
        }
    }
}

impl<T> SkipList<T>
where
    T: Ord,
{
    /// Insert the value into the list.
    ///
    /// The new node always joins the base chain, immediately before any
    /// equal values already present, and is promoted into a randomized
    /// number of express lanes. Promotions beyond the lane capacity are
    /// silently dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanelist::SkipList;
    ///
    /// let mut list = SkipList::new(5);
    ///
    /// list.insert(0);
    /// list.insert(5);
    /// assert_eq!(list.len(), 2);
    /// assert!(!list.is_empty());
    /// ```
    pub fn insert(&mut self, value: T) {
        let lanes = self.lanes();
        let (updates, pred) = self.search(&value);

        let mut node = SkipNode::new(value, lanes);
        node.next = self.next_of(pred);
        let id = self.arena.insert(node);
        self.set_next(pred, Some(id));
        self.len += 1;

        // Promote bottom-up through the recorded splice points. Each splice
        // point is already on its lane: the head permanently, an interior
        // node because towers are contiguous and the search only ever
        // reaches a node through a lane it is a member of.
        let promotions = self.level_generator.extra_levels().min(lanes);
        for (lane, update) in updates.into_iter().enumerate().take(promotions) {
            let slot = self.slot(update, lane);
            debug_assert!(slot.established, "splice point must be on the lane");
            self.arena[id].shortcuts[lane] = Shortcut {
                established: true,
                target: slot.target,
            };
            *self.slot_mut(update, lane) = Shortcut {
                established: true,
                target: Some(id),
            };
        }
    }

    /// Returns `true` if the value is contained in the list.
    ///
    /// This runs the same lane descent as insertion and removal, except that
    /// an exact match anywhere along the way returns early.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanelist::SkipList;
    ///
    /// let mut list = SkipList::new(5);
    /// list.extend(0..10);
    /// assert!(list.contains(&4));
    /// assert!(!list.contains(&15));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        let mut current = Pred::Head;
        for lane in (0..self.lanes()).rev() {
            loop {
                let slot = self.slot(current, lane);
                match slot.target {
                    Some(target) if slot.established => {
                        match self.arena[target].value.cmp(value) {
                            Ordering::Less => current = Pred::Node(target),
                            Ordering::Equal => return true,
                            Ordering::Greater => break,
                        }
                    }
                    _ => break,
                }
            }
        }

        let mut next = self.next_of(current);
        while let Some(id) = next {
            match self.arena[id].value.cmp(value) {
                Ordering::Less => next = self.arena[id].next,
                Ordering::Equal => return true,
                Ordering::Greater => return false,
            }
        }
        false
    }

    /// Removes one element equal to the given value and returns it, or
    /// `None` if no such element exists.
    ///
    /// At most one element is removed per call: the first equal element in
    /// sorted order. Removing from an empty list, or removing a value that
    /// was never inserted, is a silent no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanelist::SkipList;
    ///
    /// let mut list = SkipList::new(5);
    /// list.extend(0..10);
    /// assert_eq!(list.remove(&4), Some(4));
    /// assert_eq!(list.remove(&4), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let (updates, pred) = self.search(value);
        let victim = self.next_of(pred)?;
        if self.arena[victim].value != *value {
            return None;
        }

        // Unlink lane by lane; each lane is handled independently, and lanes
        // the victim never joined are left untouched.
        for (lane, update) in updates.into_iter().enumerate() {
            let slot = self.arena[victim].shortcuts[lane];
            if !slot.established {
                continue;
            }
            debug_assert_eq!(
                self.slot(update, lane).target,
                Some(victim),
                "lane member must be the splice point's target"
            );
            self.slot_mut(update, lane).target = slot.target;
        }

        let next = self.arena[victim].next;
        self.set_next(pred, next);
        self.len -= 1;
        Some(self.arena.remove(victim).value)
    }

    /// Walk the lanes from the top down, advancing through established slots
    /// whose target is strictly less than `value` and recording at every
    /// lane the last splice point visited, then walk the base chain the same
    /// way.
    ///
    /// Returns the per-lane splice points together with the base-chain
    /// predecessor of the first element `>= value` (the head when the list
    /// is empty or `value` precedes everything).
    fn search(&self, value: &T) -> (Vec<Pred>, Pred) {
        let mut updates = vec![Pred::Head; self.lanes()];
        let mut current = Pred::Head;

        for lane in (0..self.lanes()).rev() {
            loop {
                let slot = self.slot(current, lane);
                match slot.target {
                    Some(target) if slot.established && self.arena[target].value < *value => {
                        current = Pred::Node(target);
                    }
                    _ => break,
                }
            }
            updates[lane] = current;
        }

        loop {
            match self.next_of(current) {
                Some(next) if self.arena[next].value < *value => current = Pred::Node(next),
                _ => break,
            }
        }
        (updates, current)
    }

    /// Checks the integrity of the list.
    #[cfg(test)]
    fn check(&self) {
        // The base chain is sorted, towers are contiguous, and `len` agrees.
        let mut count = 0;
        let mut prev: Option<NodeId> = None;
        let mut next = self.first;
        while let Some(id) = next {
            if let Some(prev) = prev {
                assert!(
                    self.arena[prev].value <= self.arena[id].value,
                    "base chain out of order"
                );
            }
            let node = &self.arena[id];
            assert_eq!(node.shortcuts.len(), self.lanes(), "slot array resized");
            for lane in 1..node.shortcuts.len() {
                if node.shortcuts[lane].established {
                    assert!(node.shortcuts[lane - 1].established, "hole in tower");
                }
            }
            count += 1;
            prev = Some(id);
            next = node.next;
        }
        assert_eq!(count, self.len, "len out of sync with the base chain");

        // Every lane is exactly the subsequence of base-chain nodes
        // established at it, in base-chain order.
        for lane in 0..self.lanes() {
            let mut expected = Vec::new();
            let mut next = self.first;
            while let Some(id) = next {
                if self.arena[id].shortcuts[lane].established {
                    expected.push(id);
                }
                next = self.arena[id].next;
            }

            assert!(
                self.head_shortcuts[lane].established,
                "head slot lost its established state"
            );
            let mut walked = Vec::new();
            let mut slot = self.head_shortcuts[lane];
            while let Some(id) = slot.target {
                walked.push(id);
                assert!(walked.len() <= self.len, "lane {lane} cycles");
                slot = self.arena[id].shortcuts[lane];
            }
            assert_eq!(walked, expected, "lane {lane} skips or repeats a member");
        }
    }
}

// ///////////////////////////////////////////////
// Diagnostic renderer
// ///////////////////////////////////////////////

impl<T> SkipList<T>
where
    T: fmt::Display,
{
    /// Render a human-readable dump of the internal structure.
    ///
    /// The first two lines show the head: its base-chain target and one
    /// column per lane slot (target value or `null`, with `X` marking an
    /// established slot). Each element then gets a block of its own: the
    /// value, a row with the state of each of its lane slots (`.` for a
    /// pending slot), and a `|` connector.
    ///
    /// The output reflects the current state only; the exact layout is not
    /// part of the list's contract.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanelist::SkipList;
    ///
    /// let mut list = SkipList::new(5);
    /// list.insert(2);
    /// println!("{}", list.to_display_string());
    /// ```
    #[must_use]
    pub fn to_display_string(&self) -> String {
        let mut out = String::from("REF\n");
        match self.first {
            Some(id) => out.push_str(&format!("< {} >", self.arena[id].value)),
            None => out.push_str("< null >"),
        }
        out.push('|');
        for slot in &self.head_shortcuts {
            out.push_str(&format!(" {} |", self.slot_display(*slot)));
        }
        out.push_str("\n|\n");

        let mut next = self.first;
        while let Some(id) = next {
            let node = &self.arena[id];
            out.push_str(&format!("< {} >\n", node.value));
            out.push('|');
            for slot in &node.shortcuts {
                out.push_str(&format!(" {} |", self.slot_display(*slot)));
            }
            out.push_str("\n|\n");
            next = node.next;
        }
        out
    }

    /// One rendered slot: target value and establishment marker.
    fn slot_display(&self, slot: Shortcut) -> String {
        match (slot.established, slot.target) {
            (true, Some(id)) => format!("{} X", self.arena[id].value),
            (true, None) => String::from("null X"),
            (false, _) => String::from("."),
        }
    }
}

// ///////////////////////////////////////////////
// Trait implementation
// ///////////////////////////////////////////////

impl<T> Default for SkipList<T> {
    /// An empty list with [`SkipList::DEFAULT_MAX_HEIGHT`] total height.
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_HEIGHT)
    }
}

/// This implementation of `PartialEq` only checks that the *elements* are
/// equal, in order; it does not compare heights or lane structure.
impl<A, B> cmp::PartialEq<SkipList<B>> for SkipList<A>
where
    A: cmp::PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &SkipList<B>) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> cmp::Eq for SkipList<T> where T: cmp::Eq {}

impl<A, B> cmp::PartialOrd<SkipList<B>> for SkipList<A>
where
    A: cmp::PartialOrd<B>,
{
    #[inline]
    fn partial_cmp(&self, other: &SkipList<B>) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T> Ord for SkipList<T>
where
    T: cmp::Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Ord> Extend<T> for SkipList<T> {
    #[inline]
    fn extend<I: iter::IntoIterator<Item = T>>(&mut self, iterable: I) {
        for element in iterable {
            self.insert(element);
        }
    }
}

impl<T> fmt::Debug for SkipList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for SkipList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        write!(f, "]")
    }
}

impl<T> iter::IntoIterator for SkipList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            next: self.first,
            size: self.len,
            arena: self.arena,
        }
    }
}

impl<'a, T> iter::IntoIterator for &'a SkipList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> iter::FromIterator<T> for SkipList<T>
where
    T: Ord,
{
    #[inline]
    fn from_iter<I>(iter: I) -> Self
    where
        I: iter::IntoIterator<Item = T>,
    {
        let mut list = SkipList::default();
        list.extend(iter);
        list
    }
}

impl<T: Hash> Hash for SkipList<T> {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for elt in self {
            elt.hash(state);
        }
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Tests
// ////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use rstest::rstest;

    use super::SkipList;
    use crate::level_generator::LevelGenerator;

    /// Replays a fixed promotion script, then stays on the base chain.
    struct Scripted(std::vec::IntoIter<usize>);

    impl Scripted {
        fn new(levels: &[usize]) -> Self {
            Scripted(levels.to_vec().into_iter())
        }
    }

    impl LevelGenerator for Scripted {
        fn extra_levels(&mut self) -> usize {
            self.0.next().unwrap_or(0)
        }
    }

    fn contents(list: &SkipList<i64>) -> Vec<i64> {
        list.iter().copied().collect()
    }

    #[test]
    fn empty_list() {
        let mut list: SkipList<i64> = SkipList::new(5);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(!list.contains(&1));
        assert_eq!(list.remove(&1), None);
        assert!(list.is_empty());
        list.check();
    }

    #[test]
    fn insert_remove_cycle() {
        let mut list = SkipList::new(5);
        list.insert(1);
        assert!(!list.is_empty());
        assert_eq!(list.remove(&1), Some(1));
        assert!(list.is_empty());

        list.insert(1);
        list.insert(2);
        assert_eq!(list.remove(&1), Some(1));
        assert_eq!(list.remove(&2), Some(2));
        assert_eq!(list.remove(&1), None);
        assert!(list.is_empty());
        list.check();
    }

    #[test]
    fn demo_sequence() {
        let mut list = SkipList::new(5);
        for value in [10, 124, 554, -2453, -745, 5674, 876, 56, 9] {
            list.insert(value);
            list.check();
        }
        assert_eq!(
            contents(&list),
            vec![-2453, -745, 9, 10, 56, 124, 554, 876, 5674]
        );

        assert!(list.contains(&876));
        assert_eq!(list.remove(&876), Some(876));
        list.check();
        assert!(!list.contains(&876));
        assert_eq!(
            contents(&list),
            vec![-2453, -745, 9, 10, 56, 124, 554, 5674]
        );
    }

    #[test]
    fn duplicates() {
        let mut list = SkipList::new(5);
        list.insert(5);
        list.insert(5);
        list.check();
        assert_eq!(list.len(), 2);
        assert!(list.contains(&5));

        assert_eq!(list.remove(&5), Some(5));
        list.check();
        assert!(list.contains(&5));
        assert_eq!(list.len(), 1);

        assert_eq!(list.remove(&5), Some(5));
        list.check();
        assert!(!list.contains(&5));
        assert!(list.is_empty());
    }

    #[test]
    fn absent_remove_leaves_list_unchanged() {
        let mut list: SkipList<i64> = (0..20).collect();
        let before = contents(&list);
        assert_eq!(list.remove(&100), None);
        assert_eq!(list.remove(&-1), None);
        list.check();
        assert_eq!(contents(&list), before);
    }

    #[rstest]
    fn heights(#[values(1, 2, 3, 5, 16)] max_height: usize) {
        let mut list = SkipList::new(max_height);
        for i in (0..200).rev() {
            list.insert(i);
        }
        list.check();
        assert!(list.iter().copied().eq(0..200));

        for i in 0..200 {
            assert!(list.contains(&i));
        }
        for i in (0..200).step_by(2) {
            assert_eq!(list.remove(&i), Some(i));
        }
        list.check();
        assert!(list.iter().copied().eq((0..200).filter(|i| i % 2 == 1)));
        assert_eq!(list.len(), 100);
    }

    #[test]
    fn randomized_against_sorted_vec() {
        let mut rng = StdRng::seed_from_u64(0x1234_abcd);
        let mut list: SkipList<i64> = SkipList::new(6);
        let mut mirror: Vec<i64> = Vec::new();

        for step in 0..2000 {
            let value = rng.random_range(0..50);
            match rng.random_range(0..3) {
                0 => {
                    let index = mirror.binary_search(&value).unwrap_or_else(|e| e);
                    mirror.insert(index, value);
                    list.insert(value);
                }
                1 => {
                    let expected = match mirror.binary_search(&value) {
                        Ok(index) => Some(mirror.remove(index)),
                        Err(_) => None,
                    };
                    assert_eq!(list.remove(&value), expected);
                }
                _ => {
                    assert_eq!(list.contains(&value), mirror.contains(&value));
                }
            }
            if step % 100 == 0 {
                list.check();
                assert_eq!(contents(&list), mirror);
            }
        }
        list.check();
        assert_eq!(contents(&list), mirror);
    }

    #[test]
    fn promotion_capped_at_capacity() {
        // Two lanes of capacity; the script asks for far more.
        let mut list = SkipList::with_level_generator(4, Scripted::new(&[100, 3]));
        list.insert(1);
        list.insert(2);
        list.check();
        assert_eq!(contents(&list), vec![1, 2]);
        assert!(list.contains(&1));
        assert!(list.contains(&2));
        assert_eq!(list.remove(&1), Some(1));
        list.check();
    }

    #[test]
    fn deterministic_structure() {
        let mut list = SkipList::with_level_generator(5, Scripted::new(&[1, 3, 0]));
        list.insert(2);
        list.insert(9);
        list.insert(4);
        list.check();

        assert_snapshot!(list.to_display_string(), @r"
        REF
        < 2 >| 2 X | 9 X | 9 X |
        |
        < 2 >
        | 9 X | . | . |
        |
        < 4 >
        | . | . | . |
        |
        < 9 >
        | null X | null X | null X |
        |
        ");
    }

    #[test]
    fn render_empty() {
        let list: SkipList<i64> = SkipList::new(5);
        assert_snapshot!(list.to_display_string(), @r"
        REF
        < null >| null X | null X | null X |
        |
        ");
    }

    #[test]
    fn display_compact() {
        let list: SkipList<i64> = [2, 9, 4].into_iter().collect();
        assert_snapshot!(format!("{list}"), @"[2, 4, 9]");
        assert_eq!(format!("{list:?}"), "[2, 4, 9]");
    }

    #[test]
    fn iterators() {
        let list: SkipList<i64> = (0..100).rev().collect();
        let mut iter = list.iter();
        assert_eq!(iter.size_hint(), (100, Some(100)));
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.size_hint(), (99, Some(99)));

        assert!(list.into_iter().eq(0..100));
    }

    #[test]
    fn extend_and_clear() {
        let mut list = SkipList::new(8);
        list.extend([3, 1, 2]);
        list.extend([0, 4]);
        list.check();
        assert_eq!(contents(&list), vec![0, 1, 2, 3, 4]);

        list.clear();
        list.check();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        // The cleared list must still accept the full workload.
        list.extend([5, 3, 4]);
        list.check();
        assert_eq!(contents(&list), vec![3, 4, 5]);
    }

    #[test]
    fn equality() {
        let a: SkipList<i64> = (0..100).collect();
        let b: SkipList<i64> = (0..100).rev().collect();
        let c: SkipList<i64> = (0..10).collect();
        let d: SkipList<i64> = (0..100).chain(0..1).collect();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_ne!(c, d);
    }

    #[test]
    fn default_height() {
        let list: SkipList<i64> = SkipList::default();
        assert!(list.is_empty());
    }
}
