use crate::bound::Bounded;
use crate::index::{DefaultIx, IndexType, NodeIndex};
use crate::iter::{IntoIter, Iter};
use crate::node::{Color, Node, Side};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

/// A total map from the key domain `K` to values `V`.
///
/// Only the keys where the mapped value changes are stored: an entry `(k, v)` means that
/// every key from `k` up to (but excluding) the next stored key maps to `v`. The first entry
/// is always at `K::lowest()`, and no two neighboring entries hold equal values.
#[derive(Clone)]
pub struct IntervalMap<K, V, Ix = DefaultIx> {
    /// Vector that stores nodes
    pub(crate) nodes: Vec<Node<K, V, Ix>>,
    /// Root of the red-black tree
    pub(crate) root: NodeIndex<Ix>,
    /// Number of stored entries
    pub(crate) len: usize,
}

impl<K, V> IntervalMap<K, V>
where
    K: Bounded,
    V: PartialEq + Clone,
{
    /// Create an `IntervalMap` that maps every key to `value`.
    ///
    /// # Example
    /// ```rust
    /// use rb_step_map::IntervalMap;
    ///
    /// let map = IntervalMap::<i32, char>::new('A');
    /// assert_eq!(map.get(&i32::MIN), &'A');
    /// assert_eq!(map.get(&0), &'A');
    /// assert_eq!(map.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn new(value: V) -> Self {
        Self::with_capacity(0, value)
    }
}

impl<K, V, Ix> IntervalMap<K, V, Ix>
where
    K: Bounded,
    V: PartialEq + Clone,
    Ix: IndexType,
{
    /// Creates a new `IntervalMap` mapping every key to `value`, with room for `capacity`
    /// entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize, value: V) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(1));
        nodes.push(Self::new_sentinel());
        let mut map = IntervalMap {
            nodes,
            root: Self::sentinel(),
            len: 0,
        };
        let _ignore = map.insert_entry(K::lowest(), value);
        map
    }

    /// Assign `value` to every key in `[begin, end)`.
    ///
    /// Keys outside the range keep their values. If `!(begin < end)` the range is empty and
    /// the map is left untouched. Since the range excludes `end`, the value at
    /// `K::highest()` can never be changed.
    ///
    /// # Panics
    ///
    /// This method panics when the tree is at the maximum number of nodes for its index
    ///
    /// # Example
    /// ```rust
    /// use rb_step_map::IntervalMap;
    ///
    /// let mut map = IntervalMap::<i32, char>::new('A');
    /// map.assign(3, 5, 'B');
    /// assert_eq!(map.get(&2), &'A');
    /// assert_eq!(map.get(&3), &'B');
    /// assert_eq!(map.get(&4), &'B');
    /// assert_eq!(map.get(&5), &'A');
    /// assert_eq!(map.len(), 3);
    ///
    /// // 'A' already holds on both sides, nothing is stored
    /// map.assign(1000, 2000, 'A');
    /// assert_eq!(map.len(), 3);
    /// ```
    #[inline]
    pub fn assign(&mut self, begin: K, end: K, value: V) {
        if begin >= end {
            return;
        }
        // The value that must keep holding from `end` on.
        let follow = self.get(&end).clone();
        // A run that extends its predecessor gets no boundary of its own. There is no
        // predecessor at `lowest`, so the leading entry is always overwritten in place.
        let keep_begin = self.value_before(&begin) != Some(&value);
        let keep_end = follow != value;

        self.remove_between(&begin, &end);

        if keep_end {
            let _ignore = self.insert_entry(end, follow);
        } else {
            self.remove_key(&end);
        }
        if keep_begin {
            let _ignore = self.insert_entry(begin, value);
        } else {
            self.remove_key(&begin);
        }
    }
}

impl<K, V, Ix> IntervalMap<K, V, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Return a reference to the value of `key`.
    ///
    /// # Example
    /// ```rust
    /// use rb_step_map::IntervalMap;
    ///
    /// let mut map = IntervalMap::<u8, bool>::new(false);
    /// map.assign(10, 20, true);
    /// assert!(!*map.get(&9));
    /// assert!(*map.get(&10));
    /// assert!(!*map.get(&20));
    /// ```
    #[inline]
    pub fn get(&self, key: &K) -> &V {
        self.node_ref(self.floor(key), Node::value)
    }

    /// Return the stored entry that governs `key`, i.e. the start of the run containing `key`
    /// together with the run's value.
    ///
    /// # Example
    /// ```rust
    /// use rb_step_map::IntervalMap;
    ///
    /// let mut map = IntervalMap::<i32, char>::new('a');
    /// map.assign(10, 100, 'b');
    /// assert_eq!(map.get_key_value(&50), (&10, &'b'));
    /// assert_eq!(map.get_key_value(&100), (&100, &'a'));
    /// assert_eq!(map.get_key_value(&-7), (&i32::MIN, &'a'));
    /// ```
    #[inline]
    pub fn get_key_value(&self, key: &K) -> (&K, &V) {
        self.node_ref(self.floor(key), Node::entry)
    }

    /// Get an iterator over the entries of the map, starting with the entry that governs
    /// `key`.
    ///
    /// # Example
    /// ```rust
    /// use rb_step_map::IntervalMap;
    ///
    /// let mut map = IntervalMap::<i32, char>::new('a');
    /// map.assign(10, 20, 'b');
    /// map.assign(30, 40, 'c');
    /// let tail: Vec<_> = map.iter_from(&15).map(|(k, _)| *k).collect();
    /// assert_eq!(tail, vec![10, 20, 30, 40]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter_from(&self, key: &K) -> Iter<'_, K, V, Ix> {
        let start = self.node_ref(self.floor(key), Node::key);
        Iter::starting_at(self, start)
    }
}

#[allow(clippy::len_without_is_empty)]
impl<K, V, Ix> IntervalMap<K, V, Ix>
where
    Ix: IndexType,
{
    /// Get an iterator over the entries of the map, sorted by key.
    ///
    /// This is the canonical representation of the map: the first key is always
    /// `K::lowest()` and neighboring values always differ.
    ///
    /// # Example
    /// ```rust
    /// use rb_step_map::IntervalMap;
    ///
    /// let mut map = IntervalMap::<i32, char>::new('A');
    /// map.assign(3, 5, 'B');
    /// let entries: Vec<_> = map.iter().collect();
    /// assert_eq!(entries, vec![(&i32::MIN, &'A'), (&3, &'B'), (&5, &'A')]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V, Ix> {
        Iter::new(self)
    }

    /// Return the number of stored entries, which is never zero.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }
}

impl<K, V, Ix> IntervalMap<K, V, Ix>
where
    Ix: IndexType,
{
    /// Create a new sentinel node
    fn new_sentinel() -> Node<K, V, Ix> {
        Node {
            key: None,
            value: None,
            left: None,
            right: None,
            parent: None,
            color: Color::Black,
        }
    }

    /// Create a new tree node
    fn new_node(key: K, value: V, parent: NodeIndex<Ix>) -> Node<K, V, Ix> {
        Node {
            key: Some(key),
            value: Some(value),
            left: Some(Self::sentinel()),
            right: Some(Self::sentinel()),
            parent: Some(parent),
            color: Color::Red,
        }
    }

    /// Get the sentinel node index
    fn sentinel() -> NodeIndex<Ix> {
        NodeIndex::new(0)
    }
}

impl<K, V, Ix> IntervalMap<K, V, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Find the node with the greatest key that is not greater than `key`.
    fn floor(&self, key: &K) -> NodeIndex<Ix> {
        self.last_before(key, true)
    }

    /// Value of the run that ends right before `key`, if any.
    fn value_before(&self, key: &K) -> Option<&V> {
        let x = self.last_before(key, false);
        (!self.node_ref(x, Node::is_sentinel)).then(|| self.node_ref(x, Node::value))
    }

    /// Find the last node ordered before `key` (or at it, when `inclusive`).
    fn last_before(&self, key: &K, inclusive: bool) -> NodeIndex<Ix> {
        let mut found = Self::sentinel();
        let mut x = self.root;
        while !self.node_ref(x, Node::is_sentinel) {
            match self.node_ref(x, Node::key).cmp(key) {
                Ordering::Equal if inclusive => return x,
                Ordering::Less => {
                    found = x;
                    x = self.node_ref(x, Node::right);
                }
                _ => x = self.node_ref(x, Node::left),
            }
        }
        found
    }

    /// Find the first node whose key is strictly greater than `key`.
    fn first_after(&self, key: &K) -> NodeIndex<Ix> {
        let mut found = Self::sentinel();
        let mut x = self.root;
        while !self.node_ref(x, Node::is_sentinel) {
            if self.node_ref(x, Node::key) > key {
                found = x;
                x = self.node_ref(x, Node::left);
            } else {
                x = self.node_ref(x, Node::right);
            }
        }
        found
    }

    /// Search for the node with exactly the given key
    fn search_exact(&self, key: &K) -> Option<NodeIndex<Ix>> {
        let mut x = self.root;
        while !self.node_ref(x, Node::is_sentinel) {
            match key.cmp(self.node_ref(x, Node::key)) {
                Ordering::Equal => return Some(x),
                Ordering::Less => x = self.node_ref(x, Node::left),
                Ordering::Greater => x = self.node_ref(x, Node::right),
            }
        }
        None
    }

    /// Insert a key-value pair, overwriting and returning the previous value of the key.
    fn insert_entry(&mut self, key: K, value: V) -> Option<V> {
        let mut y = Self::sentinel();
        let mut x = self.root;
        let mut side = Side::Left;
        while !self.node_ref(x, Node::is_sentinel) {
            y = x;
            let ord = key.cmp(self.node_ref(x, Node::key));
            side = match ord {
                Ordering::Equal => return Some(self.node_mut(x, Node::set_value(value))),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            x = self.node_ref(x, Node::child(side));
        }

        let z = NodeIndex::new(self.nodes.len());
        // check for max capacity, except if we use usize
        assert!(
            <Ix as IndexType>::max().index() == !0 || NodeIndex::end() != z,
            "Reached maximum number of nodes"
        );
        self.nodes.push(Self::new_node(key, value, y));
        if self.node_ref(y, Node::is_sentinel) {
            self.root = z;
        } else {
            self.node_mut(y, Node::set_child(side, z));
        }
        self.insert_fixup(z);

        self.len = self.len.wrapping_add(1);
        None
    }

    /// Remove every entry whose key lies strictly between `begin` and `end`.
    fn remove_between(&mut self, begin: &K, end: &K) {
        loop {
            let x = self.first_after(begin);
            if self.node_ref(x, Node::is_sentinel) || self.node_ref(x, Node::key) >= end {
                return;
            }
            let _ignore = self.remove_node(x);
        }
    }

    /// Remove the entry stored at exactly `key`, if any.
    fn remove_key(&mut self, key: &K) {
        if let Some(x) = self.search_exact(key) {
            let _ignore = self.remove_node(x);
        }
    }
}

impl<K, V, Ix> IntervalMap<K, V, Ix>
where
    Ix: IndexType,
{
    /// Unlink a node from the tree and release its slot in the arena.
    fn remove_node(&mut self, z: NodeIndex<Ix>) -> (K, V) {
        self.remove_inner(z);
        // Swap the node with the last node stored in the vector and update indices
        let mut node = self.nodes.swap_remove(z.index());
        let old = NodeIndex::<Ix>::new(self.nodes.len());
        self.update_idx(old, z);
        node.take_entry()
    }

    /// Remove a node from the tree.
    fn remove_inner(&mut self, z: NodeIndex<Ix>) {
        let mut y_orig_color = self.node_ref(z, Node::color);
        let x;
        if self.left_ref(z, Node::is_sentinel) {
            x = self.node_ref(z, Node::right);
            self.transplant(z, x);
        } else if self.right_ref(z, Node::is_sentinel) {
            x = self.node_ref(z, Node::left);
            self.transplant(z, x);
        } else {
            let y = self.tree_minimum(self.node_ref(z, Node::right));
            y_orig_color = self.node_ref(y, Node::color);
            x = self.node_ref(y, Node::right);
            if self.node_ref(y, Node::parent) == z {
                self.node_mut(x, Node::set_parent(y));
            } else {
                self.transplant(y, x);
                self.node_mut(y, Node::set_right(self.node_ref(z, Node::right)));
                self.right_mut(y, Node::set_parent(y));
            }
            self.transplant(z, y);
            self.node_mut(y, Node::set_left(self.node_ref(z, Node::left)));
            self.left_mut(y, Node::set_parent(y));
            self.node_mut(y, Node::set_color(self.node_ref(z, Node::color)));
        }

        if matches!(y_orig_color, Color::Black) {
            self.remove_fixup(x);
        }

        self.len = self.len.wrapping_sub(1);
    }

    /// Restore red-black tree properties after an insert.
    fn insert_fixup(&mut self, mut z: NodeIndex<Ix>) {
        while self.parent_ref(z, Node::is_red) {
            if self.grand_parent_ref(z, Node::is_sentinel) {
                break;
            }
            let parent = self.node_ref(z, Node::parent);
            let side = self.side_of(parent);
            let uncle = self.grand_parent_ref(z, Node::child(side.opposite()));
            if self.node_ref(uncle, Node::is_red) {
                self.parent_mut(z, Node::set_color(Color::Black));
                self.node_mut(uncle, Node::set_color(Color::Black));
                self.grand_parent_mut(z, Node::set_color(Color::Red));
                z = self.parent_ref(z, Node::parent);
            } else {
                if self.side_of(z) != side {
                    z = parent;
                    self.rotate(z, side);
                }
                self.parent_mut(z, Node::set_color(Color::Black));
                self.grand_parent_mut(z, Node::set_color(Color::Red));
                self.rotate(self.parent_ref(z, Node::parent), side.opposite());
            }
        }
        self.node_mut(self.root, Node::set_color(Color::Black));
    }

    /// Restore red-black tree properties after a remove.
    fn remove_fixup(&mut self, mut x: NodeIndex<Ix>) {
        while x != self.root && self.node_ref(x, Node::is_black) {
            let side = self.side_of(x);
            let other = side.opposite();
            let mut w = self.parent_ref(x, Node::child(other));
            if self.node_ref(w, Node::is_red) {
                self.node_mut(w, Node::set_color(Color::Black));
                self.parent_mut(x, Node::set_color(Color::Red));
                self.rotate(self.node_ref(x, Node::parent), side);
                w = self.parent_ref(x, Node::child(other));
            }
            if self.node_ref(w, Node::is_sentinel) {
                break;
            }
            if self.child_ref(w, side, Node::is_black) && self.child_ref(w, other, Node::is_black)
            {
                self.node_mut(w, Node::set_color(Color::Red));
                x = self.node_ref(x, Node::parent);
            } else {
                if self.child_ref(w, other, Node::is_black) {
                    self.child_mut(w, side, Node::set_color(Color::Black));
                    self.node_mut(w, Node::set_color(Color::Red));
                    self.rotate(w, other);
                    w = self.parent_ref(x, Node::child(other));
                }
                self.node_mut(w, Node::set_color(self.parent_ref(x, Node::color)));
                self.parent_mut(x, Node::set_color(Color::Black));
                self.child_mut(w, other, Node::set_color(Color::Black));
                self.rotate(self.node_ref(x, Node::parent), side);
                x = self.root;
            }
        }
        self.node_mut(x, Node::set_color(Color::Black));
    }

    /// Binary tree rotation that moves `x` down towards `side`.
    ///
    /// `rotate(x, Side::Left)` is the classic left rotation.
    fn rotate(&mut self, x: NodeIndex<Ix>, side: Side) {
        let up = side.opposite();
        if self.child_ref(x, up, Node::is_sentinel) {
            return;
        }
        let y = self.node_ref(x, Node::child(up));
        let inner = self.node_ref(y, Node::child(side));
        self.node_mut(x, Node::set_child(up, inner));
        if !self.node_ref(inner, Node::is_sentinel) {
            self.node_mut(inner, Node::set_parent(x));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_child(side, x));
    }

    /// Replace parent during a rotation.
    fn replace_parent(&mut self, x: NodeIndex<Ix>, y: NodeIndex<Ix>) {
        self.node_mut(y, Node::set_parent(self.node_ref(x, Node::parent)));
        if self.parent_ref(x, Node::is_sentinel) {
            self.root = y;
        } else {
            let side = self.side_of(x);
            self.parent_mut(x, Node::set_child(side, y));
        }
        self.node_mut(x, Node::set_parent(y));
    }

    /// Find the node with the minimum key.
    fn tree_minimum(&self, mut x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        while !self.left_ref(x, Node::is_sentinel) {
            x = self.node_ref(x, Node::left);
        }
        x
    }

    /// Replace one subtree as a child of its parent with another subtree.
    fn transplant(&mut self, u: NodeIndex<Ix>, v: NodeIndex<Ix>) {
        if self.parent_ref(u, Node::is_sentinel) {
            self.root = v;
        } else {
            let side = self.side_of(u);
            self.parent_mut(u, Node::set_child(side, v));
        }
        self.node_mut(v, Node::set_parent(self.node_ref(u, Node::parent)));
    }

    /// Which child of its parent a node is.
    fn side_of(&self, node: NodeIndex<Ix>) -> Side {
        if self.parent_ref(node, Node::left) == node {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Update node indices after the node at `old` was moved to `new` by a swap remove.
    fn update_idx(&mut self, old: NodeIndex<Ix>, new: NodeIndex<Ix>) {
        if self.nodes.get(new.index()).is_none() {
            return;
        }
        if self.root == old {
            self.root = new;
        }
        if !self.parent_ref(new, Node::is_sentinel) {
            if self.parent_ref(new, Node::left) == old {
                self.parent_mut(new, Node::set_left(new));
            } else {
                self.parent_mut(new, Node::set_right(new));
            }
        }
        if !self.left_ref(new, Node::is_sentinel) {
            self.left_mut(new, Node::set_parent(new));
        }
        if !self.right_ref(new, Node::is_sentinel) {
            self.right_mut(new, Node::set_parent(new));
        }
    }
}

// Convenient methods for reference or mutate current/parent/child node
impl<'a, K, V, Ix> IntervalMap<K, V, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn node_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, V, Ix>) -> R,
    {
        op(&self.nodes[node.index()])
    }

    pub(crate) fn node_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, V, Ix>) -> R,
    {
        op(&mut self.nodes[node.index()])
    }

    pub(crate) fn child_ref<F, R>(&'a self, node: NodeIndex<Ix>, side: Side, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, V, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].child_at(side).index();
        op(&self.nodes[idx])
    }

    fn child_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, side: Side, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, V, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].child_at(side).index();
        op(&mut self.nodes[idx])
    }

    pub(crate) fn left_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, V, Ix>) -> R,
    {
        self.child_ref(node, Side::Left, op)
    }

    pub(crate) fn right_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, V, Ix>) -> R,
    {
        self.child_ref(node, Side::Right, op)
    }

    fn left_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, V, Ix>) -> R,
    {
        self.child_mut(node, Side::Left, op)
    }

    fn right_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, V, Ix>) -> R,
    {
        self.child_mut(node, Side::Right, op)
    }

    fn parent_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, V, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].parent().index();
        op(&self.nodes[idx])
    }

    fn grand_parent_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, V, Ix>) -> R,
    {
        let parent_idx = self.nodes[node.index()].parent().index();
        let grand_parent_idx = self.nodes[parent_idx].parent().index();
        op(&self.nodes[grand_parent_idx])
    }

    fn parent_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, V, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].parent().index();
        op(&mut self.nodes[idx])
    }

    fn grand_parent_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, V, Ix>) -> R,
    {
        let parent_idx = self.nodes[node.index()].parent().index();
        let grand_parent_idx = self.nodes[parent_idx].parent().index();
        op(&mut self.nodes[grand_parent_idx])
    }
}

impl<K, V, Ix> Index<&K> for IntervalMap<K, V, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    type Output = V;

    /// Return a reference to the value of `key`, like [`IntervalMap::get`].
    #[inline]
    fn index(&self, key: &K) -> &V {
        self.get(key)
    }
}

impl<K, V, Ix> PartialEq for IntervalMap<K, V, Ix>
where
    K: PartialEq,
    V: PartialEq,
    Ix: IndexType,
{
    /// Maps are kept canonical, so equal entries mean equal mappings.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K, V, Ix> Eq for IntervalMap<K, V, Ix>
where
    K: Eq,
    V: Eq,
    Ix: IndexType,
{
}

impl<K, V, Ix> fmt::Debug for IntervalMap<K, V, Ix>
where
    K: fmt::Debug,
    V: fmt::Debug,
    Ix: IndexType,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, Ix> IntoIterator for &'a IntervalMap<K, V, Ix>
where
    Ix: IndexType,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, Ix>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, Ix> IntoIterator for IntervalMap<K, V, Ix>
where
    Ix: IndexType,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, Ix>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
