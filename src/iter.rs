use crate::index::{IndexType, NodeIndex};
use crate::intervalmap::IntervalMap;
use crate::node::Node;

/// Pushes a link of nodes on the left to stack.
fn left_link<K, V, Ix>(map_ref: &IntervalMap<K, V, Ix>, mut x: NodeIndex<Ix>) -> Vec<NodeIndex<Ix>>
where
    Ix: IndexType,
{
    let mut nodes = vec![];
    while !map_ref.node_ref(x, Node::is_sentinel) {
        nodes.push(x);
        x = map_ref.node_ref(x, Node::left);
    }
    nodes
}

/// An iterator over the entries of a `IntervalMap`, sorted by key.
pub struct Iter<'a, K, V, Ix> {
    /// Reference to the map
    pub(crate) map_ref: &'a IntervalMap<K, V, Ix>,
    /// Stack for iteration
    pub(crate) stack: Vec<NodeIndex<Ix>>,
}

impl<'a, K, V, Ix> Iter<'a, K, V, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn new(map_ref: &'a IntervalMap<K, V, Ix>) -> Self {
        Iter {
            map_ref,
            stack: left_link(map_ref, map_ref.root),
        }
    }

    /// Positions the iterator on the first entry whose key is not less than `key`.
    pub(crate) fn starting_at(map_ref: &'a IntervalMap<K, V, Ix>, key: &K) -> Self
    where
        K: Ord,
    {
        // Keep the ancestors we still have to visit after the start node.
        let mut stack = vec![];
        let mut x = map_ref.root;
        while !map_ref.node_ref(x, Node::is_sentinel) {
            if map_ref.node_ref(x, Node::key) >= key {
                stack.push(x);
                x = map_ref.node_ref(x, Node::left);
            } else {
                x = map_ref.node_ref(x, Node::right);
            }
        }
        Iter { map_ref, stack }
    }
}

impl<'a, K, V, Ix> Iterator for Iter<'a, K, V, Ix>
where
    Ix: IndexType,
{
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        self.stack.extend(left_link(
            self.map_ref,
            self.map_ref.node_ref(x, Node::right),
        ));
        Some(self.map_ref.node_ref(x, Node::entry))
    }
}

/// An into iterator over the entries of a `IntervalMap`, sorted by key.
pub struct IntoIter<K, V, Ix> {
    interval_map: IntervalMap<K, V, Ix>,
    /// Stack for iteration
    stack: Vec<NodeIndex<Ix>>,
}

impl<K, V, Ix> IntoIter<K, V, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn new(interval_map: IntervalMap<K, V, Ix>) -> Self {
        let stack = left_link(&interval_map, interval_map.root);
        IntoIter {
            interval_map,
            stack,
        }
    }
}

impl<K, V, Ix> Iterator for IntoIter<K, V, Ix>
where
    Ix: IndexType,
{
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        self.stack.extend(left_link(
            &self.interval_map,
            self.interval_map.node_ref(x, Node::right),
        ));
        Some(self.interval_map.nodes[x.index()].take_entry())
    }
}
