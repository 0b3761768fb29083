use crate::index::{IndexType, NodeIndex};

/// Node of the red-black tree
///
/// Every node but the sentinel holds one boundary of the map: the key where a run starts
/// and the value of that run.
#[derive(Debug, Clone)]
pub struct Node<K, V, Ix> {
    /// Left children
    pub left: Option<NodeIndex<Ix>>,
    /// Right children
    pub right: Option<NodeIndex<Ix>>,
    /// Parent
    pub parent: Option<NodeIndex<Ix>>,
    /// Color of the node
    pub color: Color,

    /// Key where the run starts
    pub key: Option<K>,
    /// Value of the run
    pub value: Option<V>,
}

// Convenient getter/setter methods
impl<K, V, Ix> Node<K, V, Ix>
where
    Ix: IndexType,
{
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn key(&self) -> &K {
        self.key.as_ref().unwrap()
    }

    pub fn left(&self) -> NodeIndex<Ix> {
        self.left.unwrap()
    }

    pub fn right(&self) -> NodeIndex<Ix> {
        self.right.unwrap()
    }

    pub fn child_at(&self, side: Side) -> NodeIndex<Ix> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    pub fn parent(&self) -> NodeIndex<Ix> {
        self.parent.unwrap()
    }

    pub fn is_sentinel(&self) -> bool {
        self.key.is_none()
    }

    pub fn is_black(&self) -> bool {
        matches!(self.color, Color::Black)
    }

    pub fn is_red(&self) -> bool {
        matches!(self.color, Color::Red)
    }

    pub fn value(&self) -> &V {
        self.value.as_ref().unwrap()
    }

    pub fn entry(&self) -> (&K, &V) {
        (self.key(), self.value())
    }

    pub fn take_entry(&mut self) -> (K, V) {
        (self.key.take().unwrap(), self.value.take().unwrap())
    }

    pub fn set_value(value: V) -> impl FnOnce(&mut Node<K, V, Ix>) -> V {
        move |node: &mut Node<K, V, Ix>| node.value.replace(value).unwrap()
    }

    pub fn set_color(color: Color) -> impl FnOnce(&mut Node<K, V, Ix>) {
        move |node: &mut Node<K, V, Ix>| {
            node.color = color;
        }
    }

    pub fn set_left(left: NodeIndex<Ix>) -> impl FnOnce(&mut Node<K, V, Ix>) {
        move |node: &mut Node<K, V, Ix>| {
            let _ignore = node.left.replace(left);
        }
    }

    pub fn set_right(right: NodeIndex<Ix>) -> impl FnOnce(&mut Node<K, V, Ix>) {
        move |node: &mut Node<K, V, Ix>| {
            let _ignore = node.right.replace(right);
        }
    }

    pub fn child(side: Side) -> impl FnOnce(&Node<K, V, Ix>) -> NodeIndex<Ix> {
        move |node: &Node<K, V, Ix>| node.child_at(side)
    }

    pub fn set_child(side: Side, child: NodeIndex<Ix>) -> impl FnOnce(&mut Node<K, V, Ix>) {
        move |node: &mut Node<K, V, Ix>| {
            let _ignore = match side {
                Side::Left => node.left.replace(child),
                Side::Right => node.right.replace(child),
            };
        }
    }

    pub fn set_parent(parent: NodeIndex<Ix>) -> impl FnOnce(&mut Node<K, V, Ix>) {
        move |node: &mut Node<K, V, Ix>| {
            let _ignore = node.parent.replace(parent);
        }
    }
}

/// The color of the node
#[derive(Debug, Clone, Copy)]
pub enum Color {
    /// Red node
    Red,
    /// Black node
    Black,
}

/// Which child of its parent a node is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left child
    Left,
    /// Right child
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}
