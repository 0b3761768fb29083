use std::fmt;
use std::hash::Hash;

/// Default index width of the node arena.
pub type DefaultIx = u32;

/// Integer type used to address nodes in the arena of an `IntervalMap`.
///
/// # Safety
///
/// `new` and `index` must round-trip every value in `0..=max().index()`.
pub unsafe trait IndexType: Copy + Default + Hash + Ord + fmt::Debug + 'static {
    fn new(x: usize) -> Self;
    fn index(&self) -> usize;
    fn max() -> Self;
}

macro_rules! impl_index_type {
    ($($ix:ty),*) => {
        $(
            unsafe impl IndexType for $ix {
                #[inline(always)]
                fn new(x: usize) -> Self {
                    x as $ix
                }
                #[inline(always)]
                fn index(&self) -> usize {
                    *self as usize
                }
                #[inline(always)]
                fn max() -> Self {
                    <$ix>::MAX
                }
            }
        )*
    };
}

impl_index_type!(u8, u16, u32, usize);

/// Node identifier.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct NodeIndex<Ix = DefaultIx>(Ix);

impl<Ix: IndexType> NodeIndex<Ix> {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    /// The first index that can no longer be allocated.
    #[inline]
    pub fn end() -> Self {
        NodeIndex(IndexType::max())
    }
}

impl<Ix: fmt::Debug> fmt::Debug for NodeIndex<Ix> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NodeIndex({:?})", self.0)
    }
}
