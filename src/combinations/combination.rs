/// One k-subset of `0..n` together with its complement.
///
/// This is a view into a [`Combinations`] block: the row is stored as
/// `selected ++ other`, both halves ascending.
///
/// [`Combinations`]: super::Combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination<'a> {
    row: &'a [u8],
    k: usize,
}

impl<'a> Combination<'a> {
    pub(super) fn new(row: &'a [u8], k: usize) -> Self {
        Self { row, k }
    }
    /// The chosen indices, ascending, length k.
    pub fn selected(&self) -> &'a [u8] {
        &self.row[..self.k]
    }
    /// The indices not chosen, ascending, length n - k.
    pub fn other(&self) -> &'a [u8] {
        &self.row[self.k..]
    }
}

impl std::fmt::Display for Combination<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?} | {:?}", self.selected(), self.other())
    }
}
