use std::fmt::Debug;

/// Integer that may name a vertex.
///
/// Signed types are accepted so that a negative id is reported as
/// [`GraphError::VertexOutOfRange`](crate::GraphError::VertexOutOfRange)
/// instead of being unrepresentable at the call site.
pub trait VertexIndex: Copy + Debug {
    /// Returns the matrix index, or `None` if `self` is negative or does not fit a `usize`.
    fn to_index(self) -> Option<usize>;

    fn to_signed(self) -> i128;
}

vertex_index!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
