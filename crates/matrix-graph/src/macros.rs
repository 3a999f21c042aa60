macro_rules! vertex_index {
    ($($t:ty),* $(,)*) => {
        $(
            impl $crate::types::VertexIndex for $t {
                #[inline]
                fn to_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn to_signed(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}
