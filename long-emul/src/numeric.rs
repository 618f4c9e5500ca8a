//! Conversion traits shared by the native numeric types and [`crate::Int64`].

/// A trait that allows to generically cast one type from another.
///
/// This type is similar to the [`std::convert::From`] trait, but the conversion between the two
/// types is deferred to the `as` keyword, or its equivalent for [`crate::Int64`]: integer casts
/// truncate or sign-extend, float to integer casts truncate toward zero and saturate.
pub trait CastFrom<Input> {
    fn cast_from(input: Input) -> Self;
}

/// A trait that allows to generically cast one type into another.
///
/// This is the counterpart of [`CastFrom`], and is implemented for every pair of types for which
/// a [`CastFrom`] exists.
pub trait CastInto<Output> {
    fn cast_into(self) -> Output;
}

impl<Input, Output> CastInto<Output> for Input
where
    Output: CastFrom<Input>,
{
    fn cast_into(self) -> Output {
        Output::cast_from(self)
    }
}

macro_rules! implement_cast {
    ($Input: ty, {$($Output: ty),*}) => {
        $(
            impl CastFrom<$Input> for $Output {
                #[inline]
                fn cast_from(input: $Input) -> $Output {
                    input as $Output
                }
            }
        )*
    };
    ($Input: ty) => {
        implement_cast!($Input, {f64, u8, u16, u32, u64, i8, i16, i32, i64});
    };
    ($($Input: ty),*) => {
        $(
            implement_cast!($Input);
        )*
    };
}

implement_cast!(f64, u8, u16, u32, u64, i8, i16, i32, i64);
