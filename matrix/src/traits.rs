/// The basic algebraic requirements for the elements of a
/// [`GenericMatrix`](crate::GenericMatrix).
///
/// `Default` plays the role of zero: results are zero-filled with it
/// before being accumulated into. Anything with these operations qualifies,
/// from `i32` and `f64` to small structs such as complex numbers.
pub trait Element:
    Copy
    + Default
    + PartialEq
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Neg<Output = Self>
    + std::ops::Mul<Output = Self>
{
}

impl<
        T: Copy
            + Default
            + PartialEq
            + std::ops::Add<Output = Self>
            + std::ops::Sub<Output = Self>
            + std::ops::Neg<Output = Self>
            + std::ops::Mul<Output = Self>,
    > Element for T
{
}
