/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

#![deny(missing_docs)]

//! A Library for dense, generic Matrix operations.
//!
//! It is built generically (i.e., `GenericMatrix<T: Element>` where `Element` is a
//! basic numeric Trait) so that the same library can be used for defining Matrices
//! over `i32`, `i64`, `f32`, `f64` and even structures (e.g., complex numbers)
//! to which numeric operations apply.
//!
//! Every fallible operation returns a [`MatrixError`]; the operator overloads
//! (`&a + &b`, `&a * &b`, `-&a`, `m[(r, c)]`, ...) panic instead.
//!
//! ```
//! use dense_matrix::GenericMatrix;
//!
//! let a = GenericMatrix::from_rows(vec![
//!     vec![1, 0, 2],
//!     vec![-1, 5, 0],
//!     vec![0, 3, 1],
//! ]).unwrap();
//!
//! assert_eq!(a.determinant().unwrap(), -1);
//! assert_eq!(a.transpose().transpose(), a);
//! ```
//!
//! # Features
//! * `float`: the [`Matrix`] alias uses `f32` instead of `f64`.
//! * `unchecked`: skips every precondition check. Violating a precondition
//!   then panics on an out-of-bounds slice access or produces a meaningless
//!   result, and no [`MatrixError`] is ever returned. Only use it when the
//!   calling code is known to be correct.

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

/// The error type
pub mod error;

/// The main generic matrix
pub mod generic_matrix;

/// Matrices of `Float`
pub mod matrix;

/// The requirements for the matrix elements
pub mod traits;

mod ops;
mod serde_impl;

pub use crate::error::MatrixError;
pub use crate::generic_matrix::GenericMatrix;
pub use crate::matrix::Matrix;
pub use crate::traits::Element;
