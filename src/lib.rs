#![allow(non_snake_case)]
#![doc = include_str!("../Readme.md")]

///
/// This module contains the trait [`ring::Ring`], the basic contract every
/// ring (and thus every coefficient type) has to satisfy.
///
pub mod ring;
///
/// This module contains [`primitive_int::StaticRing`], the rings of machine integers.
///
pub mod primitive_int;
///
/// This module contains concrete rings, most importantly the polynomial
/// rings in [`rings::poly`].
///
pub mod rings;
///
/// This module contains algorithms on generic rings.
///
pub mod algorithms;
