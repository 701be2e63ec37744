//! Angle normalization helpers
//!
//! Independent of the filter. [`Angle`] stores a value wrapped into
//! `[-π, π)`; arithmetic on angles re-wraps the result, so the sum of two
//! angles just past `π/2` lands near `-π` instead of beyond `π`.
//!
//! Generic over [`nalgebra::RealField`] scalars (`f32`, `f64`).

use std::ops::{Add, Sub};

use nalgebra::RealField;

/// Wrap `t` into `[0, 2π)`
///
/// Rounding can yield exactly `2π` for inputs a hair below a multiple of `2π`.
#[inline]
pub fn mod_two_pi<T: RealField + Copy>(t: T) -> T {
    let full_turn = T::two_pi();
    let signed_mod = t % full_turn;
    if signed_mod < T::zero() {
        full_turn + signed_mod
    } else {
        signed_mod
    }
}

/// Wrap `t` into `[-π, π)`
#[inline]
pub fn wrap_to_pi<T: RealField + Copy>(t: T) -> T {
    let wrapped = mod_two_pi(t + T::pi()) - T::pi();
    // mod_two_pi may round up to a full turn
    if wrapped >= T::pi() {
        -T::pi()
    } else {
        wrapped
    }
}

/// Planar angle in radians, always in `[-π, π)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle<T: RealField + Copy> {
    value: T,
}

impl<T: RealField + Copy> Angle<T> {
    /// Wrap `alpha` (radians) into an angle
    pub fn new(alpha: T) -> Self {
        Self {
            value: wrap_to_pi(alpha),
        }
    }

    /// Angle from degrees
    pub fn from_degrees(deg: T) -> Self {
        Self::new(T::pi() * deg / nalgebra::convert::<f64, T>(180.0))
    }

    /// Wrapped value in radians
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Wrapped value in degrees, in `[-180, 180)`
    pub fn to_degrees(&self) -> T {
        nalgebra::convert::<f64, T>(180.0) * self.value / T::pi()
    }

    /// Unsigned shortest distance between two angles, in `[0, π]`
    pub fn distance(alpha: Self, beta: Self) -> T {
        (beta - alpha).value.abs()
    }
}

impl<T: RealField + Copy> Default for Angle<T> {
    fn default() -> Self {
        Self { value: T::zero() }
    }
}

impl<T: RealField + Copy> Add for Angle<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<T: RealField + Copy> Sub for Angle<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}
