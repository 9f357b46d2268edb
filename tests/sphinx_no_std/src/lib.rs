//! Builds `sphinx` without `std` to catch accidental dependencies on it.

#![no_std]

pub use sphinx::{CurveContext, CurvePoint, Error, Mask};
