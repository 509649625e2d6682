//! Monte Carlo path tracer with light importance sampling.
//!
//! Scenes are built from [`Hittable`] shapes carrying [`Material`]s. The
//! [`estimate_radiance`] integrator mixes light sampling with each material's
//! own scattering distribution, and [`render()`] drives it across every pixel
//! of the image in parallel.

use glam::{DVec2, DVec3};
use rand::{Rng, RngCore};
use std::f64::consts::{FRAC_1_PI, PI};
use std::f64::{INFINITY, NEG_INFINITY};
use std::ops::{Add, Index};
use std::sync::Arc;

pub mod aabb;
pub mod bvh;
pub mod camera;
pub mod error;
pub mod hitrecord;
pub mod hittable;
pub mod image;
pub mod integrator;
pub mod material;
pub mod math;
pub mod pdf;
pub mod random;
pub mod render;
pub mod scene;
pub mod texture;

pub use aabb::*;
pub use bvh::*;
pub use camera::*;
pub use error::*;
pub use hitrecord::*;
pub use hittable::*;
pub use image::*;
pub use integrator::*;
pub use material::*;
pub use math::*;
pub use pdf::*;
pub use random::*;
pub use render::*;
pub use scene::*;
pub use texture::*;

pub type Color = DVec3;
pub type Point = DVec3;
pub type Vector = DVec3;
pub type UV = DVec2;
pub type Float = f64;
