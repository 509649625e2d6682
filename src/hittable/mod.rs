use crate::*;
pub mod sphere;
pub mod moving_sphere;
pub mod aarect;
pub mod hittable_list;
pub mod rotate;
pub mod translate;
pub mod flip_face;

pub use sphere::*;
pub use moving_sphere::*;
pub use aarect::*;
pub use hittable_list::*;
pub use rotate::*;
pub use translate::*;
pub use flip_face::*;

/// Anything a ray can intersect.
///
/// Shapes are shared read-only across render threads, hence the `Send + Sync`
/// bound. Only shapes that act as light sources for importance sampling need
/// to override [`Hittable::pdf_value`] and [`Hittable::random_direction`].
pub trait Hittable: Send + Sync{
    /// Nearest intersection with a parametric distance strictly inside `t`.
    fn hit(&self, ray: &Ray, t:&Interval) -> Option<HitRecord<'_>>;
    /// `None` for unbounded geometry.
    fn bounding_box(&self, time0: Float, time1: Float) -> Option<AABB>;
    /// Density, with respect to solid angle at `orig`, of sampling `dir`
    /// through [`Hittable::random_direction`].
    fn pdf_value(&self, _orig: &Point, _dir: &Vector) -> Float{
        0.0
    }
    fn random_direction(&self, _orig: &Point, _rng: &mut dyn RngCore) -> Vector{
        Vector::X
    }
}
