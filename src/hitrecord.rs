use crate::*;

/// Surface interaction produced by a successful intersection. Borrows the
/// material of the shape that was hit, so it cannot outlive the scene.
#[derive(Clone, Copy)]
pub struct HitRecord<'a>{
    pub p: Point,
    pub n: Vector,
    pub t: Float,
    pub mat: &'a dyn Material,
    pub front: bool,
    pub uv: UV,
}

impl<'a> HitRecord<'a>{
    /// Builds a record with the normal oriented against the incoming ray.
    pub fn new(ray: &Ray, t: Float, p: Point, outward_normal: Vector, uv: UV, mat: &'a dyn Material) -> Self{
        let front = outward_normal.dot(ray.dir) < 0.;
        let n = if front {outward_normal} else {-outward_normal};
        Self{p, n, t, mat, front, uv}
    }
}
