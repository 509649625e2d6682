use crate::*;
/// Instance of a shape rotated about the y axis.
pub struct RotateY{
    sin: Float,
    cos: Float,
    object: Arc<dyn Hittable>
}

impl RotateY{
    pub fn new(object: Arc<dyn Hittable>, degrees: Float) -> Self{
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self{sin, cos, object}
    }
    fn to_object(&self, v: &Vector) -> Vector{
        Vector::new(self.cos*v.x - self.sin*v.z, v.y, self.sin*v.x + self.cos*v.z)
    }
    fn to_world(&self, v: &Vector) -> Vector{
        Vector::new(self.cos*v.x + self.sin*v.z, v.y, -self.sin*v.x + self.cos*v.z)
    }
}

impl Hittable for RotateY{
    fn hit(&self, ray: &Ray, t:&Interval) -> Option<HitRecord<'_>> {
        let rotated_ray = Ray{orig:self.to_object(&ray.orig), dir:self.to_object(&ray.dir), time:ray.time};
        self.object.hit(&rotated_ray, t).map(|record| {
            HitRecord{p:self.to_world(&record.p), n:self.to_world(&record.n), ..record}
        })
    }
    // computed per query so moving children are covered over the asked window
    fn bounding_box(&self, time0: Float, time1: Float) -> Option<AABB> {
        let bbox = self.object.bounding_box(time0, time1)?;
        let corners = (0..8).map(|i| {
            let x = if i & 1 == 0 {bbox.x.min} else {bbox.x.max};
            let y = if i & 2 == 0 {bbox.y.min} else {bbox.y.max};
            let z = if i & 4 == 0 {bbox.z.min} else {bbox.z.max};
            self.to_world(&Point::new(x, y, z))
        });
        let (min, max) = corners.fold((Point::splat(INFINITY), Point::splat(NEG_INFINITY)), |(min, max), p| (min.min(p), max.max(p)));
        Some(AABB::enclosing_point(&min, &max))
    }
    fn pdf_value(&self, orig: &Point, dir: &Vector) -> Float{
        self.object.pdf_value(&self.to_object(orig), &self.to_object(dir))
    }
    fn random_direction(&self, orig: &Point, rng: &mut dyn RngCore) -> Vector{
        self.to_world(&self.object.random_direction(&self.to_object(orig), rng))
    }
}
