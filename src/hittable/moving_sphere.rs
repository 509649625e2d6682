use crate::*;
/// Sphere whose center moves linearly between two shutter times.
pub struct MovingSphere{
    center0: Point,
    center1: Point,
    time0: Float,
    time1: Float,
    radius: Float,
    mat: Arc<dyn Material>,
}

impl MovingSphere{
    pub fn new(center0: Point, center1: Point, time0: Float, time1: Float, radius: Float, mat: Arc<dyn Material>) -> Self{
        Self{center0, center1, time0, time1, radius, mat}
    }
    pub fn center(&self, time: Float) -> Point{
        if self.time1 == self.time0{
            return self.center0;
        }
        self.center0 + ((time - self.time0)/(self.time1 - self.time0))*(self.center1 - self.center0)
    }
}

impl Hittable for MovingSphere{
    fn hit(&self, ray: &Ray, t:&Interval) -> Option<HitRecord<'_>>{
        let center = self.center(ray.time);
        let root = Sphere::nearest_root(center, self.radius, ray, t)?;
        let p = ray.at(root);
        let outward_normal = (p - center) / self.radius;
        Some(HitRecord::new(ray, root, p, outward_normal, Sphere::get_sphere_uv(&outward_normal), self.mat.as_ref()))
    }
    fn bounding_box(&self, time0: Float, time1: Float) -> Option<AABB> {
        let r = Vector::ONE*self.radius.abs();
        let (c0, c1) = (self.center(time0), self.center(time1));
        let box0 = AABB::enclosing_point(&(c0 - r), &(c0 + r));
        let box1 = AABB::enclosing_point(&(c1 - r), &(c1 + r));
        Some(AABB::enclosing_volume(&box0, &box1))
    }
}
