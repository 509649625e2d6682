use crate::*;
/// Instance of a shape displaced by a fixed offset.
pub struct Translate{
    offset: Vector,
    object: Arc<dyn Hittable>,
}

impl Translate{
    pub fn new(object: Arc<dyn Hittable>, offset: Vector) -> Self{
        Self{object, offset}
    }
}

impl Hittable for Translate{
    fn hit(&self, ray: &Ray, t:&Interval) -> Option<HitRecord<'_>> {
        let offset_ray = Ray{orig:ray.orig-self.offset, ..*ray};
        self.object.hit(&offset_ray, t).map(|r| HitRecord{p:r.p+self.offset, ..r})
    }
    fn bounding_box(&self, time0: Float, time1: Float) -> Option<AABB> {
        self.object.bounding_box(time0, time1).map(|bbox| bbox + self.offset)
    }
    fn pdf_value(&self, orig: &Point, dir: &Vector) -> Float{
        self.object.pdf_value(&(*orig - self.offset), dir)
    }
    fn random_direction(&self, orig: &Point, rng: &mut dyn RngCore) -> Vector{
        self.object.random_direction(&(*orig - self.offset), rng)
    }
}
