use crate::*;
/// Reports every hit on the wrapped shape with the opposite facing, turning a
/// one-sided emitter around without moving it.
pub struct FlipFace{
    object: Arc<dyn Hittable>,
}

impl FlipFace{
    pub fn new(object: Arc<dyn Hittable>) -> Self{
        Self{object}
    }
}

impl Hittable for FlipFace{
    fn hit(&self, ray: &Ray, t:&Interval) -> Option<HitRecord<'_>> {
        self.object.hit(ray, t).map(|r| HitRecord{front:!r.front, ..r})
    }
    fn bounding_box(&self, time0: Float, time1: Float) -> Option<AABB> {
        self.object.bounding_box(time0, time1)
    }
    fn pdf_value(&self, orig: &Point, dir: &Vector) -> Float{
        self.object.pdf_value(orig, dir)
    }
    fn random_direction(&self, orig: &Point, rng: &mut dyn RngCore) -> Vector{
        self.object.random_direction(orig, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downward_facing_light() {
        let light = Arc::new(DiffuseLight::from_color(Color::splat(15.0)));
        let rect = Arc::new(AxisRect::xz(-1.0, 1.0, -1.0, 1.0, 5.0, light));
        let flipped = FlipFace::new(rect.clone());
        let up = Ray::new(Point::ZERO, Vector::Y, 0.0);
        let t = Interval::new(0.001, INFINITY);

        let plain = rect.hit(&up, &t).unwrap();
        assert_eq!(plain.mat.emitted(&up, &plain, plain.uv, &plain.p), Color::ZERO);

        let record = flipped.hit(&up, &t).unwrap();
        assert!(record.front);
        assert_eq!(record.mat.emitted(&up, &record, record.uv, &record.p), Color::splat(15.0));
    }
}
