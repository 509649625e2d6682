use crate::*;
pub struct Sphere{
    center: Point,
    radius: Float,
    mat: Arc<dyn Material>,
    bbox: AABB,
}

impl Hittable for Sphere{
    fn hit(&self, ray: &Ray, t:&Interval) -> Option<HitRecord<'_>>{
        let root = Sphere::nearest_root(self.center, self.radius, ray, t)?;
        let p = ray.at(root);
        let outward_normal = (p - self.center) / self.radius;
        Some(HitRecord::new(ray, root, p, outward_normal, Sphere::get_sphere_uv(&outward_normal), self.mat.as_ref()))
    }
    fn bounding_box(&self, _time0: Float, _time1: Float) -> Option<AABB> {
        Some(self.bbox)
    }
    fn pdf_value(&self, orig: &Point, dir: &Vector) -> Float{
        let distance_squared = (self.center - *orig).length_squared();
        if distance_squared <= self.radius*self.radius{
            return 0.25 * FRAC_1_PI;
        }
        match self.hit(&Ray::new(*orig, *dir, 0.0), &Interval::new(0.001, INFINITY)){
            Some(_) => {
                let cos_max = (1.0 - self.radius*self.radius/distance_squared).sqrt();
                let solid_angle = 2.0*PI*(1.0 - cos_max);
                solid_angle.recip()
            },
            None => 0.0
        }
    }
    fn random_direction(&self, orig: &Point, rng: &mut dyn RngCore) -> Vector{
        let direction = self.center - *orig;
        let distance_squared = direction.length_squared();
        if distance_squared <= self.radius*self.radius{
            // inside the sphere every direction reaches it
            return random_unit_vector(rng);
        }
        let uvw = Onb::new(&direction);
        uvw.local(&random_to_sphere(rng, self.radius, distance_squared))
    }
}

impl Sphere{
    pub fn new(center: Point, radius: Float, mat: Arc<dyn Material>) -> Self{
        let r = Vector::ONE*radius.abs();
        let bbox = AABB::enclosing_point(&(center - r), &(center + r));
        Sphere{center, radius, mat, bbox}
    }
    pub(crate) fn nearest_root(center: Point, radius: Float, ray: &Ray, t: &Interval) -> Option<Float>{
        let oc = center - ray.orig;
        let a = ray.dir.length_squared();
        let h = ray.dir.dot(oc);
        let c = oc.length_squared() - radius*radius;
        let discriminant = h*h - a*c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();
        [(h - sqrtd) / a, (h + sqrtd) / a].into_iter().find(|root| t.surrounds(*root))
    }
    pub(crate) fn get_sphere_uv(p: &Point) -> UV{
        let t = (-p.y).acos();
        let f = (-p.z).atan2(p.x) + PI;
        let u = f/(2.*PI);
        let v = t/PI;
        UV{x:u, y:v}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn light_sphere() -> Sphere{
        Sphere::new(Point::new(0.0, 0.0, -5.0), 1.0, Arc::new(EmptyMaterial{}))
    }

    #[test]
    fn hit_front_and_back() {
        let sphere = Sphere::new(Point::new(0.0, 0.0, -1.0), 0.5, Arc::new(EmptyMaterial{}));
        let ray = Ray::new(Point::ZERO, -Vector::Z, 0.0);
        let record = sphere.hit(&ray, &Interval::new(0.001, INFINITY)).unwrap();
        assert!((record.t - 0.5).abs() < 1e-9);
        assert!(record.front);
        assert_eq!(record.n, Vector::Z);

        let inside = Ray::new(Point::new(0.0, 0.0, -1.0), -Vector::Z, 0.0);
        let record = sphere.hit(&inside, &Interval::new(0.001, INFINITY)).unwrap();
        assert!(!record.front);
        assert_eq!(record.n, Vector::Z);
    }

    #[test]
    fn miss() {
        let sphere = Sphere::new(Point::new(0.0, 0.0, -1.0), 0.5, Arc::new(EmptyMaterial{}));
        let ray = Ray::new(Point::ZERO, Vector::Y, 0.0);
        assert!(sphere.hit(&ray, &Interval::new(0.001, INFINITY)).is_none());
    }

    #[test]
    fn sampled_directions_have_positive_density() {
        let sphere = light_sphere();
        let lights = HittableList::from_object(Arc::new(light_sphere()));
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2000 {
            let d = sphere.random_direction(&Point::ZERO, &mut rng);
            assert!(lights.pdf_value(&Point::ZERO, &d) > 0.0);
        }
    }

    #[test]
    fn density_matches_solid_angle() {
        let sphere = light_sphere();
        let cos_max = (1.0 - 1.0/25.0 as Float).sqrt();
        let expected = 1.0 / (2.0*PI*(1.0 - cos_max));
        assert!((sphere.pdf_value(&Point::ZERO, &-Vector::Z) - expected).abs() < 1e-9);
        assert_eq!(sphere.pdf_value(&Point::ZERO, &Vector::Z), 0.0);
    }

    #[test]
    fn origin_inside_falls_back_to_uniform() {
        let sphere = light_sphere();
        let orig = Point::new(0.0, 0.0, -5.0);
        let mut rng = StdRng::seed_from_u64(9);
        let d = sphere.random_direction(&orig, &mut rng);
        assert!((d.length() - 1.0).abs() < 1e-9);
        assert!((sphere.pdf_value(&orig, &d) - 0.25*FRAC_1_PI).abs() < 1e-12);
    }
}
