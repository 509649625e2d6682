use crate::*;

/// Thin-lens camera with a shutter interval for motion blur.
#[derive(Clone, Debug)]
pub struct Camera{
    origin: Point,
    lower_left_corner: Point,
    horizontal: Vector,
    vertical: Vector,
    u: Vector,
    v: Vector,
    lens_radius: Float,
    time0: Float,
    time1: Float,
}

impl Camera{
    #[allow(clippy::too_many_arguments)]
    pub fn new(lookfrom: Point, lookat: Point, vup: Vector, vfov: Float, aspect_ratio: Float, aperture: Float, focus_dist: Float, time0: Float, time1: Float) -> Self {
        let h = (vfov/2.).to_radians().tan();
        let viewport_h = 2.0*h;
        let viewport_w = aspect_ratio*viewport_h;

        let w = (lookfrom-lookat).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let origin = lookfrom;
        let horizontal = focus_dist*viewport_w*u;
        let vertical = focus_dist*viewport_h*v;
        let lower_left_corner = origin - horizontal/2.0 - vertical/2.0 - focus_dist*w;
        Camera{
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: aperture/2.0,
            time0,
            time1,
        }
    }
    /// Shutter interval rays are timed within; also the window bounding
    /// boxes must cover for moving geometry.
    pub fn shutter(&self) -> (Float, Float){
        (self.time0, self.time1)
    }
    /// Ray through normalized image coordinates; (0, 0) is the lower left
    /// corner and (1, 1) the upper right.
    pub fn get_ray(&self, s: Float, t: Float, rng: &mut dyn RngCore) -> Ray{
        let rd = self.lens_radius*random_in_unit_disk(rng);
        let offset = self.u*rd.x + self.v*rd.y;
        let time = if self.time1 > self.time0 {random_range(rng, self.time0, self.time1)} else {self.time0};
        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s*self.horizontal + t*self.vertical - self.origin - offset,
            time,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pinhole() -> Camera{
        Camera::new(Point::new(278.0, 278.0, -800.0), Point::new(278.0, 278.0, 0.0), Vector::Y, 40.0, 1.0, 0.0, 10.0, 0.0, 1.0)
    }

    #[test]
    fn center_ray_looks_at_target() {
        let camera = pinhole();
        let mut rng = StdRng::seed_from_u64(0);
        let ray = camera.get_ray(0.5, 0.5, &mut rng);
        assert_eq!(ray.orig, Point::new(278.0, 278.0, -800.0));
        assert!((ray.dir.normalize() - Vector::Z).length() < 1e-9);
        assert!((0.0..1.0).contains(&ray.time));
    }

    #[test]
    fn corners_span_field_of_view() {
        let camera = pinhole();
        let mut rng = StdRng::seed_from_u64(0);
        let top = camera.get_ray(0.5, 1.0, &mut rng).dir.normalize();
        let bottom = camera.get_ray(0.5, 0.0, &mut rng).dir.normalize();
        let angle = top.angle_between(bottom).to_degrees();
        assert!((angle - 40.0).abs() < 1e-6);
        assert!(top.y > 0.0 && bottom.y < 0.0);
    }

    #[test]
    fn lens_jitters_origin() {
        let camera = Camera::new(Point::ZERO, -Point::Z, Vector::Y, 90.0, 1.0, 2.0, 1.0, 0.0, 0.0);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let ray = camera.get_ray(0.5, 0.5, &mut rng);
            assert!(ray.orig.length() < 1.0);
            assert_eq!(ray.orig.z, 0.0);
            assert_eq!(ray.time, 0.0);
            // every lens sample converges on the focus plane
            assert!((ray.at(1.0) - -Point::Z).length() < 1e-9);
        }
    }
}
