use crate::*;
use log::debug;

/// Everything the renderer needs: geometry, the subset of it that is sampled
/// as light, the radiance of escaped rays, and the viewpoint.
#[derive(Clone)]
pub struct Scene{
    pub world: Arc<dyn Hittable>,
    pub lights: HittableList,
    pub background: Color,
    pub camera: Camera,
}

const BLUE: Color = Color{x:0.7, y:0.8, z:1.0};

impl Scene{
    pub fn new(world: &HittableList, lights: HittableList, background: Color, camera: Camera) -> Result<Self, RenderError>{
        debug!("Building BVH over {} objects, {} lights", world.len(), lights.len());
        let (time0, time1) = camera.shutter();
        let bvh = BVHNode::from_hittable_list(world, time0, time1)?;
        Ok(Self{world:Arc::new(bvh), lights, background, camera})
    }

    fn cornell_camera(aspect_ratio: Float) -> Camera{
        Camera::new(Point::new(278., 278., -800.), Point::new(278., 278., 0.), Vector::Y, 40., aspect_ratio, 0.0, 10.0, 0.0, 1.0)
    }

    fn cornell_walls(world: &mut HittableList, light: Arc<dyn Material>){
        let red: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::new(0.65, 0.05, 0.05)));
        let white: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::new(0.73, 0.73, 0.73)));
        let green: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::new(0.12, 0.45, 0.15)));

        world.add(Arc::new(AxisRect::yz(0.0, 555.0, 0.0, 555.0, 555.0, green)));
        world.add(Arc::new(AxisRect::yz(0.0, 555.0, 0.0, 555.0, 0.0, red)));
        world.add(Arc::new(FlipFace::new(Arc::new(AxisRect::xz(213.0, 343.0, 227.0, 332.0, 554.0, light)))));
        world.add(Arc::new(AxisRect::xz(0.0, 555.0, 0.0, 555.0, 0.0, white.clone())));
        world.add(Arc::new(AxisRect::xz(0.0, 555.0, 0.0, 555.0, 555.0, white.clone())));
        world.add(Arc::new(AxisRect::xy(0.0, 555.0, 0.0, 555.0, 555.0, white)));
    }

    fn ceiling_light() -> Arc<dyn Hittable>{
        Arc::new(AxisRect::xz(213.0, 343.0, 227.0, 332.0, 554.0, Arc::new(EmptyMaterial{})))
    }

    /// Cornell box with a mirror-finish aluminium box and a glass sphere.
    /// Both the ceiling light and the sphere are importance sampled.
    pub fn cornell_box(aspect_ratio: Float) -> Result<Self, RenderError>{
        let mut world = HittableList::new();
        Self::cornell_walls(&mut world, Arc::new(DiffuseLight::from_color(Color::splat(15.0))));

        let aluminum: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.85, 0.88), 0.0));
        let box1 = make_box(Point::ZERO, Point::new(165.0, 330.0, 165.0), aluminum);
        let box1 = Arc::new(RotateY::new(box1, 15.0));
        world.add(Arc::new(Translate::new(box1, Vector::new(265.0, 0.0, 295.0))));

        let glass = Arc::new(Dielectric::new(1.5));
        world.add(Arc::new(Sphere::new(Point::new(190.0, 90.0, 190.0), 90.0, glass)));

        let mut lights = HittableList::new();
        lights.add(Self::ceiling_light());
        lights.add(Arc::new(Sphere::new(Point::new(190.0, 90.0, 190.0), 90.0, Arc::new(EmptyMaterial{}))));

        Self::new(&world, lights, Color::ZERO, Self::cornell_camera(aspect_ratio))
    }

    /// Cornell box with the two classic white blocks.
    pub fn cornell_classic(aspect_ratio: Float) -> Result<Self, RenderError>{
        let mut world = HittableList::new();
        Self::cornell_walls(&mut world, Arc::new(DiffuseLight::from_color(Color::splat(15.0))));
        let white: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::new(0.73, 0.73, 0.73)));

        let box1 = make_box(Point::ZERO, Point::new(165.0, 330.0, 165.0), white.clone());
        let box1 = Arc::new(RotateY::new(box1, 15.0));
        world.add(Arc::new(Translate::new(box1, Vector::new(265.0, 0.0, 295.0))));

        let box2 = make_box(Point::ZERO, Point::new(165.0, 165.0, 165.0), white);
        let box2 = Arc::new(RotateY::new(box2, -18.0));
        world.add(Arc::new(Translate::new(box2, Vector::new(130.0, 0.0, 65.0))));

        Self::new(&world, HittableList::from_object(Self::ceiling_light()), Color::ZERO, Self::cornell_camera(aspect_ratio))
    }

    /// Checkered ground with a ring of diffuse, metal and glass spheres under
    /// an open sky. Nothing is importance sampled.
    pub fn spheres(aspect_ratio: Float) -> Result<Self, RenderError>{
        let mut world = HittableList::new();
        let checker = Arc::new(CheckerTexture::from_color(0.32, Color::new(0.2, 0.3, 0.1), Color::new(0.9, 0.9, 0.9)));
        world.add(Arc::new(Sphere::new(Point::new(0.0, -1000.0, 0.0), 1000.0, Arc::new(Lambertian::new(checker)))));

        world.add(Arc::new(Sphere::new(Point::new(0.0, 1.0, 0.0), 1.0, Arc::new(Dielectric::new(1.5)))));
        world.add(Arc::new(Sphere::new(Point::new(-4.0, 1.0, 0.0), 1.0, Arc::new(Lambertian::from_color(Color::new(0.4, 0.2, 0.1))))));
        world.add(Arc::new(Sphere::new(Point::new(4.0, 1.0, 0.0), 1.0, Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)))));

        let n = 7;
        let step = 2.0*PI/n as Float;
        for a in 0..n{
            let angle = a as Float*step;
            let center = Point::new(6.0*angle.cos(), 0.3, 3.0*angle.sin());
            let mat: Arc<dyn Material> = match a % 3{
                0 => Arc::new(Lambertian::from_color(Color::new(0.8, 0.3, 0.3))),
                1 => Arc::new(Metal::new(Color::new(0.8, 0.8, 0.9), 0.3)),
                _ => Arc::new(Dielectric::new(1.5)),
            };
            if a % 3 == 0{
                // bounces during the shutter interval
                world.add(Arc::new(MovingSphere::new(center, center + Vector::new(0.0, 0.4, 0.0), 0.0, 1.0, 0.3, mat)));
            } else {
                world.add(Arc::new(Sphere::new(center, 0.3, mat)));
            }
        }

        let camera = Camera::new(Point::new(13., 2., 3.), Point::ZERO, Vector::Y, 20., aspect_ratio, 0.1, 10.0, 0.0, 1.0);
        Self::new(&world, HittableList::new(), BLUE, camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_scenes_build() {
        let cornell = Scene::cornell_box(1.0).unwrap();
        assert_eq!(cornell.lights.len(), 2);
        assert_eq!(cornell.background, Color::ZERO);
        let classic = Scene::cornell_classic(1.0).unwrap();
        assert_eq!(classic.lights.len(), 1);
        let spheres = Scene::spheres(16.0/9.0).unwrap();
        assert!(spheres.lights.is_empty());
        assert!(spheres.world.bounding_box(0.0, 1.0).is_some());
    }

    #[test]
    fn cornell_light_is_visible_from_below() {
        let scene = Scene::cornell_box(1.0).unwrap();
        let up = Ray::new(Point::new(278.0, 400.0, 278.0), Vector::Y, 0.0);
        let record = scene.world.hit(&up, &Interval::new(0.001, INFINITY)).unwrap();
        assert!((record.t - 154.0).abs() < 1e-9);
        assert_eq!(record.mat.emitted(&up, &record, record.uv, &record.p), Color::splat(15.0));
    }

    #[test]
    fn bvh_covers_the_camera_shutter() {
        let mat: Arc<dyn Material> = Arc::new(DiffuseLight::from_color(Color::ONE));
        let mut world = HittableList::new();
        world.add(Arc::new(MovingSphere::new(Point::new(0.0, 0.0, -5.0), Point::new(0.0, 10.0, -5.0), 0.0, 2.0, 1.0, mat.clone())));
        world.add(Arc::new(Sphere::new(Point::new(20.0, 0.0, -5.0), 1.0, mat)));
        let camera = Camera::new(Point::ZERO, -Point::Z, Vector::Y, 90.0, 1.0, 0.0, 1.0, 0.0, 2.0);
        assert_eq!(camera.shutter(), (0.0, 2.0));
        let scene = Scene::new(&world, HittableList::new(), Color::ZERO, camera).unwrap();

        let late = Ray::new(Point::new(0.0, 9.0, 0.0), -Vector::Z, 1.9);
        let t = Interval::new(0.001, INFINITY);
        assert!(world.hit(&late, &t).is_some());
        let record = scene.world.hit(&late, &t).unwrap();
        assert!((record.t - world.hit(&late, &t).unwrap().t).abs() < 1e-12);
    }
}
