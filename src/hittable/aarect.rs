use crate::*;

/// Box made of six axis-aligned rectangles. Faces on the minimum side are
/// flipped so every face reports `front` for rays arriving from outside.
pub fn make_box(a: Point, b: Point, mat: Arc<dyn Material>) -> Arc<HittableList> {
    let mut sides:HittableList  = HittableList::new();
    let min = a.min(b);
    let max = a.max(b);

    sides.add(Arc::new(AxisRect::xy(min.x, max.x, min.y, max.y, max.z, mat.clone()))); // front
    sides.add(Arc::new(FlipFace::new(Arc::new(AxisRect::xy(min.x, max.x, min.y, max.y, min.z, mat.clone()))))); // back
    sides.add(Arc::new(AxisRect::xz(min.x, max.x, min.z, max.z, max.y, mat.clone()))); // top
    sides.add(Arc::new(FlipFace::new(Arc::new(AxisRect::xz(min.x, max.x, min.z, max.z, min.y, mat.clone()))))); // bottom
    sides.add(Arc::new(AxisRect::yz(min.y, max.y, min.z, max.z, max.x, mat.clone()))); // right
    sides.add(Arc::new(FlipFace::new(Arc::new(AxisRect::yz(min.y, max.y, min.z, max.z, min.x, mat))))); // left
    Arc::new(sides)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plane{
    XY,
    XZ,
    YZ,
}

impl Plane{
    /// (first in-plane axis, second in-plane axis, normal axis)
    fn axes(self) -> (usize, usize, usize){
        match self{
            Plane::XY => (0, 1, 2),
            Plane::XZ => (0, 2, 1),
            Plane::YZ => (1, 2, 0),
        }
    }
}

/// Rectangle lying in an axis plane at coordinate `k` on the normal axis.
/// Its outward normal is the positive normal axis.
pub struct AxisRect{
    plane: Plane,
    a: Interval,
    b: Interval,
    k: Float,
    mat: Arc<dyn Material>,
}

impl AxisRect{
    pub fn new(plane: Plane, a0: Float, a1: Float, b0: Float, b1: Float, k: Float, mat: Arc<dyn Material>) -> Self{
        Self{plane, a:Interval::ordered(a0, a1), b:Interval::ordered(b0, b1), k, mat}
    }
    pub fn xy(x0: Float, x1: Float, y0: Float, y1: Float, k: Float, mat: Arc<dyn Material>) -> Self{
        Self::new(Plane::XY, x0, x1, y0, y1, k, mat)
    }
    pub fn xz(x0: Float, x1: Float, z0: Float, z1: Float, k: Float, mat: Arc<dyn Material>) -> Self{
        Self::new(Plane::XZ, x0, x1, z0, z1, k, mat)
    }
    pub fn yz(y0: Float, y1: Float, z0: Float, z1: Float, k: Float, mat: Arc<dyn Material>) -> Self{
        Self::new(Plane::YZ, y0, y1, z0, z1, k, mat)
    }
    pub fn area(&self) -> Float{
        self.a.len()*self.b.len()
    }
    fn normal(&self) -> Vector{
        let (_, _, k) = self.plane.axes();
        let mut n = Vector::ZERO;
        n[k] = 1.0;
        n
    }
    fn point(&self, a: Float, b: Float) -> Point{
        let (ai, bi, ki) = self.plane.axes();
        let mut p = Point::ZERO;
        p[ai] = a;
        p[bi] = b;
        p[ki] = self.k;
        p
    }
}

impl Hittable for AxisRect{
    fn hit(&self, ray: &Ray, t:&Interval) -> Option<HitRecord<'_>> {
        let (ai, bi, ki) = self.plane.axes();
        let root = (self.k - ray.orig[ki]) / ray.dir[ki];
        if !t.surrounds(root){
            return None;
        }
        let a = ray.orig[ai] + root*ray.dir[ai];
        let b = ray.orig[bi] + root*ray.dir[bi];
        if !self.a.contains(a) || !self.b.contains(b){
            return None;
        }
        let uv = UV::new((a - self.a.min)/self.a.len(), (b - self.b.min)/self.b.len());
        Some(HitRecord::new(ray, root, ray.at(root), self.normal(), uv, self.mat.as_ref()))
    }
    fn bounding_box(&self, _time0: Float, _time1: Float) -> Option<AABB> {
        Some(AABB::enclosing_point(&self.point(self.a.min, self.b.min), &self.point(self.a.max, self.b.max)))
    }
    fn pdf_value(&self, orig: &Point, dir: &Vector) -> Float{
        match self.hit(&Ray::new(*orig, *dir, 0.0), &Interval::new(0.001, INFINITY)){
            Some(record) => {
                let distance_squared = record.t*record.t*dir.length_squared();
                let cosine = (dir.dot(record.n) / dir.length()).abs();
                distance_squared / (cosine*self.area())
            },
            None => 0.0
        }
    }
    fn random_direction(&self, orig: &Point, rng: &mut dyn RngCore) -> Vector{
        let a = random_range(rng, self.a.min, self.a.max);
        let b = random_range(rng, self.b.min, self.b.max);
        self.point(a, b) - *orig
    }
}
