use crate::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval{
    pub min:Float,
    pub max:Float,
}

impl Add<Float> for Interval{
    type Output = Interval;
    fn add(self, rhs: Float) -> Self::Output {
        Interval{min:self.min + rhs, max:self.max + rhs}
    }
}

impl Interval{
    pub const NONE: Self = Self{min:INFINITY, max:NEG_INFINITY};
    pub const ALL: Self = Self{min:NEG_INFINITY, max:INFINITY};
    pub const fn new(min:Float, max:Float) -> Self{
        Self{min, max}
    }
    pub fn len(&self) -> Float{
        self.max - self.min
    }
    pub fn contains(&self, x:Float) -> bool{
        self.min <= x && x <= self.max
    }
    pub fn surrounds(&self, x:Float) -> bool{
        self.min < x && x < self.max
    }
    pub fn clamp(&self, x:Float) -> Float{
        x.clamp(self.min, self.max)
    }
    pub fn expanded(&self, d:Float) -> Interval{
        Interval{min:self.min-d, max:self.max+d}
    }
    pub fn ordered(x:Float, y:Float) -> Self{
        let (min, max) = if x>=y {(y, x)} else {(x, y)};
        Self{min, max}
    }
    pub fn enclosing(a: &Self, b:&Self) -> Self{
        let min = a.min.min(b.min);
        let max = a.max.max(b.max);
        Interval{min, max}
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray{
    pub orig:Point,
    pub dir:Vector,
    /// Shutter time the ray was cast at, used by moving geometry.
    pub time:Float,
}

impl Ray{
    pub fn new(orig:Point, dir:Vector, time:Float) -> Self{
        Self{orig, dir, time}
    }
    pub fn at(&self, t:Float) -> Point{
        self.orig + t*self.dir
    }
}

/// Orthonormal basis whose `w` axis is a given direction.
#[derive(Clone, Copy, Debug)]
pub struct Onb{
    pub u: Vector,
    pub v: Vector,
    pub w: Vector,
}

impl Onb{
    pub fn new(n: &Vector) -> Self{
        let w = n.normalize();
        let a = if w.x.abs() > 0.9 {Vector::Y} else {Vector::X};
        let v = w.cross(a).normalize();
        let u = w.cross(v);
        Self{u, v, w}
    }
    pub fn local(&self, a: &Vector) -> Vector{
        a.x*self.u + a.y*self.v + a.z*self.w
    }
}

pub trait VectorExt{
    fn reflected(&self, n: &Self) -> Self;
    fn refracted(&self, n: &Self, eta_ratio: Float) -> Self;
}

impl VectorExt for Vector{
    fn reflected(&self, n: &Self) -> Self{
        *self - 2.0*self.dot(*n)*(*n)
    }
    // self must be a unit vector
    fn refracted(&self, n: &Self, eta_ratio: Float) -> Self{
        let cos = (-*self).dot(*n).min(1.0);
        let perp = eta_ratio * (*self + cos*(*n));
        let parallel = -(1.0 - perp.length_squared()).abs().sqrt() * (*n);
        perp + parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_surrounds_is_strict() {
        let t = Interval::new(0.0, 1.0);
        assert!(t.contains(1.0));
        assert!(!t.surrounds(1.0));
        assert!(t.surrounds(0.5));
        assert!(Interval::NONE.len() < 0.0);
    }

    #[test]
    fn ray_at() {
        let ray = Ray::new(Point::ZERO, Vector::new(1.0, 2.0, 3.0), 0.5);
        assert_eq!(ray.at(2.0), Point::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn onb_is_orthonormal() {
        for n in [Vector::Y, Vector::X, Vector::new(1.0, -2.0, 0.5)] {
            let onb = Onb::new(&n);
            assert!((onb.u.length() - 1.0).abs() < 1e-12);
            assert!((onb.v.length() - 1.0).abs() < 1e-12);
            assert!(onb.u.dot(onb.v).abs() < 1e-12);
            assert!(onb.u.dot(onb.w).abs() < 1e-12);
            assert!(onb.v.dot(onb.w).abs() < 1e-12);
            let z = onb.local(&Vector::Z);
            assert!((z - n.normalize()).length() < 1e-12);
        }
    }

    #[test]
    fn reflect_and_refract() {
        let d = Vector::new(1.0, -1.0, 0.0).normalize();
        let r = d.reflected(&Vector::Y);
        assert!((r - Vector::new(1.0, 1.0, 0.0).normalize()).length() < 1e-12);

        // index ratio of one passes straight through
        let t = d.refracted(&Vector::Y, 1.0);
        assert!((t - d).length() < 1e-12);

        // entering a denser medium bends towards the normal
        let t = d.refracted(&Vector::Y, 1.0 / 1.5);
        assert!(t.y < 0.0);
        assert!(t.x < d.x);
        assert!((t.length() - 1.0).abs() < 1e-9);
    }
}
