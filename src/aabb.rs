use crate::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AABB{
    pub x: Interval,
    pub y: Interval,
    pub z: Interval
}

impl Index<usize> for AABB {
    type Output = Interval;
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index out of bounds: {}", index),
        }
    }
}

impl Add<Vector> for AABB{
    type Output = AABB;
    fn add(self, offset: Vector) -> Self::Output{
        let x = self.x + offset.x;
        let y = self.y + offset.y;
        let z = self.z + offset.z;
        Self::Output{x, y, z}
    }
}

impl AABB{
    pub const NONE: Self = Self{
        x:Interval::NONE,
        y:Interval::NONE,
        z:Interval::NONE,
    };
    pub fn enclosing_point(a: &Point, b: &Point) -> Self{
        let x = Interval::ordered(a.x, b.x);
        let y = Interval::ordered(a.y, b.y);
        let z = Interval::ordered(a.z, b.z);
        Self{x, y, z}.padded()
    }
    pub fn enclosing_volume(a: &Self, b: &Self) -> Self{
        let x = Interval::enclosing(&a.x, &b.x);
        let y = Interval::enclosing(&a.y, &b.y);
        let z = Interval::enclosing(&a.z, &b.z);
        Self{x, y, z}
    }
    pub fn min(&self) -> Point{
        Point::new(self.x.min, self.y.min, self.z.min)
    }
    pub fn max(&self) -> Point{
        Point::new(self.x.max, self.y.max, self.z.max)
    }
    pub fn hit(&self, ray: &Ray, ray_t: &Interval) -> bool{
        let (mut t_min, mut t_max) = (ray_t.min, ray_t.max);
        for axis in 0..3{
            let interval = &self[axis];
            let dinv = ray.dir[axis].recip();
            let from = ray.orig[axis];

            let t0 = (interval.min - from) * dinv;
            let t1 = (interval.max - from) * dinv;

            let (t0, t1) = if t0<=t1 {(t0, t1)} else {(t1, t0)};
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_max <= t_min {return false;}
        }
        true
    }
    pub fn longest_axis(&self) -> usize {
        if self.x.len() > self.y.len() && self.x.len() > self.z.len() {
            0
        } else if self.y.len() > self.z.len() {
            1
        } else {
            2
        }
    }
    // flat boxes (axis-aligned rectangles) still need a slab to hit
    fn padded(self) -> Self{
        const DELTA: Float = 0.0001;
        let x = if self.x.len() < DELTA { self.x.expanded(DELTA/2.0) } else {self.x};
        let y = if self.y.len() < DELTA { self.y.expanded(DELTA/2.0) } else {self.y};
        let z = if self.z.len() < DELTA { self.z.expanded(DELTA/2.0) } else {self.z};
        Self{x, y, z}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_covers_both() {
        let a = AABB::enclosing_point(&Point::ZERO, &Point::ONE);
        let b = AABB::enclosing_point(&Point::new(2.0, -1.0, 0.5), &Point::new(3.0, 0.0, 0.6));
        let u = AABB::enclosing_volume(&a, &b);
        assert_eq!(u.min(), Point::new(0.0, -1.0, 0.0));
        assert_eq!(u.max(), Point::new(3.0, 1.0, 1.0));
    }

    #[test]
    fn flat_box_is_padded() {
        let flat = AABB::enclosing_point(&Point::new(0.0, 1.0, 0.0), &Point::new(1.0, 1.0, 1.0));
        assert!(flat.y.len() > 0.0);
        let ray = Ray::new(Point::new(0.5, 5.0, 0.5), -Vector::Y, 0.0);
        assert!(flat.hit(&ray, &Interval::new(0.001, INFINITY)));
    }

    #[test]
    fn slab_miss() {
        let b = AABB::enclosing_point(&Point::ZERO, &Point::ONE);
        let ray = Ray::new(Point::new(5.0, 5.0, 5.0), Vector::X, 0.0);
        assert!(!b.hit(&ray, &Interval::new(0.001, INFINITY)));
        assert_eq!(b.longest_axis(), 2);
    }
}
