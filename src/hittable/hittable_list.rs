use crate::*;

/// Aggregate of shapes, used both for whole scenes and for the set of
/// lights handed to the integrator.
#[derive(Clone, Default)]
pub struct HittableList{
    pub objects: Vec<Arc<dyn Hittable>>,
}

impl HittableList{
    pub fn new() -> Self{
        HittableList{objects:Vec::new()}
    }
    pub fn from_object(object: Arc<dyn Hittable>) -> Self{
        HittableList{objects:vec![object]}
    }
    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.objects.push(object);
    }
    pub fn len(&self) -> usize{
        self.objects.len()
    }
    pub fn is_empty(&self) -> bool{
        self.objects.is_empty()
    }
}

impl Hittable for HittableList{
    fn hit(&self, ray: &Ray, t:&Interval) -> Option<HitRecord<'_>>{
        // Each child is only asked for hits closer than the best so far. A
        // later child reporting exactly the same distance does not replace
        // the record, so the earliest child in insertion order wins ties.
        let mut closest: Option<HitRecord<'_>> = None;
        let mut t_least = t.max;
        for object in &self.objects{
            if let Some(record) = object.hit(ray, &Interval{min:t.min, max:t_least}){
                if closest.is_none() || record.t < t_least{
                    t_least = record.t;
                    closest = Some(record);
                }
            }
        }
        closest
    }
    fn bounding_box(&self, time0: Float, time1: Float) -> Option<AABB> {
        let (first, rest) = self.objects.split_first()?;
        rest.iter().try_fold(first.bounding_box(time0, time1)?, |bbox, object| {
            object.bounding_box(time0, time1).map(|b| AABB::enclosing_volume(&bbox, &b))
        })
    }
    fn pdf_value(&self, orig: &Point, dir: &Vector) -> Float{
        if self.objects.is_empty(){
            return 0.0;
        }
        let weight = (self.objects.len() as Float).recip();
        self.objects.iter().map(|object| weight*object.pdf_value(orig, dir)).sum()
    }
    fn random_direction(&self, orig: &Point, rng: &mut dyn RngCore) -> Vector{
        match self.objects.len(){
            0 => Vector::X,
            n => self.objects[random_int(rng, 0, n-1)].random_direction(orig, rng),
        }
    }
}
