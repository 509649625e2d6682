use crate::*;
pub struct BVHNode{
    left: Arc<dyn Hittable>,
    right: Arc<dyn Hittable>,
    bbox: AABB
}

impl Hittable for BVHNode{
    fn hit(&self, ray: &Ray, t:&Interval) -> Option<HitRecord<'_>>{
        if !self.bbox.hit(ray, t){
            None
        } else {
            self.left.hit(ray, t).map_or_else(
                || self.right.hit(ray, t),
                |record| {
                    self.right.hit(ray, &Interval {
                        min: t.min,
                        max: record.t,
                    }).filter(|closer| closer.t < record.t).or(Some(record))
                },
            )
        }
    }
    fn bounding_box(&self, _time0: Float, _time1: Float) -> Option<AABB> {
        Some(self.bbox)
    }
}

impl BVHNode{
    pub fn from_hittable_list(list: &HittableList, time0: Float, time1: Float) -> Result<Self, RenderError>{
        let mut objects = list.objects.iter()
            .map(|object| object.bounding_box(time0, time1).map(|bbox| (object.clone(), bbox)).ok_or(RenderError::Unbounded))
            .collect::<Result<Vec<_>, _>>()?;
        if objects.is_empty(){
            return Err(RenderError::EmptyScene);
        }
        Ok(Self::from_slice(&mut objects))
    }
    fn from_slice(objects: &mut [(Arc<dyn Hittable>, AABB)]) -> Self{
        let bbox = objects.iter().fold(AABB::NONE, |bbox, (_, b)| AABB::enclosing_volume(&bbox, b));
        let axis = bbox.longest_axis();

        let (left, right) = match objects.len() {
            1 => {
                (objects[0].0.clone(), objects[0].0.clone())
            },
            2 => {
                (objects[0].0.clone(), objects[1].0.clone())
            },
            span => {
                objects.sort_by(|(_, a), (_, b)| a[axis].min.total_cmp(&b[axis].min));
                let (lo, hi) = objects.split_at_mut(span/2);
                let left = Arc::new(BVHNode::from_slice(lo));
                let right = Arc::new(BVHNode::from_slice(hi));
                (left as Arc<dyn Hittable>, right as Arc<dyn Hittable>)
            }
        };
        Self{left, right, bbox}
    }
}
