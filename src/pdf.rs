use crate::*;

/// Distribution over outgoing directions.
pub trait Pdf{
    /// Density of `dir` with respect to solid angle.
    fn value(&self, dir: &Vector) -> Float;
    fn generate(&self, rng: &mut dyn RngCore) -> Vector;
}

/// Cosine-weighted hemisphere around a surface normal.
pub struct CosinePdf{
    onb: Onb
}

impl CosinePdf{
    pub fn new(normal: &Vector) -> Self{
        Self{onb:Onb::new(normal)}
    }
}

impl Pdf for CosinePdf{
    fn value(&self, dir: &Vector) -> Float {
        let cos = dir.normalize().dot(self.onb.w);
        0f64.max(cos*FRAC_1_PI)
    }
    fn generate(&self, rng: &mut dyn RngCore) -> Vector {
        self.onb.local(&random_cosine_direction(rng))
    }
}

/// Samples directions from `orig` towards a set of shapes, typically the
/// scene's lights.
pub struct HittablePdf<'a>{
    objects: &'a dyn Hittable,
    orig: Point
}

impl<'a> HittablePdf<'a>{
    pub fn new(objects: &'a dyn Hittable, orig: Point)->Self{
        Self{objects,orig}
    }
}

impl<'a> Pdf for HittablePdf<'a> {
    fn value(&self, dir: &Vector) -> Float {
        self.objects.pdf_value(&self.orig, dir)
    }
    fn generate(&self, rng: &mut dyn RngCore) -> Vector {
        self.objects.random_direction(&self.orig, rng)
    }
}

/// Equal-weight mixture of two strategies. Averaging both densities keeps the
/// estimate unbiased whichever strategy produced the direction.
pub struct MixturePdf<'a> {
    left: &'a dyn Pdf,
    right: &'a dyn Pdf,
}

impl<'a> MixturePdf<'a> {
    pub fn new(left: &'a dyn Pdf, right: &'a dyn Pdf) -> Self {
        Self { left, right }
    }
}

impl<'a> Pdf for MixturePdf<'a> {
    fn value(&self, dir: &Vector) -> Float {
        0.5 * self.left.value(dir) + 0.5 * self.right.value(dir)
    }
    fn generate(&self, rng: &mut dyn RngCore) -> Vector {
        if random_double(rng) < 0.5 {self.left.generate(rng)} else {self.right.generate(rng)}
    }
}
