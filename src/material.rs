use crate::*;

/// How a scattered path continues.
pub enum Scattered{
    /// Deterministic reflection or refraction; followed without pdf weighting.
    Specular(Ray),
    /// Direction still to be drawn from this distribution.
    Diffuse(Box<dyn Pdf>),
}

pub struct ScatterRecord{
    pub attenuation: Color,
    pub scattered: Scattered,
}

/// Surface response to light. Materials are shared across render threads.
pub trait Material: Send + Sync{
    /// `None` ends the path: the surface only emits (or absorbs).
    fn scatter(&self, _ray: &Ray, _record: &HitRecord, _rng: &mut dyn RngCore) -> Option<ScatterRecord>{
        None
    }
    fn emitted(&self, _ray: &Ray, _record: &HitRecord, _uv: UV, _p: &Point) -> Color{
        Color::ZERO
    }
    /// Density of the material's own lobe at `scattered`, which may have been
    /// drawn from some other distribution.
    fn scattering_pdf(&self, _ray: &Ray, _record: &HitRecord, _scattered: &Ray) -> Float{
        0.0
    }
}

/// Absorbs everything. Used for light-sampling stand-ins that are never shaded.
pub struct EmptyMaterial{}
impl Material for EmptyMaterial{}

pub struct Lambertian{
    tex: Arc<dyn Texture>
}

pub struct Metal{
    albedo: Color,
    fuzz: Float,
}

pub struct Dielectric{
    refractive_index: Float
}

pub struct DiffuseLight{
    tex: Arc<dyn Texture>
}

impl Lambertian{
    pub fn from_color(albedo:Color) -> Self{
        Self{tex:Arc::new(SolidColor::from_color(albedo))}
    }
    pub fn new(tex: Arc<dyn Texture>) -> Self{
        Self{tex}
    }
}

impl Metal{
    pub fn new(albedo: Color, fuzz: Float)->Self{
        Self{albedo, fuzz:fuzz.min(1.0)}
    }
}

impl Dielectric{
    pub fn new(refractive_index: Float)->Self{
        Self{refractive_index}
    }
    fn reflectance(cos: Float, ri: Float) -> Float{
        let r0 = {
            let rt = (1.-ri)/(1.+ri);
            rt*rt
        };
        r0 + (1.0-r0)*(1.0 - cos).powi(5)
    }
    /// Picks reflection or refraction for a unit incoming direction given a
    /// uniform `draw` in [0, 1). Total internal reflection ignores the draw.
    pub fn bend(&self, unit: &Vector, record: &HitRecord, draw: Float) -> Vector{
        let ri = if record.front {self.refractive_index.recip()} else {self.refractive_index};
        let cos = record.n.dot(-*unit).min(1.0);
        let sin = (1.0 - cos*cos).sqrt();
        if ri * sin > 1.0 || Dielectric::reflectance(cos, ri) > draw{
            unit.reflected(&record.n)
        } else{
            unit.refracted(&record.n, ri)
        }
    }
}

impl DiffuseLight{
    pub fn from_color(emit:Color) -> Self{
        Self{tex:Arc::new(SolidColor::from_color(emit))}
    }
    pub fn new(tex: Arc<dyn Texture>) -> Self{
        Self{tex}
    }
}

impl Material for Lambertian{
    fn scatter(&self, _ray: &Ray, record:&HitRecord, _rng: &mut dyn RngCore) -> Option<ScatterRecord>{
        let attenuation = self.tex.value(record.uv, &record.p);
        let scattered = Scattered::Diffuse(Box::new(CosinePdf::new(&record.n)));
        Some(ScatterRecord{attenuation, scattered})
    }
    fn scattering_pdf(&self, _ray: &Ray, record:&HitRecord, scattered: &Ray) -> Float {
        let cos = record.n.dot(scattered.dir.normalize());
        0f64.max(cos*FRAC_1_PI)
    }
}

impl Material for Metal{
    fn scatter(&self, ray: &Ray, record:&HitRecord, rng: &mut dyn RngCore) -> Option<ScatterRecord>{
        let reflected = ray.dir.normalize().reflected(&record.n) + self.fuzz*random_in_unit_sphere(rng);
        let scattered = Scattered::Specular(Ray::new(record.p, reflected, ray.time));
        Some(ScatterRecord{attenuation:self.albedo, scattered})
    }
}

impl Material for Dielectric{
    fn scatter(&self, ray: &Ray, record:&HitRecord, rng: &mut dyn RngCore) -> Option<ScatterRecord>{
        let dir = self.bend(&ray.dir.normalize(), record, random_double(rng));
        let scattered = Scattered::Specular(Ray::new(record.p, dir, ray.time));
        Some(ScatterRecord{attenuation:Color::ONE, scattered})
    }
}

impl Material for DiffuseLight{
    // one-sided: only the front face glows
    fn emitted(&self, _ray: &Ray, record:&HitRecord, uv: UV, p: &Point) -> Color {
        if record.front{
            self.tex.value(uv, p)
        } else {
            Color::ZERO
        }
    }
}
