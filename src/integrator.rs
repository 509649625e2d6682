//! Recursive radiance estimator.
//!
//! Diffuse bounces draw their next direction from an equal mixture of light
//! sampling and the material's own lobe. Specular bounces are followed
//! directly. Numerical trouble in a single path degrades that path to zero
//! instead of failing the render.

use crate::*;

/// Closest hits nearer than this are treated as self-intersections.
pub const T_MIN: Float = 0.001;

/// Monte Carlo estimate of the radiance arriving along `ray`.
///
/// `lights` is only used for importance sampling; an empty list falls back
/// to sampling each material's own distribution.
pub fn estimate_radiance(
    ray: &Ray,
    background: Color,
    world: &dyn Hittable,
    lights: &HittableList,
    depth: usize,
    rng: &mut dyn RngCore,
) -> Color{
    if depth == 0{
        return Color::ZERO;
    }
    let Some(record) = world.hit(ray, &Interval::new(T_MIN, INFINITY)) else {
        return background;
    };

    let emitted = record.mat.emitted(ray, &record, record.uv, &record.p);
    let Some(srec) = record.mat.scatter(ray, &record, rng) else {
        return emitted;
    };

    let material_pdf = match srec.scattered{
        Scattered::Specular(specular) => {
            return srec.attenuation * estimate_radiance(&specular, background, world, lights, depth-1, rng);
        },
        Scattered::Diffuse(pdf) => pdf,
    };

    let light_pdf = HittablePdf::new(lights, record.p);
    let mixture = MixturePdf::new(&light_pdf, material_pdf.as_ref());
    let pdf: &dyn Pdf = if lights.is_empty() {material_pdf.as_ref()} else {&mixture};

    let scattered = Ray::new(record.p, pdf.generate(rng), ray.time);
    let pdf_val = pdf.value(&scattered.dir);
    let scattering_pdf = record.mat.scattering_pdf(ray, &record, &scattered);
    // also rejects NaN densities
    if !(pdf_val > 0.0 && scattering_pdf > 0.0){
        return emitted;
    }

    let incoming = estimate_radiance(&scattered, background, world, lights, depth-1, rng);
    emitted + srec.attenuation * scattering_pdf * incoming / pdf_val
}
