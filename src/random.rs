//! Sampling helpers over an explicitly passed random source.
//!
//! Nothing in the crate owns a global generator: callers hand a
//! `&mut dyn RngCore` down to every operation that consumes entropy.

use crate::*;

/// Uniform double in [0, 1).
pub fn random_double(rng: &mut dyn RngCore) -> Float{
    rng.gen::<Float>()
}

/// Uniform double in [min, max).
pub fn random_range(rng: &mut dyn RngCore, min: Float, max: Float) -> Float{
    min + (max - min)*random_double(rng)
}

/// Uniform integer in [min, max], both ends inclusive.
pub fn random_int(rng: &mut dyn RngCore, min: usize, max: usize) -> usize{
    rng.gen_range(min..=max)
}

pub fn random_vector(rng: &mut dyn RngCore, min: Float, max: Float) -> Vector{
    Vector::new(
        random_range(rng, min, max),
        random_range(rng, min, max),
        random_range(rng, min, max),
    )
}

pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vector{
    loop{
        let p = random_vector(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vector{
    loop{
        let p = random_vector(rng, -1.0, 1.0);
        let lsq = p.length_squared();
        if 1e-160 < lsq && lsq <= 1.0 {
            return p/lsq.sqrt();
        }
    }
}

pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vector{
    loop{
        let p = Vector::new(random_range(rng, -1.0, 1.0), random_range(rng, -1.0, 1.0), 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Cosine-weighted direction on the hemisphere around +z.
pub fn random_cosine_direction(rng: &mut dyn RngCore) -> Vector{
    let r1 = random_double(rng);
    let r2 = random_double(rng);
    let phi = 2.0*PI*r1;
    let x = phi.cos()*r2.sqrt();
    let y = phi.sin()*r2.sqrt();
    let z = (1.0 - r2).sqrt();
    Vector::new(x, y, z)
}

/// Uniform direction within the cone around +z subtended by a sphere of
/// `radius` whose center lies `distance_squared` away.
pub fn random_to_sphere(rng: &mut dyn RngCore, radius: Float, distance_squared: Float) -> Vector{
    let r1 = random_double(rng);
    let r2 = random_double(rng);
    let cos_max = (1.0 - radius*radius/distance_squared).sqrt();
    let z = 1.0 + r2*(cos_max - 1.0);
    let phi = 2.0*PI*r1;
    let sin = (1.0 - z*z).sqrt();
    Vector::new(phi.cos()*sin, phi.sin()*sin, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_int_is_inclusive() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            let i = random_int(&mut rng, 0, 3);
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn unit_samplers_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(random_in_unit_sphere(&mut rng).length() < 1.0);
            assert!((random_unit_vector(&mut rng).length() - 1.0).abs() < 1e-9);
            let d = random_in_unit_disk(&mut rng);
            assert!(d.length() < 1.0 && d.z == 0.0);
            let c = random_cosine_direction(&mut rng);
            assert!(c.z >= 0.0 && (c.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn sphere_cone_samples_stay_inside_cone() {
        let mut rng = StdRng::seed_from_u64(3);
        let (radius, dist_sq): (Float, Float) = (1.0, 25.0);
        let cos_max = (1.0 - radius*radius/dist_sq).sqrt();
        for _ in 0..1000 {
            let d = random_to_sphere(&mut rng, radius, dist_sq);
            assert!(d.z >= cos_max - 1e-12);
        }
    }
}
