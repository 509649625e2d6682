//! Pixel-parallel driver around [`estimate_radiance`].

use crate::*;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig{
    pub image_width: usize,
    pub image_height: usize,
    /// Samples per pixel
    pub samples_per_pixel: usize,
    /// Maximum number of bounces along one path
    pub max_depth: usize,
    /// Base seed; each pixel derives its own generator from it
    pub seed: u64,
}

impl Default for RenderConfig{
    fn default() -> Self{
        Self{
            image_width: 600,
            image_height: 600,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: 0,
        }
    }
}

impl RenderConfig{
    pub fn aspect_ratio(&self) -> Float{
        self.image_width as Float / self.image_height as Float
    }

    pub fn validate(&self) -> Result<(), RenderError>{
        if self.image_width == 0 || self.image_height == 0{
            return Err(RenderError::InvalidConfig(format!(
                "image must have at least one pixel, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        if self.samples_per_pixel == 0{
            return Err(RenderError::InvalidConfig("samples per pixel must be positive".into()));
        }
        if self.max_depth == 0{
            return Err(RenderError::InvalidConfig("max depth must be positive".into()));
        }
        Ok(())
    }

    fn pixel_rng(&self, index: usize) -> StdRng{
        StdRng::seed_from_u64(self.seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ index as u64)
    }
}

/// Average of the samples for pixel (`i`, `j`), with `j` counted from the
/// bottom row. Samples that come back NaN or infinite count as black.
pub fn render_pixel(scene: &Scene, config: &RenderConfig, i: usize, j: usize, rng: &mut dyn RngCore) -> Color{
    // a single column or row spans the whole viewport
    let (w, h) = ((config.image_width - 1).max(1) as Float, (config.image_height - 1).max(1) as Float);
    let sum = (0..config.samples_per_pixel)
        .map(|_| {
            let s = (i as Float + random_double(rng)) / w;
            let t = (j as Float + random_double(rng)) / h;
            let ray = scene.camera.get_ray(s, t, rng);
            estimate_radiance(&ray, scene.background, scene.world.as_ref(), &scene.lights, config.max_depth, rng).sanitized()
        })
        .sum::<Color>();
    sum / config.samples_per_pixel as Float
}

/// Renders every pixel of the scene. Rows run in parallel; each pixel owns
/// its accumulator and a generator seeded from its index, so the result only
/// depends on the configuration.
pub fn render(scene: &Scene, config: &RenderConfig) -> Result<Image, RenderError>{
    config.validate()?;
    if scene.lights.is_empty(){
        warn!("Scene has no lights; sampling material distributions only");
    }
    info!(
        "Rendering {}x{} at {} spp, max depth {} on {} threads",
        config.image_width,
        config.image_height,
        config.samples_per_pixel,
        config.max_depth,
        rayon::current_num_threads()
    );
    let start = Instant::now();
    let rows_done = AtomicUsize::new(0);
    let band = (config.image_height / 10).max(1);

    let mut image = Image::new(config.image_width, config.image_height);
    image.pixels.par_chunks_mut(config.image_width).enumerate().for_each(|(row, pixels)| {
        let j = config.image_height - 1 - row;
        for (i, pixel) in pixels.iter_mut().enumerate(){
            let mut rng = config.pixel_rng(row*config.image_width + i);
            *pixel = render_pixel(scene, config, i, j, &mut rng);
        }
        let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
        if done % band == 0{
            debug!("{done}/{} rows finished", config.image_height);
        }
    });

    info!("Render finished in {:.2?}", start.elapsed());
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> RenderConfig {
        RenderConfig { image_width: 8, image_height: 6, samples_per_pixel: 4, max_depth: 8, seed: 3 }
    }

    #[test]
    fn rejects_degenerate_config() {
        assert!(RenderConfig::default().validate().is_ok());
        let bad = RenderConfig { samples_per_pixel: 0, ..tiny() };
        assert!(matches!(bad.validate(), Err(RenderError::InvalidConfig(_))));
        let bad = RenderConfig { image_width: 0, ..tiny() };
        assert!(matches!(bad.validate(), Err(RenderError::InvalidConfig(_))));
        assert!(RenderConfig { image_height: 1, ..tiny() }.validate().is_ok());
        let bad = RenderConfig { max_depth: 0, ..tiny() };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn render_is_reproducible() {
        let config = tiny();
        let scene = Scene::cornell_box(config.aspect_ratio()).unwrap();
        let a = render(&scene, &config).unwrap();
        let b = render(&scene, &config).unwrap();
        assert_eq!(a.pixels, b.pixels);
        assert_eq!(a.pixels.len(), 48);
        assert!(a.pixels.iter().all(|c| c.is_finite() && c.min_element() >= 0.0));
    }

    #[test]
    fn empty_sky_renders_background() {
        let config = tiny();
        let mut scene = Scene::spheres(config.aspect_ratio()).unwrap();
        scene.camera = Camera::new(Point::new(0.0, 100.0, 0.0), Point::new(0.0, 200.0, 0.0), Vector::X, 10.0, config.aspect_ratio(), 0.0, 1.0, 0.0, 0.0);
        let image = render(&scene, &config).unwrap();
        for c in &image.pixels {
            assert!((*c - scene.background).length() < 1e-12);
        }
    }

    #[test]
    fn single_column_renders() {
        let config = RenderConfig { image_width: 1, image_height: 5, ..tiny() };
        let scene = Scene::cornell_classic(config.aspect_ratio()).unwrap();
        let image = render(&scene, &config).unwrap();
        assert_eq!(image.pixels.len(), 5);
        assert!(image.pixels.iter().all(|c| c.is_finite() && c.min_element() >= 0.0));
    }
}
