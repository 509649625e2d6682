use crate::*;
use std::io::Write;

pub trait ColorExt{
    /// Zeroes every component that is NaN or infinite.
    fn sanitized(&self) -> Self;
    /// Gamma-2 encoded 8-bit components.
    fn to_rgb8(&self) -> [u8; 3];
}

fn linear_to_gamma(linear: Float) -> Float{
    if linear>0.0 {linear.sqrt()} else {0.0}
}

impl ColorExt for Color{
    fn sanitized(&self) -> Self{
        Color::from_array(self.to_array().map(|c| if c.is_finite() {c} else {0.0}))
    }
    fn to_rgb8(&self) -> [u8; 3]{
        const COLORSPACE:Interval = Interval::new(0.000, 0.999);
        self.sanitized().to_array().map(|c| (256. * COLORSPACE.clamp(linear_to_gamma(c))) as u8)
    }
}

/// Linear radiance per pixel, stored row-major with row 0 at the top.
#[derive(Clone, Debug)]
pub struct Image{
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color>,
}

impl Image{
    pub fn new(width: usize, height: usize) -> Self{
        Self{width, height, pixels:vec![Color::ZERO; width*height]}
    }
    /// Plain-text PPM (P3).
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> Result<(), RenderError>{
        writeln!(out, "P3\n{} {}\n255", self.width, self.height)?;
        for c in &self.pixels{
            let [ir, ig, ib] = c.to_rgb8();
            writeln!(out, "{ir} {ig} {ib}")?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_and_inf_encode_as_black() {
        let c = Color::new(Float::NAN, Float::INFINITY, Float::NEG_INFINITY);
        assert_eq!(c.sanitized(), Color::ZERO);
        assert_eq!(c.to_rgb8(), [0, 0, 0]);
        let mixed = Color::new(Float::NAN, 0.25, 1.0);
        assert_eq!(mixed.sanitized(), Color::new(0.0, 0.25, 1.0));
    }

    #[test]
    fn gamma_and_clamp() {
        assert_eq!(Color::new(0.25, 4.0, -1.0).to_rgb8(), [128, 255, 0]);
    }

    #[test]
    fn ppm_layout() {
        let mut image = Image::new(2, 1);
        image.pixels[1] = Color::ONE;
        let mut out = Vec::new();
        image.write_ppm(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "P3\n2 1\n255\n0 0 0\n255 255 255\n");
    }
}
