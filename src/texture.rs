use crate::*;
pub trait Texture: Send + Sync{
    fn value(&self, uv: UV, p: &Point) -> Color;
}

pub struct SolidColor{
    albedo: Color,
}

/// 3D checkerboard alternating between two textures in cells of side `scale`.
pub struct CheckerTexture{
    inv_scale: Float,
    even: Arc<dyn Texture>,
    odd: Arc<dyn Texture>,
}

impl SolidColor{
    pub fn from_color(albedo: Color) -> Self{
        Self{albedo}
    }
}

impl CheckerTexture{
    pub fn new(scale: Float, even: Arc<dyn Texture>, odd: Arc<dyn Texture>) -> Self{
        Self{inv_scale:scale.recip(), even, odd}
    }
    pub fn from_color(scale: Float, a: Color, b: Color) -> Self{
        Self::new(scale, Arc::new(SolidColor::from_color(a)), Arc::new(SolidColor::from_color(b)))
    }
}

impl Texture for SolidColor {
    fn value(&self, _: UV, _: &Point) -> Color{
        self.albedo
    }
}

impl Texture for CheckerTexture{
    fn value(&self, uv: UV, p: &Point) -> Color {
        let cell = (self.inv_scale * *p).floor();
        match (cell.x + cell.y + cell.z) as i64 % 2 == 0{
            true => self.even.value(uv, p),
            false => self.odd.value(uv, p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checker_alternates() {
        let tex = CheckerTexture::from_color(1.0, Color::ZERO, Color::ONE);
        assert_eq!(tex.value(UV::ZERO, &Point::new(0.5, 0.5, 0.5)), Color::ZERO);
        assert_eq!(tex.value(UV::ZERO, &Point::new(1.5, 0.5, 0.5)), Color::ONE);
        assert_eq!(tex.value(UV::ZERO, &Point::new(-0.5, 0.5, 0.5)), Color::ONE);
        assert_eq!(tex.value(UV::ZERO, &Point::new(-0.5, -0.5, 0.5)), Color::ZERO);
    }

    #[test]
    fn solid_ignores_coordinates() {
        let tex = SolidColor::from_color(Color::new(0.1, 0.2, 0.3));
        assert_eq!(tex.value(UV::new(0.3, 0.9), &Point::splat(42.0)), Color::new(0.1, 0.2, 0.3));
    }
}
