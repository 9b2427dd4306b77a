use palette::Srgb;

pub type Color = [f32; 4];

/// 8 bit channels plus a float alpha, as a color the `graphics` crate understands
pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Color {
    let (r, g, b) = Srgb::new(r, g, b).into_format::<f32>().into_components();
    [r, g, b, a]
}

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0, 1.0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_scales_channels() {
        assert_eq!(rgba(255, 0, 255, 0.5), [1.0, 0.0, 1.0, 0.5]);
        assert_eq!(rgba(0, 0, 0, 1.0), BLACK);
        assert_eq!(rgba(255, 255, 255, 1.0), WHITE);
    }
}
