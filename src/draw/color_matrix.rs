/// 5x5 color transform applied to `[r, g, b, a, 1]` row vectors
///
/// Components are normalized to `0.0..=1.0` before the transform and clamped
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub [[f32; 5]; 5]);

impl ColorMatrix {
    pub const IDENTITY: ColorMatrix = ColorMatrix([
        [1.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ]);

    /// Washed-out grayscale used to paint a disabled map
    pub fn disabled() -> Self {
        ColorMatrix([
            [0.2125, 0.2125, 0.2125, 0.0, 0.0],
            [0.2577, 0.2577, 0.2577, 0.0, 0.0],
            [0.0361, 0.0361, 0.0361, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [0.38, 0.38, 0.38, 0.0, 1.0],
        ])
    }

    pub fn apply(&self, rgba: [u8; 4]) -> [u8; 4] {
        let input = [
            rgba[0] as f32 / 255.0,
            rgba[1] as f32 / 255.0,
            rgba[2] as f32 / 255.0,
            rgba[3] as f32 / 255.0,
            1.0,
        ];
        let mut out = [0u8; 4];
        for (j, slot) in out.iter_mut().enumerate() {
            let value: f32 = (0..5).map(|i| input[i] * self.0[i][j]).sum();
            *slot = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
        out
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::disabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_keeps_color() {
        assert_eq!(ColorMatrix::IDENTITY.apply([10, 20, 30, 255]), [10, 20, 30, 255]);
    }

    #[test]
    fn test_disabled_is_gray_and_lightened() {
        let [r, g, b, a] = ColorMatrix::disabled().apply([0, 0, 0, 255]);
        assert_eq!((r, g, b), (97, 97, 97));
        assert_eq!(a, 255);

        let [r, g, b, _] = ColorMatrix::disabled().apply([200, 40, 90, 255]);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }
}
