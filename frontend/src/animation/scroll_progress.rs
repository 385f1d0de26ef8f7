//! Scroll-linked hero fade: as the hero scrolls out of view it fades from
//! fully opaque to transparent and shrinks to 80%.

use super::timing::lerp;

const MIN_SCALE: f64 = 0.8;

/// How far the hero has scrolled out, in [0.0, 1.0].
#[inline]
pub fn scroll_progress(scroll_y: f64, hero_height: f64) -> f64 {
    if hero_height <= 0.0 {
        return 0.0;
    }
    (scroll_y / hero_height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFade {
    pub opacity: f64,
    pub scale: f64,
}

impl HeroFade {
    pub fn at(scroll_y: f64, hero_height: f64) -> Self {
        let p = scroll_progress(scroll_y, hero_height);
        Self {
            opacity: lerp(1.0, 0.0, p),
            scale: lerp(1.0, MIN_SCALE, p),
        }
    }

    pub fn to_style(self) -> String {
        format!("opacity: {:.3}; transform: scale({:.3});", self.opacity, self.scale)
    }
}

impl Default for HeroFade {
    fn default() -> Self {
        Self { opacity: 1.0, scale: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(HeroFade::at(0.0, 900.0), HeroFade::default());
        let gone = HeroFade::at(900.0, 900.0);
        assert!(gone.opacity.abs() < 1e-9);
        assert!((gone.scale - 0.8).abs() < 1e-9);
        // Past the hero stays fully faded.
        assert_eq!(HeroFade::at(5000.0, 900.0), gone);
    }

    #[test]
    fn test_fade_midpoint() {
        let mid = HeroFade::at(450.0, 900.0);
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!((mid.scale - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_height() {
        assert_eq!(scroll_progress(300.0, 0.0), 0.0);
    }

    #[test]
    fn test_style_string() {
        assert_eq!(HeroFade::default().to_style(), "opacity: 1.000; transform: scale(1.000);");
    }
}
