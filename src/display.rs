//! Monitors, their video modes, and physical display metrics.

use crate::Extent2;

/// Millimetres to inches.
const MM_TO_INCH: f32 = 0.03937;
/// Dots per inch of a density-1.0 screen.
const REFERENCE_DPI: f32 = 160.;

/// Identifies a connected monitor by its position in the native library's
/// monitor list.
///
/// Index 0 is the primary monitor. Ids are only meaningful until monitors are
/// plugged or unplugged.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonitorId(pub usize);

impl MonitorId {
    /// The primary monitor.
    pub const PRIMARY: MonitorId = MonitorId(0);
}

/// A monitor's supported resolution/refresh-rate/color-depth combination.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct DisplayMode {
    /// Width, in pixels.
    pub width: u32,
    /// Height, in pixels.
    pub height: u32,
    /// Refresh rate, in Hz.
    pub refresh_rate: u32,
    /// Sum of the red, green and blue bit depths.
    pub bits_per_pixel: u32,
}

impl DisplayMode {
    /// Builds a mode from per-channel bit depths, as native libraries report them.
    pub fn from_channels(width: u32, height: u32, refresh_rate: u32, red_bits: u32, green_bits: u32, blue_bits: u32) -> Self {
        Self {
            width,
            height,
            refresh_rate,
            bits_per_pixel: red_bits + green_bits + blue_bits,
        }
    }

    /// The mode's resolution.
    pub fn size(&self) -> Extent2<u32> {
        Extent2::new(self.width, self.height)
    }
}

/// A monitor's physical size paired with its current video mode.
///
/// None of the values are validated: monitors that report a physical size of
/// zero produce infinite densities.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PhysicalMetrics {
    /// Physical size, in millimetres.
    pub size_mm: Extent2<u32>,
    /// The monitor's current video mode.
    pub mode: DisplayMode,
}

impl PhysicalMetrics {
    /// Horizontal pixels per inch.
    pub fn ppi_x(&self) -> f32 {
        self.mode.width as f32 / (self.size_mm.w as f32 * MM_TO_INCH)
    }
    /// Vertical pixels per inch.
    pub fn ppi_y(&self) -> f32 {
        self.mode.height as f32 / (self.size_mm.h as f32 * MM_TO_INCH)
    }
    /// Horizontal pixels per centimetre, over whole centimetres.
    pub fn ppc_x(&self) -> f32 {
        self.mode.width as f32 / (self.size_mm.w / 10) as f32
    }
    /// Vertical pixels per centimetre, over whole centimetres.
    pub fn ppc_y(&self) -> f32 {
        self.mode.height as f32 / (self.size_mm.h / 10) as f32
    }
    /// Diagonal pixels per inch over 160, the way mobile platforms scale
    /// density-independent units.
    pub fn density(&self) -> f32 {
        let (mm_w, mm_h) = (self.size_mm.w as f32, self.size_mm.h as f32);
        let inches = (mm_w * mm_w + mm_h * mm_h).sqrt() * MM_TO_INCH;
        let (px_w, px_h) = (self.mode.width as f32, self.mode.height as f32);
        let pixels = (px_w * px_w + px_h * px_h).sqrt();
        pixels / inches / REFERENCE_DPI
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wuxga() -> PhysicalMetrics {
        PhysicalMetrics {
            size_mm: Extent2::new(300, 190),
            mode: DisplayMode::from_channels(1920, 1200, 60, 8, 8, 8),
        }
    }

    #[test]
    fn bits_per_pixel_sums_channels() {
        assert_eq!(wuxga().mode.bits_per_pixel, 24);
        assert_eq!(DisplayMode::from_channels(800, 600, 60, 5, 6, 5).bits_per_pixel, 16);
    }

    #[test]
    fn density_of_wuxga_panel() {
        let m = wuxga();
        let inches = (300f32 * 300. + 190. * 190.).sqrt() * 0.03937;
        let pixels = (1920f32 * 1920. + 1200. * 1200.).sqrt();
        let expected = pixels / inches / 160.;
        let d = m.density();
        assert!(d > 0.);
        assert!((d - expected).abs() < 1e-5, "{} != {}", d, expected);
        assert!((d - 1.0122).abs() < 1e-3);
        assert_eq!(d, m.density());
    }

    #[test]
    fn ppi_and_ppc() {
        let m = wuxga();
        assert!((m.ppi_x() - 1920. / (300. * 0.03937)).abs() < 1e-3);
        assert!((m.ppi_y() - 1200. / (190. * 0.03937)).abs() < 1e-3);
        assert_eq!(m.ppc_x(), 64.);
        assert_eq!(m.ppc_y(), 1200. / 19.);
    }

    #[test]
    fn zero_physical_size_is_not_validated() {
        let m = PhysicalMetrics { size_mm: Extent2::new(0, 0), .. wuxga() };
        assert!(m.ppi_x().is_infinite());
        assert!(m.ppc_y().is_infinite());
        assert!(m.density().is_infinite());
    }
}
