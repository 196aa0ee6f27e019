//! OpenGL-related structures and abstractions.

use crate::error::{self, Result};
use crate::version_cmp;
use crate::Rgba;


/// Pixel, depth and stencil precision requested for a window's default
/// framebuffer.
///
/// A window is always created against one `BufferFormat`; changing it means
/// creating a new window.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct BufferFormat {
    /// Number of bits used for storing the red channel. Often set to 8.
    pub r: u8,
    /// Number of bits used for storing the green channel. Often set to 8.
    pub g: u8,
    /// Number of bits used for storing the blue channel. Often set to 8.
    pub b: u8,
    /// Number of bits used for storing the alpha channel. Often set to 8.
    pub a: u8,
    /// Number of bits used for storing per-fragment depth values.
    pub depth: u8,
    /// Number of bits used for storing per-fragment "stencil" values.
    pub stencil: u8,
    /// Number of MSAA samples per pixel. If it's zero, MSAA is disabled.
    pub samples: u8,
    /// Coverage sampling anti-aliasing. Desktop GL never reports it.
    pub coverage_sampling: bool,
}

impl Default for BufferFormat {
    fn default() -> Self {
        Self {
            r: 8,
            g: 8,
            b: 8,
            a: 8,
            depth: 16,
            stencil: 0,
            samples: 0,
            coverage_sampling: false,
        }
    }
}

impl BufferFormat {
    /// Same format with color channels adjusted for a display mode of
    /// `bits_per_pixel` total color bits.
    ///
    /// 16-bit modes get a 5/6/6 split; anything else gets 8/8/8. Alpha, depth,
    /// stencil and samples are kept.
    pub fn for_bits_per_pixel(&self, bits_per_pixel: u32) -> Self {
        let (r, g, b) = match bits_per_pixel {
            16 => (5, 6, 6),
            _ => (8, 8, 8),
        };
        Self { r, g, b, coverage_sampling: false, .. *self }
    }
}


/// Either Desktop GL or OpenGL ES.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum GLVariant {
    Desktop,
    ES,
}

impl GLVariant {
    #[allow(missing_docs)]
    pub fn is_desktop(&self) -> bool { self == &GLVariant::Desktop }
    #[allow(missing_docs)]
    pub fn is_es(&self) -> bool { self == &GLVariant::ES }
}

/// Convenience struct for representing an OpenGL version.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct GLVersion {
    /// Variant; Desktop or ES.
    pub variant: GLVariant,
    /// Major version number.
    pub major: u8,
    /// Minor version number.
    pub minor: u8,
}

impl GLVersion {
    /// Create a desktop GL version from major and minor version numbers.
    pub fn new_desktop(major: u8, minor: u8) -> Self { Self { variant: GLVariant::Desktop, major, minor, } }
    /// Create a GL ES version from major and minor version numbers.
    pub fn new_es(major: u8, minor: u8) -> Self { Self { variant: GLVariant::ES, major, minor, } }
    #[allow(missing_docs)]
    pub fn is_desktop(&self) -> bool { self.variant.is_desktop() }
    #[allow(missing_docs)]
    pub fn is_es(&self) -> bool { self.variant.is_es() }

    /// Parses the string returned by `glGetString(GL_VERSION)`.
    ///
    /// Expected forms: `"4.6.0 NVIDIA 535.54"` or `"OpenGL ES 3.2 Mesa 23.0"`.
    /// Missing numbers parse as zero.
    pub fn parse(version: &str) -> Self {
        let variant = if version.starts_with("OpenGL ES") {
            GLVariant::ES
        } else {
            GLVariant::Desktop
        };
        let number = version.split_whitespace().find(|t| {
            t.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false)
        });
        let mut major = 0;
        let mut minor = 0;
        if let Some(number) = number {
            let mut parts = number.split('.');
            if let Some(m) = parts.next().and_then(|s| s.parse::<u8>().ok()) {
                major = m;
            }
            if let Some(n) = parts.next().and_then(|s| s.parse::<u8>().ok()) {
                minor = n;
            }
        }
        Self { variant, major, minor, }
    }

    pub(crate) fn at_least(&self, major: u8, minor: u8) -> bool {
        version_cmp::ge((self.major, self.minor), (major, minor))
    }
}

/// Extensions that satisfy the framebuffer object requirement on 2.x contexts.
pub const FBO_EXTENSIONS: [&str; 2] = ["GL_EXT_framebuffer_object", "GL_ARB_framebuffer_object"];

/// Rejects contexts the adapter cannot render with.
///
/// OpenGL 2.0 or higher is required, and 2.x contexts must additionally
/// expose one of `FBO_EXTENSIONS`.
pub fn check_requirements<F>(version_string: &str, mut extension_supported: F) -> Result<GLVersion>
    where F: FnMut(&str) -> bool
{
    let version = GLVersion::parse(version_string);
    if version_cmp::lt((version.major, version.minor), (2, 0)) {
        return error::unsupported(format!(
            "OpenGL 2.0 or higher with the FBO extension is required. OpenGL version: {}", version_string
        ));
    }
    if version.major == 2 && !FBO_EXTENSIONS.iter().any(|ext| extension_supported(ext)) {
        return error::unsupported(format!(
            "OpenGL 2.0 or higher with the FBO extension is required. OpenGL version: {}, FBO extension: false", version_string
        ));
    }
    Ok(version)
}


/// The handful of GL entry points the adapter itself calls.
///
/// Backends hand out an implementation once the context is current; hosts
/// reach the full API through the backend's concrete type.
pub trait GLFunctions {
    /// `glGetString(GL_VERSION)`.
    fn version_string(&self) -> String;
    /// `glViewport(x, y, width, height)`.
    fn viewport(&self, x: i32, y: i32, width: u32, height: u32);
    /// `glClearColor(...)` followed by `glClear(GL_COLOR_BUFFER_BIT)`.
    fn clear(&self, color: Rgba<f32>);
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_desktop_version() {
        let v = GLVersion::parse("4.6.0 NVIDIA 535.54.03");
        assert_eq!(v, GLVersion::new_desktop(4, 6));
    }

    #[test]
    fn parses_es_version() {
        let v = GLVersion::parse("OpenGL ES 3.2 Mesa 23.0.4");
        assert_eq!(v, GLVersion::new_es(3, 2));
    }

    #[test]
    fn garbage_parses_as_zero() {
        let v = GLVersion::parse("unknown");
        assert_eq!((v.major, v.minor), (0, 0));
    }

    #[test]
    fn sixteen_bit_mode_uses_565_split() {
        let f = BufferFormat { a: 4, depth: 24, stencil: 8, samples: 4, .. Default::default() };
        let f16 = f.for_bits_per_pixel(16);
        assert_eq!((f16.r, f16.g, f16.b), (5, 6, 6));
        assert_eq!((f16.a, f16.depth, f16.stencil, f16.samples), (4, 24, 8, 4));
        let f24 = f16.for_bits_per_pixel(24);
        assert_eq!((f24.r, f24.g, f24.b), (8, 8, 8));
        let f8 = f16.for_bits_per_pixel(32);
        assert_eq!((f8.r, f8.g, f8.b), (8, 8, 8));
    }

    #[test]
    fn gl1_is_rejected() {
        let e = check_requirements("1.4.0 Mesa", |_| true).unwrap_err();
        assert_eq!(e.kind, error::ErrorKind::Unsupported);
    }

    #[test]
    fn gl2_needs_fbo() {
        assert!(check_requirements("2.1 Mesa 7.0", |_| false).is_err());
        assert!(check_requirements("2.1 Mesa 7.0", |ext| ext == "GL_ARB_framebuffer_object").is_ok());
        assert!(check_requirements("2.0.0", |ext| ext == "GL_EXT_framebuffer_object").is_ok());
    }

    #[test]
    fn gl3_skips_extension_query() {
        let v = check_requirements("3.3.0 Core Profile", |_| panic!("queried extensions")).unwrap();
        assert!(v.at_least(3, 0));
        assert!(!v.at_least(3, 4));
    }
}
