//! Font descriptor for text stamping.

/// Font configuration for text rendering.
///
/// Describes which font to use. Only the family is user-configurable; stamped
/// text is always drawn at a regular weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Arial", "Sans", "JetBrains Mono")
    pub family: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
        }
    }
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
        }
    }

    /// Builds the Pango description for a pixel size.
    ///
    /// Pango string sizes are in points, so the absolute pixel size is set
    /// on the parsed description instead.
    pub fn to_pango(&self, pixel_size: f64) -> pango::FontDescription {
        let mut desc = pango::FontDescription::from_string(&self.family);
        let scaled = (pixel_size.max(0.0) * pango::SCALE as f64).round() as i32;
        desc.set_absolute_size(scaled as f64);
        desc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_family_is_arial() {
        assert_eq!(FontDescriptor::default().family, "Arial");
    }

    #[test]
    fn pango_description_uses_absolute_pixels() {
        let desc = FontDescriptor::new("Monospace").to_pango(25.0);
        assert_eq!(desc.family().as_deref(), Some("Monospace"));
        assert!(desc.is_size_absolute());
        assert_eq!(desc.size(), 25 * pango::SCALE);
    }
}
