use crate::MM_PER_INCH;

/// Convert millimeters to pixels at the given resolution.
///
/// The result keeps its fractional part. Canvas sizing truncates it at the
/// call site; rectangle corners carry the fraction down to the paint
/// primitive.
pub fn mm_to_px(mm: f64, dpi: f64) -> f64 {
    mm * dpi / MM_PER_INCH
}

/// Physical layout of one rendered symbol, all lengths in millimeters.
///
/// `foreground` and `background` are two-valued pixel colors; any non-zero
/// value paints as a set pixel. Values are fixed once rendering starts.
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    pub(crate) module_width: f64,
    pub(crate) module_height: f64,
    pub(crate) quiet_zone: f64,
    pub(crate) vertical_margin: f64,
    pub(crate) dpi: f64,
    pub(crate) foreground: u8,
    pub(crate) background: u8,
}

impl Geometry {
    /// Initialize geometry with the stock label defaults.
    ///
    /// Module width 0.2 mm, module height 15.0 mm, quiet zone 6.5 mm, no
    /// vertical margin, 25.4 dpi (one pixel per millimeter), foreground 1 on
    /// background 0.
    pub fn new() -> Geometry {
        Geometry {
            module_width: 0.2,
            module_height: 15.0,
            quiet_zone: 6.5,
            vertical_margin: 0.0,
            dpi: crate::DEFAULT_DPI,
            foreground: 1,
            background: 0,
        }
    }

    /// Width of a single module in millimeters.
    pub fn module_width(self, mm: f64) -> Self {
        Geometry {
            module_width: mm,
            ..self
        }
    }

    /// Height of one row of modules in millimeters.
    pub fn module_height(self, mm: f64) -> Self {
        Geometry {
            module_height: mm,
            ..self
        }
    }

    /// Blank margin in millimeters kept to the left and right of every row.
    pub fn quiet_zone(self, mm: f64) -> Self {
        Geometry {
            quiet_zone: mm,
            ..self
        }
    }

    /// Blank margin in millimeters above and below the whole symbol.
    pub fn vertical_margin(self, mm: f64) -> Self {
        Geometry {
            vertical_margin: mm,
            ..self
        }
    }

    /// Rendering resolution in dots per inch.
    pub fn dpi(self, dpi: f64) -> Self {
        Geometry { dpi, ..self }
    }

    /// Pixel value painted for '1' modules.
    pub fn foreground(self, value: u8) -> Self {
        Geometry {
            foreground: value,
            ..self
        }
    }

    /// Pixel value painted for '0' modules and margins.
    pub fn background(self, value: u8) -> Self {
        Geometry {
            background: value,
            ..self
        }
    }

    /// Canvas size in pixels for a symbol of the given dimensions.
    ///
    /// Width covers the quiet zones plus all modules, height the vertical
    /// margins plus all rows; both are truncated, not rounded. Degenerate
    /// geometry yields a zero-sized canvas rather than an error.
    pub fn size_in_pixels(&self, modules_per_line: usize, number_of_lines: usize) -> (u32, u32) {
        let width = 2.0 * self.quiet_zone + modules_per_line as f64 * self.module_width;
        let height = 2.0 * self.vertical_margin + self.module_height * number_of_lines as f64;
        (
            mm_to_px(width, self.dpi) as u32,
            mm_to_px(height, self.dpi) as u32,
        )
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry::new()
    }
}
