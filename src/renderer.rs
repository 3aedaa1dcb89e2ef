use image::{GrayImage, Luma};
use log::debug;

use crate::{
    error::Error,
    geometry::{mm_to_px, Geometry},
};

/// Paints barcode module rows onto a monochrome canvas.
///
/// The renderer holds only its [`Geometry`]; every call to [`render`] owns
/// its canvas from allocation to finalization, so a single instance can be
/// shared or called concurrently.
///
/// [`render`]: Renderer::render
#[derive(Debug, Clone)]
pub struct Renderer {
    geometry: Geometry,
}

impl Renderer {
    pub fn new(geometry: Geometry) -> Renderer {
        Renderer { geometry }
    }

    /// Render module rows into a finalized canvas.
    ///
    /// `code` holds one string per row, each character either '1' for a
    /// foreground module or '0' for a background module, all rows equally
    /// long. Runs of equal modules are painted as single rectangles and the
    /// returned image holds only the values 0 and 1.
    pub fn render<S: AsRef<str>>(&self, code: &[S]) -> Result<GrayImage, Error> {
        let modules_per_line = validate(code)?;
        let (width, height) = self.geometry.size_in_pixels(modules_per_line, code.len());
        debug!(
            "rendering {} lines of {} modules on a {}x{} px canvas",
            code.len(),
            modules_per_line,
            width,
            height
        );

        let ink = shade(self.geometry.foreground);
        let blank = shade(self.geometry.background);
        let mut canvas = GrayImage::from_pixel(width, height, Luma([blank]));

        let mut ypos = self.geometry.vertical_margin;
        for (cc, line) in code.iter().enumerate() {
            // Left quiet zone is the x start position.
            let mut xpos = self.geometry.quiet_zone;
            for run in module_runs(line.as_ref()) {
                let run_width = self.geometry.module_width * run.abs() as f64;
                let color = if run > 0 { ink } else { blank };
                self.paint_module(&mut canvas, xpos, ypos, run_width, color);
                xpos += run_width;
            }
            // Repaint the right quiet zone on every line except the last;
            // the last line keeps the canvas edge as its margin.
            if cc + 1 != code.len() {
                self.paint_module(&mut canvas, xpos, ypos, self.geometry.quiet_zone, blank);
            }
            ypos += self.geometry.module_height;
        }

        binarize(&mut canvas);
        Ok(canvas)
    }

    /// Fill one module-height rectangle. Corners map through [`mm_to_px`],
    /// are truncated toward zero, and the fill is inclusive of both corners,
    /// clipped at the canvas edges.
    fn paint_module(&self, canvas: &mut GrayImage, xpos: f64, ypos: f64, width: f64, color: u8) {
        let dpi = self.geometry.dpi;
        let x0 = (mm_to_px(xpos, dpi) as i64).max(0);
        let y0 = (mm_to_px(ypos, dpi) as i64).max(0);
        let x1 = (mm_to_px(xpos + width, dpi) as i64).min(canvas.width() as i64 - 1);
        let y1 = (mm_to_px(ypos + self.geometry.module_height, dpi) as i64)
            .min(canvas.height() as i64 - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                canvas.put_pixel(x as u32, y as u32, Luma([color]));
            }
        }
    }
}

fn validate<S: AsRef<str>>(code: &[S]) -> Result<usize, Error> {
    let expected = match code.first() {
        Some(line) => line.as_ref().chars().count(),
        None => return Err(Error::EmptyCode),
    };

    for (line, row) in code.iter().enumerate() {
        let row = row.as_ref();
        let found = row.chars().count();
        if found != expected {
            return Err(Error::LineMismatch {
                line,
                expected,
                found,
            });
        }
        for (column, module) in row.chars().enumerate() {
            if module != '0' && module != '1' {
                return Err(Error::InvalidModule {
                    line,
                    column,
                    found: module,
                });
            }
        }
    }
    Ok(expected)
}

/// Pack a line into signed run lengths, positive for '1' runs and negative
/// for '0' runs: `"11010111"` -> `[2, -1, 1, -1, 3]`. Painting per run
/// instead of per module avoids aliasing gaps between adjacent same-color
/// tiles.
fn module_runs(line: &str) -> Vec<i32> {
    let mut runs = Vec::new();
    let mut count = 0i32;
    let mut modules = line.chars().peekable();
    while let Some(module) = modules.next() {
        count += 1;
        if modules.peek() != Some(&module) {
            runs.push(if module == '1' { count } else { -count });
            count = 0;
        }
    }
    runs
}

/// Non-zero color values paint at full intensity; [`binarize`] folds them
/// back down to the logical value 1 afterwards.
fn shade(value: u8) -> u8 {
    if value > 0 {
        u8::MAX
    } else {
        0
    }
}

/// Clamp every pixel to the two canonical values: 1 for anything painted
/// above zero, 0 for the rest.
fn binarize(canvas: &mut GrayImage) {
    for pixel in canvas.pixels_mut() {
        pixel.0[0] = if pixel.0[0] > 0 { 1 } else { 0 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_geometry() -> Geometry {
        Geometry::new()
            .module_width(1.0)
            .module_height(1.0)
            .quiet_zone(1.0)
            .vertical_margin(0.0)
    }

    #[test]
    fn runs_merge_adjacent_modules() {
        assert_eq!(module_runs("11010111"), vec![2, -1, 1, -1, 3]);
    }

    #[test]
    fn runs_of_minimal_lines() {
        assert_eq!(module_runs("0"), vec![-1]);
        assert_eq!(module_runs("1"), vec![1]);
        assert_eq!(module_runs(""), Vec::<i32>::new());
    }

    #[test]
    fn render_matches_documented_size() {
        let canvas = Renderer::new(unit_geometry())
            .render(&["101", "010"])
            .unwrap();
        assert_eq!((canvas.width(), canvas.height()), (5, 2));
    }

    #[test]
    fn render_pins_module_layout() {
        // At 30 dpi every module edge lands strictly inside a pixel, so each
        // module owns exactly one column between the quiet zone columns.
        let canvas = Renderer::new(unit_geometry().dpi(30.0))
            .render(&["101", "010"])
            .unwrap();
        assert_eq!(canvas.as_raw(), &vec![0, 1, 0, 1, 0, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn trailing_quiet_zone_painted_on_all_but_last_line() {
        // A foreground run ending a line keeps its inclusive right-edge
        // column unless the trailing quiet zone repaints it, and the last
        // line gets no trailing rectangle.
        let canvas = Renderer::new(unit_geometry().dpi(30.0))
            .render(&["11", "11"])
            .unwrap();
        assert_eq!(canvas.as_raw(), &vec![0, 1, 1, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn canvas_is_binary_after_render() {
        // Scaled up so runs paint multi-pixel rectangles.
        let geometry = unit_geometry().dpi(50.8);
        let canvas = Renderer::new(geometry)
            .render(&["1100101", "0011010"])
            .unwrap();
        assert!(canvas.pixels().all(|pixel| pixel.0[0] <= 1));
        assert!(canvas.pixels().any(|pixel| pixel.0[0] == 1));
        assert!(canvas.pixels().any(|pixel| pixel.0[0] == 0));
    }

    #[test]
    fn render_is_deterministic() {
        let renderer = Renderer::new(unit_geometry().dpi(300.0));
        let first = renderer.render(&["10110111011", "01001000100"]).unwrap();
        let second = renderer.render(&["10110111011", "01001000100"]).unwrap();
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn inverted_colors_flip_the_canvas() {
        let geometry = unit_geometry().dpi(30.0).foreground(0).background(1);
        let canvas = Renderer::new(geometry).render(&["101", "010"]).unwrap();
        assert_eq!(canvas.as_raw(), &vec![1, 0, 1, 0, 1, 1, 1, 0, 1, 1]);
    }

    #[test]
    fn any_nonzero_color_paints_as_set() {
        // Foreground 200 on background 0 rasterizes exactly like the
        // default 1 on 0.
        let geometry = unit_geometry().dpi(30.0);
        let reference = Renderer::new(geometry).render(&["101", "010"]).unwrap();
        let loud = Renderer::new(geometry.foreground(200))
            .render(&["101", "010"])
            .unwrap();
        assert_eq!(loud.as_raw(), reference.as_raw());

        // A non-zero background is set as well, so 200 on 9 saturates the
        // whole canvas, margins included.
        let saturated = Renderer::new(geometry.foreground(200).background(9))
            .render(&["101", "010"])
            .unwrap();
        assert!(saturated.pixels().all(|pixel| pixel.0[0] == 1));
    }

    #[test]
    fn degenerate_geometry_renders_an_empty_canvas() {
        let canvas = Renderer::new(Geometry::new().dpi(0.0))
            .render(&["101"])
            .unwrap();
        assert_eq!((canvas.width(), canvas.height()), (0, 0));
    }

    #[test]
    fn rows_without_modules_render_only_margins() {
        // Uniformly empty rows are still rectangular; the canvas is nothing
        // but quiet zones and row heights.
        let geometry = Geometry::new();
        let canvas = Renderer::new(geometry).render(&["", ""]).unwrap();
        assert_eq!(
            (canvas.width(), canvas.height()),
            geometry.size_in_pixels(0, 2)
        );
        // 13 mm of quiet zones wide, two 15 mm rows tall.
        assert_eq!((canvas.width(), canvas.height()), (13, 30));
        assert!(canvas.pixels().all(|pixel| pixel.0[0] == 0));
    }

    #[test]
    fn empty_code_is_rejected() {
        let rows: Vec<&str> = Vec::new();
        let result = Renderer::new(Geometry::new()).render(&rows);
        assert!(matches!(result, Err(Error::EmptyCode)));
    }

    #[test]
    fn ragged_lines_are_rejected() {
        let result = Renderer::new(Geometry::new()).render(&["101", "01"]);
        assert!(matches!(
            result,
            Err(Error::LineMismatch {
                line: 1,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn stray_characters_are_rejected() {
        let result = Renderer::new(Geometry::new()).render(&["1x0"]);
        assert!(matches!(
            result,
            Err(Error::InvalidModule {
                line: 0,
                column: 1,
                found: 'x'
            })
        ));
    }
}
