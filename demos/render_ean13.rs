use barcode_raster::{pack_rows, to_black_on_white, Geometry, Renderer};

//
// cargo run --example render_ean13
//

// EAN-13 5901234123457, 95 modules. The pattern is what a symbology encoder
// hands the renderer; the guard bars are already part of it.
const EAN13: &str = concat!(
    "101",                                        // start guard
    "000101101001110110011001001101111010011101", // left half, 901234
    "01010",                                      // center guard
    "110011011011001000010101110010011101000100", // right half, 123457
    "101",                                        // end guard
);

fn main() {
    env_logger::init();

    // Nominal EAN-13 dimensions: 0.33 mm modules, 11-module quiet zones.
    let geometry = Geometry::new()
        .module_width(0.33)
        .module_height(25.9)
        .quiet_zone(3.63)
        .vertical_margin(1.0)
        .dpi(300.0);

    let renderer = Renderer::new(geometry);
    let canvas = renderer.render(&[EAN13]).unwrap();
    println!("rendered {}x{} px", canvas.width(), canvas.height());

    let rows = pack_rows(&canvas);
    println!(
        "packed {} raster rows of {} bytes each",
        rows.len(),
        rows[0].len()
    );

    to_black_on_white(&canvas).save("ean13.png").unwrap();
    println!("wrote ean13.png");
}
