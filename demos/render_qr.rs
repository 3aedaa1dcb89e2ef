use barcode_raster::{to_black_on_white, Geometry, Renderer};
use qrcode::{Color, QrCode};

//
// cargo run --example render_qr
//
// The renderer does not care that the rows happen to form a QR symbol; any
// rectangular module matrix renders the same way.
//

fn main() {
    env_logger::init();

    let code = QrCode::new(b"barcode-raster").unwrap();
    let width = code.width();
    let lines: Vec<String> = code
        .to_colors()
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|module| if *module == Color::Dark { '1' } else { '0' })
                .collect::<String>()
        })
        .collect();

    // Square 0.5 mm modules; quiet zone and vertical margin both cover the
    // four-module clear area the symbol needs.
    let geometry = Geometry::new()
        .module_width(0.5)
        .module_height(0.5)
        .quiet_zone(2.0)
        .vertical_margin(2.0)
        .dpi(300.0);

    let canvas = Renderer::new(geometry).render(&lines).unwrap();
    println!("rendered {}x{} px", canvas.width(), canvas.height());

    to_black_on_white(&canvas).save("qr.png").unwrap();
    println!("wrote qr.png");
}
