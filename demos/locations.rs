//! Encodes a few named places and prints their codes, cell sizes and neighbors.
//!
//! Run with `RUST_LOG=debug` to see the neighbor derivation.

use geobox::{GeoPoint, InterleavedCode};

fn main() {
    env_logger::init();

    let places = [
        ("roma_piramide", 41.87643118161227, 12.481563961993402),
        ("paris_louvre", 48.86102675689321, 2.335861599932855),
        ("greenwich", 51.48, 0.0),
    ];

    println!("=== Geobox codes ===\n");
    for (name, lat, lon) in places {
        let point = GeoPoint::new(lat, lon);
        println!("{} (box size: {:.4} m)", name, point.diagonal_meters());
        println!(" - code: {:18}", point.code().to_string());
        for (code, bbox) in point.neighbors() {
            println!(" - near: {} sw={} ne={}", code, bbox.sw(), bbox.ne());
        }
    }

    println!("\n=== Interleaved integer codes ===\n");
    for (name, lat, lon) in places {
        let code = InterleavedCode::new(lat, lon);
        println!("{:14} {:#018x} ({})", name, code.bits(), code.as_signed());
    }

    let rome = GeoPoint::new(places[0].1, places[0].2);
    let paris = GeoPoint::new(places[1].1, places[1].2);
    println!("\nRome to Paris: {:.1} km", rome.distance_from(&paris) / 1000.0);
}
