use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::codec::{
    decode, encode, neighbor_spacing, neighbors, Direction, GeoboxEncoder, GeoboxId,
    DEFAULT_PRECISION,
};
use crate::coord::Coordinate;
use crate::GeoboxError;

fn random_coords(n: usize) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| (rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0)))
        .collect()
}

#[test]
fn test_known_codes() {
    let cases = [
        (41.87643118161227, 12.481563961993402, "eagacagacctggaaaga"),
        (48.86102675689321, 2.335861599932855, "eaagggatcgcacaataa"),
        (51.48, 0.0, "eaaggaggaggaagaaag"),
        (7.0625, -95.677068, "watttatcttttgctacg"),
    ];
    for (lat, lon, expected) in cases {
        let cell = encode(lat, lon, 18).unwrap();
        assert_eq!(cell.id(), &expected, "encoding ({lat}, {lon})");
    }

    let long = encode(7.0625, -95.677068, 22).unwrap();
    assert_eq!(long.id(), &"watttatcttttgctacgaagt");
}

#[test]
fn test_known_box() {
    let cell = encode(41.87643118161227, 12.481563961993402, 18).unwrap();
    assert_eq!(cell.sw(), Coordinate::new(41.875762939453125, 12.48046875));
    assert_eq!(cell.ne(), Coordinate::new(41.87713623046875, 12.481842041015625));
    assert!(cell
        .bbox()
        .contains(&Coordinate::new(41.87643118161227, 12.481563961993402)));
}

#[test]
fn test_default_encoder() {
    let encoder = GeoboxEncoder::default();
    assert_eq!(encoder.precision(), DEFAULT_PRECISION);

    let cell = encoder.encode(51.48, 0.0);
    assert_eq!(cell.precision(), 18);
    assert_eq!(cell.id(), &"eaaggaggaggaagaaag");

    let from_coord = encoder.encode_coord(&Coordinate::new(51.48, 0.0));
    assert_eq!(from_coord, cell);
}

#[test]
fn test_zero_precision_rejected() {
    assert!(matches!(
        encode(0.0, 0.0, 0),
        Err(GeoboxError::InvalidArgument(_))
    ));
    assert!(matches!(
        GeoboxEncoder::new_with_precision(0),
        Err(GeoboxError::InvalidArgument(_))
    ));
}

#[test]
fn test_precision_one_is_hemisphere() {
    let west = encode(10.0, -0.5, 1).unwrap();
    assert_eq!(west.id(), &"w");
    assert_eq!(west.sw(), Coordinate::new(-90.0, -180.0));
    assert_eq!(west.ne(), Coordinate::new(90.0, 0.0));

    let east = encode(10.0, 0.0, 1).unwrap();
    assert_eq!(east.id(), &"e");
}

#[test]
fn test_midpoint_ties_go_low() {
    // lat 0 lands exactly on the first latitude midpoint.
    let cell = encode(0.0, 0.0, 3).unwrap();
    assert_eq!(cell.id(), &"ega");
    assert_eq!(cell.sw(), Coordinate::new(-45.0, 0.0));
    assert_eq!(cell.ne(), Coordinate::new(0.0, 45.0));

    assert_eq!(encode(-90.0, -180.0, 3).unwrap().id(), &"wgg");
    assert_eq!(encode(90.0, 180.0, 3).unwrap().id(), &"ecc");
}

#[test]
fn test_out_of_range_is_best_effort() {
    // Not rejected: the code is well formed but its cell does not hold the input.
    let cell = encode(95.0, 200.0, 4).unwrap();
    assert_eq!(cell.id(), &"eccc");
    assert!(!cell.bbox().contains(&Coordinate::new(95.0, 200.0)));
    assert!(cell.id().to_string().parse::<GeoboxId>().is_ok());
}

#[test]
fn test_decode_inverts_encode() {
    for (i, (lat, lon)) in random_coords(500).into_iter().enumerate() {
        let precision = 1 + i % 30;
        let encoded = encode(lat, lon, precision).unwrap();
        let decoded = decode(&encoded.id().to_string()).unwrap();
        assert_eq!(decoded.bbox(), encoded.bbox(), "({lat}, {lon}) @ {precision}");
        assert_eq!(decoded.id(), encoded.id());
        assert!(encoded.bbox().contains(&Coordinate::new(lat, lon)));
    }
}

#[test]
fn test_decode_center() {
    let cell = decode("eg").unwrap();
    assert_eq!(cell.center(), Coordinate::new(-45.0, 45.0));
    assert_eq!(cell.sw(), Coordinate::new(-90.0, 0.0));
    assert_eq!(cell.ne(), Coordinate::new(0.0, 90.0));

    assert_eq!(decode("w").unwrap().center(), Coordinate::new(0.0, -90.0));
}

#[test]
fn test_decode_rejects_bad_codes() {
    for code in ["", "n", "eagz", "eAg", "egat c"] {
        assert!(
            matches!(decode(code), Err(GeoboxError::InvalidCode { .. })),
            "{code:?} should be rejected"
        );
    }
}

#[test]
fn test_prefix_containment() {
    for (lat, lon) in random_coords(100) {
        let id = encode(lat, lon, 30).unwrap().into_id();
        let mut child = id.decode();
        while let Some(parent) = child.id().parent() {
            let parent = parent.decode();
            assert!(
                parent.bbox().strictly_contains(child.bbox()),
                "{} should strictly contain {}",
                parent.id(),
                child.id()
            );
            child = parent;
        }
        assert_eq!(child.precision(), 1);
    }
}

#[test]
fn test_longer_codes_extend_shorter_ones() {
    for (lat, lon) in random_coords(100) {
        let short = encode(lat, lon, 9).unwrap().into_id();
        let long = encode(lat, lon, 25).unwrap().into_id();
        assert!(long.has_prefix(&short));
        assert!(short.contains(&long));
    }
}

#[test]
fn test_neighbor_codes() {
    let found = neighbors("eagacagacctggaaaga").unwrap();
    let expected = [
        (Direction::N, "eagacagacctggaaaag"),
        (Direction::NE, "eagacagacctggaaaat"),
        (Direction::E, "eagacagacctggaaagc"),
        (Direction::SE, "eagacagacctggaaagt"),
        (Direction::S, "eagacagacctggaaagg"),
        (Direction::SW, "eagacagaccgttccctt"),
        (Direction::W, "eagacagaccgttccctc"),
        (Direction::NW, "eagacagaccgttcccct"),
    ];
    assert_eq!(found.len(), 8);
    for ((direction, code), neighbor) in expected.iter().zip(&found) {
        assert_eq!(neighbor.direction, *direction);
        assert_eq!(neighbor.cell.id(), code);
        assert_eq!(neighbor.cell.precision(), 18);
    }
}

#[test]
fn test_neighbors_are_adjacent() {
    let id = encode(48.86102675689321, 2.335861599932855, 18)
        .unwrap()
        .into_id();
    let bbox = *id.decode().bbox();
    for neighbor in id.neighbors() {
        let other = neighbor.cell.bbox();
        let touches_lat = other.sw().latitude <= bbox.ne().latitude
            && other.ne().latitude >= bbox.sw().latitude;
        let touches_lon = other.sw().longitude <= bbox.ne().longitude
            && other.ne().longitude >= bbox.sw().longitude;
        assert!(touches_lat && touches_lon, "{:?}", neighbor);
        assert_ne!(neighbor.cell.id(), &id);
    }
}

#[test]
fn test_neighbors_collapse_at_low_precision() {
    // Every step from the eastern hemisphere's center lands in either hemisphere.
    let found = neighbors("e").unwrap();
    let codes: Vec<String> = found.iter().map(|n| n.cell.id().to_string()).collect();
    assert_eq!(codes, vec!["e", "w"]);
    assert_eq!(found[0].direction, Direction::N);
    assert_eq!(found[1].direction, Direction::SW);

    // At precision 2 the northward step overshoots the pole and re-encodes into the same
    // cell. Kept as-is rather than wrapped.
    let found = neighbors("ea").unwrap();
    assert_eq!(found.len(), 6);
    assert!(found.iter().any(|n| n.cell.id() == &"ea"));
}

#[test]
fn test_neighbor_cardinality() {
    for (i, (lat, lon)) in random_coords(200).into_iter().enumerate() {
        let precision = 2 + i % 20;
        let id = encode(lat, lon, precision).unwrap().into_id();
        let found = id.neighbors();
        assert!(!found.is_empty() && found.len() <= 8);
        for n in &found {
            assert_eq!(n.cell.precision(), precision);
        }
    }
}

#[test]
fn test_neighbor_spacing() {
    assert_eq!(neighbor_spacing(1), 180.0);
    assert_eq!(neighbor_spacing(2), 90.0);
    assert_eq!(neighbor_spacing(18), 180.0 / 131072.0);
}
