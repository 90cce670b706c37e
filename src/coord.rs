//! Plain coordinate and bounding box values.

use std::fmt;

use geo_traits::{
    CoordTrait, Dimensions, GeometryTrait, GeometryType, RectTrait,
    UnimplementedGeometryCollection, UnimplementedLine, UnimplementedLineString,
    UnimplementedMultiLineString, UnimplementedMultiPoint, UnimplementedMultiPolygon,
    UnimplementedPoint, UnimplementedPolygon, UnimplementedTriangle,
};

use crate::interval::Interval;

/// A latitude/longitude pair in degrees.
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`, but nothing here enforces
/// it. Values outside the range are carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Degrees north of the equator.
    pub latitude: f64,
    /// Degrees east of the prime meridian.
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude, in that order.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components lie within the geographic range.
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// `(latitude, longitude)`
    pub fn lat_lng(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Interpreted as `(latitude, longitude)`.
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

// x is longitude and y is latitude, matching the rest of the georust ecosystem.
impl CoordTrait for Coordinate {
    type T = f64;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn x(&self) -> f64 {
        self.longitude
    }

    fn y(&self) -> f64 {
        self.latitude
    }

    fn nth_or_panic(&self, n: usize) -> f64 {
        match n {
            0 => self.longitude,
            1 => self.latitude,
            _ => panic!("Coordinate has only two dimensions, got index {}", n),
        }
    }
}

/// One of the four labeled corners of a [`BoundingBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Corner {
    NW,
    NE,
    SW,
    SE,
}

impl Corner {
    /// Every corner, in declaration order.
    pub const ALL: [Corner; 4] = [Corner::NW, Corner::NE, Corner::SW, Corner::SE];
}

/// The lat/lon rectangle bounding a cell, as four corner coordinates.
///
/// Built only through [`BoundingBox::from_corners`] and friends, so the corners always agree:
/// the northern corners share a latitude, the western corners share a longitude, and so on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub struct BoundingBox {
    nw: Coordinate,
    ne: Coordinate,
    sw: Coordinate,
    se: Coordinate,
}

impl BoundingBox {
    /// Derive the full box from its south-west and north-east corners.
    pub fn from_corners(sw: Coordinate, ne: Coordinate) -> Self {
        Self {
            nw: Coordinate::new(ne.latitude, sw.longitude),
            ne,
            sw,
            se: Coordinate::new(sw.latitude, ne.longitude),
        }
    }

    /// Derive the box from the final latitude and longitude intervals of a bisection.
    pub fn from_intervals(lat: Interval, lon: Interval) -> Self {
        Self::from_corners(
            Coordinate::new(lat.min(), lon.min()),
            Coordinate::new(lat.max(), lon.max()),
        )
    }

    /// Build from any rectangle whose x axis is longitude and y axis is latitude.
    pub fn from_rect(rect: &impl RectTrait<T = f64>) -> Self {
        let min = rect.min();
        let max = rect.max();
        Self::from_corners(
            Coordinate::new(min.y(), min.x()),
            Coordinate::new(max.y(), max.x()),
        )
    }

    /// North-west corner.
    pub fn nw(&self) -> Coordinate {
        self.nw
    }

    /// North-east corner.
    pub fn ne(&self) -> Coordinate {
        self.ne
    }

    /// South-west corner.
    pub fn sw(&self) -> Coordinate {
        self.sw
    }

    /// South-east corner.
    pub fn se(&self) -> Coordinate {
        self.se
    }

    /// The coordinate of one labeled corner.
    pub fn corner(&self, corner: Corner) -> Coordinate {
        match corner {
            Corner::NW => self.nw,
            Corner::NE => self.ne,
            Corner::SW => self.sw,
            Corner::SE => self.se,
        }
    }

    /// All four corners, in [`Corner::ALL`] order.
    pub fn corners(&self) -> [(Corner, Coordinate); 4] {
        Corner::ALL.map(|c| (c, self.corner(c)))
    }

    /// Latitude range from the southern to the northern edge.
    pub fn lat_interval(&self) -> Interval {
        Interval::new(self.sw.latitude, self.ne.latitude)
    }

    /// Longitude range from the western to the eastern edge.
    pub fn lon_interval(&self) -> Interval {
        Interval::new(self.sw.longitude, self.ne.longitude)
    }

    /// Height in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.lat_interval().width()
    }

    /// Width in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.lon_interval().width()
    }

    /// Midpoint of both ranges.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.lat_interval().mid(), self.lon_interval().mid())
    }

    /// Whether the coordinate lies inside the box or on its edge.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.lat_interval().contains(coord.latitude)
            && self.lon_interval().contains(coord.longitude)
    }

    /// Whether `other` lies entirely within this box, edges included.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains(&other.sw) && self.contains(&other.ne)
    }

    /// Whether `other` lies within this box and is not equal to it.
    pub fn strictly_contains(&self, other: &BoundingBox) -> bool {
        self.contains_box(other) && self != other
    }
}

impl GeometryTrait for BoundingBox {
    type T = f64;
    type PointType<'a>
        = UnimplementedPoint<f64>
    where
        Self: 'a;
    type LineStringType<'a>
        = UnimplementedLineString<f64>
    where
        Self: 'a;
    type PolygonType<'a>
        = UnimplementedPolygon<f64>
    where
        Self: 'a;
    type MultiPointType<'a>
        = UnimplementedMultiPoint<f64>
    where
        Self: 'a;
    type MultiLineStringType<'a>
        = UnimplementedMultiLineString<f64>
    where
        Self: 'a;
    type MultiPolygonType<'a>
        = UnimplementedMultiPolygon<f64>
    where
        Self: 'a;
    type GeometryCollectionType<'a>
        = UnimplementedGeometryCollection<f64>
    where
        Self: 'a;
    type RectType<'a>
        = BoundingBox
    where
        Self: 'a;
    type TriangleType<'a>
        = UnimplementedTriangle<f64>
    where
        Self: 'a;
    type LineType<'a>
        = UnimplementedLine<f64>
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        UnimplementedPoint<f64>,
        UnimplementedLineString<f64>,
        UnimplementedPolygon<f64>,
        UnimplementedMultiPoint<f64>,
        UnimplementedMultiLineString<f64>,
        UnimplementedMultiPolygon<f64>,
        UnimplementedGeometryCollection<f64>,
        BoundingBox,
        UnimplementedTriangle<f64>,
        UnimplementedLine<f64>,
    > {
        GeometryType::Rect(self)
    }
}

// min is the south-west corner and max the north-east one.
impl RectTrait for BoundingBox {
    type CoordType<'a>
        = Coordinate
    where
        Self: 'a;

    fn min(&self) -> Self::CoordType<'_> {
        self.sw
    }

    fn max(&self) -> Self::CoordType<'_> {
        self.ne
    }
}

#[cfg(feature = "use-geo_0_31")]
mod geo_interop {
    use super::{BoundingBox, Coordinate};
    use geo_0_31::{coord, Coord, Point, Rect};

    impl From<Coordinate> for Coord<f64> {
        fn from(value: Coordinate) -> Self {
            coord! { x: value.longitude, y: value.latitude }
        }
    }

    impl From<Coordinate> for Point<f64> {
        fn from(value: Coordinate) -> Self {
            Point::new(value.longitude, value.latitude)
        }
    }

    impl From<Coord<f64>> for Coordinate {
        fn from(value: Coord<f64>) -> Self {
            Coordinate::new(value.y, value.x)
        }
    }

    impl From<&BoundingBox> for Rect<f64> {
        fn from(value: &BoundingBox) -> Self {
            Rect::new(Coord::from(value.sw()), Coord::from(value.ne()))
        }
    }
}
