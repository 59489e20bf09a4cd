use std::ops::Deref;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// Ordered coordinates of a decoded polyline, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Path {
    pub coordinates: Vec<Coordinate>,
}

impl Path {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    /// Smallest box containing every coordinate, `None` for an empty path.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut coordinates = self.coordinates.iter();
        let first = coordinates.next()?;
        Some(coordinates.fold(Bounds::point(*first), |bounds, coordinate| {
            bounds.extend(*coordinate)
        }))
    }
}

impl Deref for Path {
    type Target = [Coordinate];

    fn deref(&self) -> &Self::Target {
        &self.coordinates
    }
}

impl FromIterator<Coordinate> for Path {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

impl From<Vec<Coordinate>> for Path {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        Self::new(coordinates)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl Bounds {
    pub fn point(coordinate: Coordinate) -> Self {
        Self {
            south_west: coordinate,
            north_east: coordinate,
        }
    }

    pub fn extend(self, coordinate: Coordinate) -> Self {
        Self {
            south_west: Coordinate::new(
                self.south_west.latitude.min(coordinate.latitude),
                self.south_west.longitude.min(coordinate.longitude),
            ),
            north_east: Coordinate::new(
                self.north_east.latitude.max(coordinate.latitude),
                self.north_east.longitude.max(coordinate.longitude),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_has_no_bounds() {
        assert_eq!(Path::default().bounds(), None);
    }

    #[test]
    fn bounds_span_all_coordinates() {
        let path: Path = [(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)]
            .into_iter()
            .map(Coordinate::from)
            .collect();
        let bounds = path.bounds().unwrap();
        assert_eq!(bounds.south_west, Coordinate::new(38.5, -126.453));
        assert_eq!(bounds.north_east, Coordinate::new(43.252, -120.2));
    }

    #[test]
    fn serializes_as_plain_list() {
        let path = Path::new(vec![Coordinate::new(1.0, 2.0)]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"[{"latitude":1.0,"longitude":2.0}]"#);
    }
}
