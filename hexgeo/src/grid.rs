use hexgeo_types::geo::{GeoPoint2d, GeoProjection, Projection};
use hexgeo_types::Point2d;
use log::{debug, trace};

use crate::engine::HexEngine;
use crate::error::HexGeoError;
use crate::hexgrid::{HexGrid, Orientation};
use crate::morton::Morton64;

/// Number of index dimensions: `q` and `r` hex coordinates.
const INDEX_DIMENSIONS: u32 = 2;
/// Bits per coordinate in the hex codes.
const INDEX_BITS: u32 = 31;

/// Hexagonal grid over geographic coordinates.
///
/// Geographic points are converted into planar coordinates with the grid projection, and then
/// the planar [engine](HexEngine) does the hex math. Planar results are converted back into
/// geographic coordinates with the same projection.
///
/// ```
/// use hexgeo::{make_grid, Orientation};
/// use hexgeo::hexgeo_types::geo::{GeoPoint2d, PROJECTION_SM};
///
/// let grid = make_grid(Orientation::Flat, 500.0, &PROJECTION_SM)?;
/// let hex = grid.hex_at(&GeoPoint2d::lonlat(-73.0, 40.0))?;
/// let corners = grid.hex_corners(&hex)?;
/// # Ok::<(), hexgeo::error::HexGeoError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Grid<E = HexGrid> {
    engine: E,
    projection: &'static dyn GeoProjection,
}

/// Creates a grid with the default [`HexGrid`] engine.
///
/// The hex `(0, 0)` is centered at the planar origin and `size` is the distance in planar units
/// from the center of a hex to its corners.
pub fn make_grid(
    orientation: Orientation,
    size: f64,
    projection: &'static dyn GeoProjection,
) -> Result<Grid, HexGeoError> {
    Grid::new(orientation, size, projection)
}

impl Grid<HexGrid> {
    /// Creates a grid with the default [`HexGrid`] engine. See [`make_grid`].
    pub fn new(
        orientation: Orientation,
        size: f64,
        projection: &'static dyn GeoProjection,
    ) -> Result<Self, HexGeoError> {
        let index = Morton64::new(INDEX_DIMENSIONS, INDEX_BITS)?;
        Self::with_index(orientation, size, projection, index)
    }

    pub(crate) fn with_index(
        orientation: Orientation,
        size: f64,
        projection: &'static dyn GeoProjection,
        index: Morton64,
    ) -> Result<Self, HexGeoError> {
        debug!(
            "Creating {orientation:?} hex grid with size {size} and projection {projection:?}"
        );

        let engine = HexGrid::new(
            orientation,
            Point2d::new(0.0, 0.0),
            Point2d::new(size, size),
            index,
        )?;

        Ok(Self::with_engine(engine, projection))
    }
}

impl<E: HexEngine> Grid<E> {
    /// Creates a grid with the given engine.
    pub fn with_engine(engine: E, projection: &'static dyn GeoProjection) -> Self {
        Self { engine, projection }
    }

    /// Planar engine of the grid.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Projection used by the grid.
    pub fn projection(&self) -> &'static dyn GeoProjection {
        self.projection
    }

    /// Encodes a hex into an integer code.
    pub fn hex_to_code(&self, hex: &E::Hex) -> Result<u64, HexGeoError> {
        Ok(self.engine.hex_to_code(hex)?)
    }

    /// Decodes a hex from its code.
    pub fn hex_from_code(&self, code: u64) -> Result<E::Hex, HexGeoError> {
        Ok(self.engine.hex_from_code(code)?)
    }

    /// Hex that contains the geographic point.
    ///
    /// Fails if the point is outside of the projection domain.
    pub fn hex_at(&self, point: &GeoPoint2d) -> Result<E::Hex, HexGeoError> {
        let projected = self.projection.project(point)?;
        let hex = self.engine.hex_at(&projected)?;
        trace!("Point {point:?} projected to {projected:?} is in hex {hex:?}");

        Ok(hex)
    }

    /// Geographic coordinates of the hex center.
    pub fn hex_center(&self, hex: &E::Hex) -> Result<GeoPoint2d, HexGeoError> {
        Ok(self.projection.unproject(&self.engine.hex_center(hex))?)
    }

    /// Geographic coordinates of the six hex corners.
    ///
    /// Corners are unprojected one by one, so the resulting polygon is not necessarily a
    /// regular hexagon.
    pub fn hex_corners(&self, hex: &E::Hex) -> Result<[GeoPoint2d; 6], HexGeoError> {
        let mut corners = [GeoPoint2d::default(); 6];
        for (corner, planar) in corners.iter_mut().zip(self.engine.hex_corners(hex)) {
            *corner = self.projection.unproject(&planar)?;
        }

        Ok(corners)
    }

    /// The hex itself followed by all hexes within `layers` steps from it.
    pub fn hex_neighbors(&self, hex: &E::Hex, layers: u32) -> Vec<E::Hex> {
        self.engine.hex_neighbors(hex, layers)
    }

    /// Region covered by the geographic polygon.
    ///
    /// Vertices are projected in the given order. The polygon is closed implicitly, so the last
    /// vertex should not repeat the first one.
    pub fn make_region(&self, polygon: &[GeoPoint2d]) -> Result<E::Region, HexGeoError> {
        let points = polygon
            .iter()
            .map(|point| self.projection.project(point))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.engine.make_region(&points)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::hexgrid::Hex;
    use crate::tests::{Square, SquareEngine};
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use hexgeo_types::error::ProjectionError;
    use hexgeo_types::geo::{
        GeoPoint, ProjectionKind, PROJECTION_AEP, PROJECTION_NO_OP, PROJECTION_SIN, PROJECTION_SM,
    };

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn corners_of_hex_in_new_york() {
        init_logger();

        let grid = make_grid(Orientation::Flat, 500.0, &PROJECTION_SM).expect("valid grid");
        let hex = grid
            .hex_at(&GeoPoint2d::lonlat(-73.0, 40.0))
            .expect("point in domain");
        assert_eq!(hex, Hex::new(-10835, 11036));

        let corners = grid.hex_corners(&hex).expect("corners in domain");
        let expected = [
            GeoPoint2d::lonlat(-72.99485, 39.99877),
            GeoPoint2d::lonlat(-72.99710, 40.00175),
            GeoPoint2d::lonlat(-73.00159, 40.00175),
            GeoPoint2d::lonlat(-73.00384, 39.99877),
            GeoPoint2d::lonlat(-73.00159, 39.99579),
            GeoPoint2d::lonlat(-72.99710, 39.99579),
        ];
        for (corner, expected) in corners.iter().zip(expected) {
            assert_abs_diff_eq!(*corner, expected, epsilon = 1e-5);
        }
    }

    #[test]
    fn center_is_in_its_hex() {
        for kind in ProjectionKind::ALL {
            for orientation in Orientation::ALL {
                let size = match kind {
                    ProjectionKind::NoOp => 0.01,
                    ProjectionKind::AzimuthalEquidistant => 0.0001,
                    _ => 500.0,
                };
                let grid = make_grid(orientation, size, kind.projection()).expect("valid grid");

                let point = GeoPoint2d::lonlat(-73.0, 40.0);
                let hex = grid.hex_at(&point).expect("point in domain");
                let center = grid.hex_center(&hex).expect("center in domain");
                assert_eq!(grid.hex_at(&center), Ok(hex));
                assert_abs_diff_eq!(center, point, epsilon = 0.02);
            }
        }
    }

    #[test]
    fn code_round_trip() {
        let points = [
            GeoPoint2d::lonlat(-73.0, 40.0),
            GeoPoint2d::lonlat(139.69, 35.69),
            GeoPoint2d::lonlat(-0.1, -51.5),
            GeoPoint2d::lonlat(180.0, 0.0),
        ];

        for orientation in Orientation::ALL {
            for projection in [&PROJECTION_SIN as &'static dyn GeoProjection, &PROJECTION_SM] {
                let grid = make_grid(orientation, 500.0, projection).expect("valid grid");
                for point in &points {
                    let hex = grid.hex_at(point).expect("point in domain");
                    let code = grid.hex_to_code(&hex).expect("hex fits into index");
                    assert_eq!(grid.hex_from_code(code), Ok(hex));
                }
            }
        }
    }

    #[test]
    fn mercator_domain_violation() {
        let grid = make_grid(Orientation::Pointy, 500.0, &PROJECTION_SM).expect("valid grid");

        assert!(grid.hex_at(&GeoPoint2d::lonlat(10.0, 85.0)).is_ok());
        assert!(grid.hex_at(&GeoPoint2d::lonlat(10.0, -85.0)).is_ok());
        assert_matches!(
            grid.hex_at(&GeoPoint2d::lonlat(10.0, 85.06)),
            Err(HexGeoError::Projection(
                ProjectionError::LatitudeOutOfDomain { .. }
            ))
        );
        assert_matches!(
            grid.make_region(&[
                GeoPoint2d::lonlat(0.0, 0.0),
                GeoPoint2d::lonlat(1.0, 89.0),
                GeoPoint2d::lonlat(1.0, 0.0),
            ]),
            Err(HexGeoError::Projection(
                ProjectionError::LatitudeOutOfDomain { .. }
            ))
        );
    }

    #[test]
    fn invalid_coordinates() {
        let grid = make_grid(Orientation::Flat, 500.0, &PROJECTION_SIN).expect("valid grid");
        assert_matches!(
            grid.hex_at(&GeoPoint2d::lonlat(f64::NAN, 0.0)),
            Err(HexGeoError::Projection(
                ProjectionError::InvalidCoordinates { .. }
            ))
        );

        let grid = make_grid(Orientation::Flat, 1.0, &PROJECTION_NO_OP).expect("valid grid");
        assert_matches!(
            grid.hex_at(&GeoPoint2d::lonlat(f64::NAN, 0.0)),
            Err(HexGeoError::Engine(EngineError::NonFinitePoint { .. }))
        );
    }

    #[test]
    fn no_op_point_too_far_from_origin() {
        let grid = make_grid(Orientation::Flat, 1.0, &PROJECTION_NO_OP).expect("valid grid");
        assert_matches!(
            grid.hex_at(&GeoPoint2d::lonlat(1e30, 0.0)),
            Err(HexGeoError::Engine(EngineError::PointOutOfRange { .. }))
        );

        let grid = make_grid(Orientation::Flat, 1e-30, &PROJECTION_NO_OP).expect("valid grid");
        assert_matches!(
            grid.make_region(&[
                GeoPoint2d::lonlat(0.0, 0.0),
                GeoPoint2d::lonlat(1.0, 0.0),
                GeoPoint2d::lonlat(0.0, 1.0),
            ]),
            Err(HexGeoError::Engine(EngineError::PointOutOfRange { .. }))
        );
    }

    #[test]
    fn corners_across_antimeridian() {
        for projection in [&PROJECTION_SIN as &'static dyn GeoProjection, &PROJECTION_SM] {
            let grid = make_grid(Orientation::Flat, 500.0, projection).expect("valid grid");
            let hex = grid
                .hex_at(&GeoPoint2d::lonlat(-180.0, 0.001))
                .expect("point in domain");
            let corners = grid.hex_corners(&hex).expect("corners in domain");

            for corner in &corners {
                assert!(corner.lon() > -180.0 && corner.lon() <= 180.0);
                assert!(180.0 - corner.lon().abs() < 0.01);
                assert!(corner.lat().abs() < 0.01);
            }
            assert!(corners.iter().any(|corner| corner.lon() > 0.0));
            assert!(corners.iter().any(|corner| corner.lon() < 0.0));
        }
    }

    #[test]
    fn region_around_point() {
        let grid = make_grid(Orientation::Pointy, 500.0, &PROJECTION_SM).expect("valid grid");
        let polygon = [
            GeoPoint2d::lonlat(-73.02, 39.98),
            GeoPoint2d::lonlat(-72.98, 39.98),
            GeoPoint2d::lonlat(-72.98, 40.02),
            GeoPoint2d::lonlat(-73.02, 40.02),
        ];
        let region = grid.make_region(&polygon).expect("valid polygon");

        let inside = grid
            .hex_at(&GeoPoint2d::lonlat(-73.0, 40.0))
            .expect("point in domain");
        let outside = grid
            .hex_at(&GeoPoint2d::lonlat(-73.1, 40.1))
            .expect("point in domain");
        assert!(region.contains(&inside));
        assert!(!region.contains(&outside));
        for vertex in &polygon {
            let hex = grid.hex_at(vertex).expect("point in domain");
            assert!(region.contains(&hex));
        }
    }

    #[test]
    fn region_requires_three_vertices() {
        let grid = make_grid(Orientation::Flat, 500.0, &PROJECTION_SM).expect("valid grid");
        assert_matches!(
            grid.make_region(&[GeoPoint2d::lonlat(0.0, 0.0), GeoPoint2d::lonlat(1.0, 1.0)]),
            Err(HexGeoError::Engine(EngineError::NotEnoughVertices(2)))
        );
    }

    #[test]
    fn neighbors_pass_through() {
        let grid = make_grid(Orientation::Flat, 500.0, &PROJECTION_SM).expect("valid grid");
        let hex = Hex::new(5, -5);
        assert_eq!(
            grid.hex_neighbors(&hex, 2),
            grid.engine().hex_neighbors(&hex, 2)
        );
        assert_eq!(grid.hex_neighbors(&hex, 0), vec![hex]);
    }

    #[test]
    fn custom_engine_receives_projected_points() {
        let grid = Grid::with_engine(SquareEngine, &PROJECTION_AEP);

        let point = GeoPoint2d::lonlat(135.0, 0.0);
        let projected = PROJECTION_AEP.project(&point).expect("point in domain");
        let expected = std::f64::consts::FRAC_PI_2 * std::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(projected.x, expected, epsilon = 1e-12);
        assert_abs_diff_eq!(projected.y, expected, epsilon = 1e-12);
        assert_eq!(grid.hex_at(&point), Ok(Square(1, 1)));

        let polygon = [
            GeoPoint2d::lonlat(0.0, 0.0),
            GeoPoint2d::lonlat(90.0, 0.0),
            GeoPoint2d::lonlat(0.0, 80.0),
        ];
        let region = grid.make_region(&polygon).expect("valid polygon");
        assert_eq!(region.len(), 3);
        for (planar, geo) in region.iter().zip(&polygon) {
            let expected = PROJECTION_AEP.project(geo).expect("point in domain");
            assert_abs_diff_eq!(*planar, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn custom_engine_results_are_unprojected() {
        let grid = Grid::with_engine(SquareEngine, &PROJECTION_NO_OP);
        let square = Square(10, 20);

        assert_eq!(
            grid.hex_center(&square),
            Ok(GeoPoint2d::lonlat(10.5, 20.5))
        );

        let corners = grid.hex_corners(&square).expect("no-op never fails");
        assert_eq!(corners[0], GeoPoint2d::lonlat(11.0, 20.0));
        assert_eq!(corners[3], GeoPoint2d::lonlat(10.0, 21.0));

        let code = grid.hex_to_code(&square).expect("positive square");
        assert_eq!(grid.hex_from_code(code), Ok(square));
        assert_matches!(
            grid.hex_to_code(&Square(-1, 0)),
            Err(HexGeoError::Engine(EngineError::ValueOutOfRange { .. }))
        );
        assert_eq!(grid.hex_neighbors(&square, 1).len(), 9);
    }

    #[test]
    fn unprojection_failure_is_reported() {
        // Squares far beyond the South Pole of the azimuthal projection have no geographic
        // coordinates.
        let grid = Grid::with_engine(SquareEngine, &PROJECTION_AEP);
        assert_matches!(
            grid.hex_center(&Square(10, 10)),
            Err(HexGeoError::Projection(ProjectionError::OutOfDomain { .. }))
        );
        assert_matches!(
            grid.hex_corners(&Square(10, 10)),
            Err(HexGeoError::Projection(ProjectionError::OutOfDomain { .. }))
        );
    }
}
