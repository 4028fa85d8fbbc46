//! Construction of grids from code ([`GridBuilder`]) or from configuration files ([`GridConfig`]).

use hexgeo_types::geo::{GeoProjection, ProjectionKind};
use serde::{Deserialize, Serialize};

use crate::error::HexGeoError;
use crate::grid::Grid;
use crate::hexgrid::Orientation;
use crate::morton::Morton64;

/// Serializable description of a grid.
///
/// ```
/// use hexgeo::GridConfig;
///
/// let config: GridConfig = serde_json::from_str(r#"{
///     "orientation": "pointy",
///     "cell_size": 1000.0,
///     "projection": "sinusoidal"
/// }"#)?;
/// let grid = config.build()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Orientation of the hexes.
    pub orientation: Orientation,
    /// Distance from the center of a hex to its corners, in planar units of the projection.
    pub cell_size: f64,
    /// Projection of the grid.
    pub projection: ProjectionKind,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Flat,
            cell_size: 500.0,
            projection: ProjectionKind::SphericalMercator,
        }
    }
}

impl GridConfig {
    /// Creates a grid with the default engine.
    pub fn build(&self) -> Result<Grid, HexGeoError> {
        GridBuilder::from(*self).build()
    }
}

/// Constructor for a [`Grid`] with the default [`HexGrid`](crate::HexGrid) engine.
///
/// ```
/// use hexgeo::{GridBuilder, Orientation};
/// use hexgeo::hexgeo_types::geo::PROJECTION_AEP;
///
/// let grid = GridBuilder::new()
///     .with_orientation(Orientation::Pointy)
///     .with_cell_size(0.001)
///     .with_projection(&PROJECTION_AEP)
///     .build()?;
/// # Ok::<(), hexgeo::error::HexGeoError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GridBuilder {
    orientation: Orientation,
    cell_size: f64,
    projection: &'static dyn GeoProjection,
    index: Option<Morton64>,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::from(GridConfig::default())
    }
}

impl From<GridConfig> for GridBuilder {
    fn from(config: GridConfig) -> Self {
        Self {
            orientation: config.orientation,
            cell_size: config.cell_size,
            projection: config.projection.projection(),
            index: None,
        }
    }
}

impl GridBuilder {
    /// Initializes a builder with the values of [`GridConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the orientation of the hexes.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the distance from the center of a hex to its corners.
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Sets the projection.
    pub fn with_projection(mut self, projection: &'static dyn GeoProjection) -> Self {
        self.projection = projection;
        self
    }

    /// Sets one of the built-in projections.
    pub fn with_projection_kind(self, kind: ProjectionKind) -> Self {
        self.with_projection(kind.projection())
    }

    /// Sets the index used to encode hexes. It must have 2 dimensions.
    pub fn with_index(mut self, index: Morton64) -> Self {
        self.index = Some(index);
        self
    }

    /// Creates the grid.
    ///
    /// # Errors
    ///
    /// Fails if the cell size is not a positive finite number or the index does not have two
    /// dimensions.
    pub fn build(self) -> Result<Grid, HexGeoError> {
        match self.index {
            Some(index) => {
                Grid::with_index(self.orientation, self.cell_size, self.projection, index)
            }
            None => Grid::new(self.orientation, self.cell_size, self.projection),
        }
    }
}
