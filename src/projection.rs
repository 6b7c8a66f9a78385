//! Spherical Web-Mercator transforms between degrees, global pixels and tiles.
//!
//! All functions are total: outside of the ±[`MAX_LATITUDE`] band they return
//! non-finite floats or saturated integers instead of failing. Float to integer
//! conversion uses `as`, so `NaN` becomes `0` and infinities clamp to the
//! bounds of `i64`.

use std::f64::consts::PI;

use serde::Serialize;


/// Latitude at which the square Web-Mercator world ends, in degrees.
pub const MAX_LATITUDE: f64 = 85.05112878;

/// Edge length of a tile in pixels.
pub const TILE_SIZE_IN_PX: i64 = 256;

/// Half of the world width in pixels at `zoom`.
fn half_world(zoom: f64) -> f64 {
    2_f64.powf(zoom + 7.0)
}

/// `atanh(sin(MAX_LATITUDE))`, the y offset moving the origin to the top edge.
fn top_edge() -> f64 {
    atanh((PI / 180.0 * MAX_LATITUDE).sin())
}

pub fn pixel_x(longitude: f64, zoom: f64) -> i64 {
    (half_world(zoom) * (longitude / 180.0 + 1.0)).floor() as i64
}

pub fn pixel_y(latitude: f64, zoom: f64) -> i64 {
    let y = half_world(zoom) / PI * (-atanh((PI / 180.0 * latitude).sin()) + top_edge());
    y.floor() as i64
}

pub fn longitude(x: i64, zoom: f64) -> f64 {
    180.0 * (x as f64 / half_world(zoom) - 1.0)
}

pub fn latitude(y: i64, zoom: f64) -> f64 {
    180.0 / PI * (-PI / half_world(zoom) * y as f64 + top_edge()).tanh().asin()
}

pub fn tile_x(x: i64) -> i64 {
    x / TILE_SIZE_IN_PX
}

pub fn tile_y(y: i64) -> i64 {
    y / TILE_SIZE_IN_PX
}

/// Inverse hyperbolic tangent, infinite at `±1` and `NaN` beyond.
pub fn atanh(x: f64) -> f64 {
    0.5 * ((1.0 + x) / (1.0 - x)).ln()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelCoord {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileCoord {
    pub x: i64,
    pub y: i64,
}

impl PixelCoord {
    pub fn from_degrees(latitude: f64, longitude: f64, zoom: f64) -> Self {
        PixelCoord {
            x: pixel_x(longitude, zoom),
            y: pixel_y(latitude, zoom),
        }
    }

    /// Returns `(latitude, longitude)` of the pixel's top-left corner.
    pub fn to_degrees(&self, zoom: f64) -> (f64, f64) {
        (latitude(self.y, zoom), longitude(self.x, zoom))
    }

    pub fn tile(&self) -> TileCoord {
        TileCoord {
            x: tile_x(self.x),
            y: tile_y(self.y),
        }
    }
}
