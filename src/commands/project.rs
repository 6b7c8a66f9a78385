use clap::{arg, Arg, ArgMatches};
use serde::Serialize;
use serde_json::to_string_pretty;

use tile_geojson::projection::{latitude, longitude, PixelCoord, TileCoord};

use crate::commands::Command;


#[derive(Debug, Serialize)]
pub struct ProjectionReport {
    pub zoom: f64,
    pub pixel: PixelCoord,
    pub tile: TileCoord,
}

#[derive(Debug, Serialize)]
pub struct UnprojectionReport {
    pub zoom: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub tile: TileCoord,
}

pub fn projection_report(latitude: f64, longitude: f64, zoom: f64) -> ProjectionReport {
    let pixel = PixelCoord::from_degrees(latitude, longitude, zoom);
    ProjectionReport { zoom, pixel, tile: pixel.tile() }
}

pub fn unprojection_report(x: i64, y: i64, zoom: f64) -> UnprojectionReport {
    let pixel = PixelCoord { x, y };
    UnprojectionReport {
        zoom,
        latitude: latitude(y, zoom),
        longitude: longitude(x, zoom),
        tile: pixel.tile(),
    }
}

fn zoom_arg() -> Arg<'static> {
    arg!(-z --zoom <ZOOM> "Zoom level")
}

pub struct Project {}

impl Command for Project {
    fn get_description(&self) -> &'static str {
        "Convert latitude/longitude to global pixel and tile coordinates."
    }

    fn args(&self) -> Vec<Arg<'static>> {
        vec![
            arg!(--lat <LATITUDE> "Latitude in degrees").allow_hyphen_values(true),
            arg!(--lon <LONGITUDE> "Longitude in degrees").allow_hyphen_values(true),
            zoom_arg(),
        ]
    }

    fn exec(&self, args: &ArgMatches) -> anyhow::Result<()> {
        let report = projection_report(
            args.value_of_t("lat")?,
            args.value_of_t("lon")?,
            args.value_of_t("zoom")?,
        );
        println!("{}", to_string_pretty(&report)?);
        Ok(())
    }
}

pub struct Unproject {}

impl Command for Unproject {
    fn get_description(&self) -> &'static str {
        "Convert global pixel coordinates back to latitude/longitude."
    }

    fn args(&self) -> Vec<Arg<'static>> {
        vec![
            arg!(--x <X> "Global pixel column").allow_hyphen_values(true),
            arg!(--y <Y> "Global pixel row").allow_hyphen_values(true),
            zoom_arg(),
        ]
    }

    fn exec(&self, args: &ArgMatches) -> anyhow::Result<()> {
        let report = unprojection_report(
            args.value_of_t("x")?,
            args.value_of_t("y")?,
            args.value_of_t("zoom")?,
        );
        println!("{}", to_string_pretty(&report)?);
        Ok(())
    }
}
