mod collections;

use std::fs::{read_dir, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use flate2::bufread::GzDecoder;
use log::info;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::feature::FeatureCollection;
use crate::geojson::{parse_str, GeoJsonError};

pub use collections::Collections;


const EXTENSIONS: [&str; 2] = [".geojson.gz", ".geojson"];

/// Reads the stream into memory and decodes it in one go.
pub fn read_geojson(mut reader: impl Read) -> Result<FeatureCollection, GeoJsonError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_str(&text)
}

/// Reads a GeoJSON file, gunzipping it first when its name ends in `.gz`.
pub fn read_geojson_file(path: &Path) -> anyhow::Result<FeatureCollection> {
    let file = File::open(path).with_context(|| format!("Couldn't open {}", path.display()))?;
    let buf = BufReader::new(file);

    let result = if is_gzipped(path) {
        read_geojson(GzDecoder::new(buf))
    } else {
        read_geojson(buf)
    };

    result.with_context(|| format!("Couldn't load {}", path.display()))
}

/// Loads a single file as one layer, or every GeoJSON file below a directory.
pub fn load(path: &Path) -> anyhow::Result<Collections> {
    if path.is_dir() {
        return load_geo_jsons(path);
    }
    if !path.is_file() {
        bail!("{} is neither a file nor a directory", path.display());
    }

    let name = layer_name(path.file_name().map(Path::new).unwrap_or(path));
    let mut collections = Collections::new();
    collections.insert(name, read_geojson_file(path)?);
    Ok(collections)
}

/// Decodes all `*.geojson` and `*.geojson.gz` files below `input_path` in
/// parallel. Layers are named by their path relative to `input_path`.
pub fn load_geo_jsons(input_path: &Path) -> anyhow::Result<Collections> {
    let layers = find_files_rec(input_path)?
        .into_par_iter()
        .map(|path| -> anyhow::Result<(String, FeatureCollection)> {
            let name = layer_name(path.strip_prefix(input_path)?);
            let collection = read_geojson_file(&path)?;
            info!("loaded layer '{}' with {} features", name, collection.len());
            Ok((name, collection))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut collections = Collections::new();
    for (name, collection) in layers {
        if collections.contains_key(&name) {
            bail!("layer '{}' is provided by more than one file", name);
        }
        collections.insert(name, collection);
    }

    Ok(collections)
}

fn find_files_rec(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(find_files_rec(&path)?);
        } else if has_geojson_extension(&path) {
            files.push(path);
        }
    }

    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn has_geojson_extension(path: &Path) -> bool {
    let name = file_name(path);
    EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

fn is_gzipped(path: &Path) -> bool {
    file_name(path).ends_with(".gz")
}

fn layer_name(rel_path: &Path) -> String {
    let name = rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .map(str::to_string)
        .unwrap_or(name)
}
