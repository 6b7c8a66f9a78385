use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use clap::{arg, Arg, ArgMatches};
use serde::Serialize;
use serde_json::to_string_pretty;

use tile_geojson::loader::{load, Collections};

use crate::commands::Command;


#[derive(Debug, Serialize)]
pub struct LayerSummary {
    pub name: String,
    pub features: usize,
    pub geometry_types: BTreeMap<&'static str, usize>,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub layers: Vec<LayerSummary>,
}

pub fn summarize(collections: &Collections) -> Summary {
    let layers = collections
        .layer_names()
        .into_iter()
        .map(|name| {
            let features = &collections[&name];
            let mut geometry_types = BTreeMap::new();
            for feature in features.iter() {
                *geometry_types.entry(feature.geometry.type_name()).or_insert(0) += 1;
            }
            LayerSummary { features: features.len(), geometry_types, name }
        })
        .collect();

    Summary { layers }
}

pub struct Inspect {}

impl Command for Inspect {
    fn get_description(&self) -> &'static str {
        "Summarize the features of a GeoJSON file or a directory of GeoJSON layers."
    }

    fn args(&self) -> Vec<Arg<'static>> {
        vec![arg!(-i --input <INPUT> "Path to a .geojson(.gz) file or a directory")]
    }

    fn exec(&self, args: &ArgMatches) -> anyhow::Result<()> {
        let input_path = Path::new(args.value_of("input").unwrap_or_default());

        let now = Instant::now();
        println!("▶️  Loading {}", input_path.display());
        let collections = load(input_path)?;
        println!(
            "✔️  Loaded {} layer(s) in {}ms",
            collections.len(),
            now.elapsed().as_millis()
        );

        println!("{}", to_string_pretty(&summarize(&collections))?);

        Ok(())
    }
}
