use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use crate::feature::FeatureCollection;

/// Feature collections keyed by layer name.
#[derive(Debug, Default)]
pub struct Collections(pub HashMap<String, FeatureCollection>);

impl Collections {
    pub fn new() -> Self {
        Collections(HashMap::new())
    }

    /// Layer names in lexical order.
    pub fn layer_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.keys().cloned().collect();
        names.sort();
        names
    }
}

impl FromIterator<(String, FeatureCollection)> for Collections {
    fn from_iter<I: IntoIterator<Item = (String, FeatureCollection)>>(iter: I) -> Self {
        Collections(iter.into_iter().collect())
    }
}

impl Deref for Collections {
    type Target = HashMap<String, FeatureCollection>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Collections {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
