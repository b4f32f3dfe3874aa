//! Ordered combination of sources.

use tracing::debug;

use super::ConfigSource;

/// Consults its layers in insertion order; the first layer defining a key wins.
#[derive(Default)]
pub struct LayeredSource {
    layers: Vec<Box<dyn ConfigSource>>,
}

impl LayeredSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer with lower precedence than every existing layer.
    pub fn push(&mut self, source: impl ConfigSource + 'static) {
        self.layers.push(Box::new(source));
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Names of the layers, highest precedence first.
    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|layer| layer.name()).collect()
    }
}

impl ConfigSource for LayeredSource {
    fn get(&self, key: &str) -> Option<String> {
        self.layers.iter().find_map(|layer| {
            let value = layer.get(key)?;
            debug!(key, source = layer.name(), "resolved configuration key");
            Some(value)
        })
    }

    fn name(&self) -> &str {
        "layered"
    }
}

impl std::fmt::Debug for LayeredSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredSource")
            .field("layers", &self.layer_names())
            .finish()
    }
}
