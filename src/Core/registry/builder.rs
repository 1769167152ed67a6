use super::OpaqueRegistry;

pub struct RegistryBuilder {
    initial_capacity: usize,
    sweep_threshold: usize,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            sweep_threshold: 1024, // entries before the first sweep of dead wrappers
        }
    }
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Number of entries at which dead wrappers are swept. Clamped to at least 1.
    pub fn with_sweep_threshold(mut self, threshold: usize) -> Self {
        self.sweep_threshold = threshold.max(1);
        self
    }

    pub fn build(self) -> OpaqueRegistry {
        OpaqueRegistry::with_config(self.initial_capacity, self.sweep_threshold)
    }
}
