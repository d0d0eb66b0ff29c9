#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistryMetrics {
    pub registered: usize,
    pub rejected: usize,
}

impl RegistryMetrics {
    pub fn record_insert(&mut self) {
        self.registered += 1;
    }

    pub fn record_reject(&mut self) {
        self.rejected += 1;
    }
}
