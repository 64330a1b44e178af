/// Configuration for the [`KMeans`](crate::KMeans) facade
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansConfig {
    /// Number of clusters
    pub k: usize,

    /// Number of assign/update iterations to run
    pub iterations: usize,

    /// Random seed for centroid initialization
    pub seed: u64,

    /// Stop as soon as an assignment pass leaves every cluster's membership unchanged.
    /// When false, exactly `iterations` iterations are run.
    pub early_stop: bool,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: 3,
            iterations: 20,
            seed: 0,
            early_stop: false,
        }
    }
}

impl KMeansConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the number of iterations
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable stopping once membership stabilizes
    pub fn with_early_stop(mut self, early_stop: bool) -> Self {
        self.early_stop = early_stop;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KMeansConfig::default();
        assert_eq!(config.k, 3);
        assert_eq!(config.iterations, 20);
        assert_eq!(config.seed, 0);
        assert!(!config.early_stop);
    }

    #[test]
    fn test_builder_methods() {
        let config = KMeansConfig::new(7)
            .with_iterations(5)
            .with_seed(42)
            .with_early_stop(true);

        assert_eq!(config.k, 7);
        assert_eq!(config.iterations, 5);
        assert_eq!(config.seed, 42);
        assert!(config.early_stop);
    }
}
