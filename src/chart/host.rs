use std::collections::HashMap;
use std::collections::hash_map::Entry;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::dblog::RawRecord;

use super::{Chart, ChartConfig};

/// Charts keyed by container id. Attaching to an occupied container returns
/// the chart already there.
pub struct ChartHost {
    config: ChartConfig,
    seed: Option<u64>,
    charts: HashMap<String, Chart>,
}

impl ChartHost {
    pub fn new(config: ChartConfig, seed: Option<u64>) -> Self {
        Self {
            config,
            seed,
            charts: HashMap::new(),
        }
    }

    pub fn attach(&mut self, container: &str, records: &[RawRecord]) -> &mut Chart {
        let config = self.config;
        let seed = self.seed;
        match self.charts.entry(container.to_owned()) {
            Entry::Occupied(entry) => {
                tracing::debug!(container, "chart already attached");
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                entry.insert(Chart::new(container, records, config, &mut rng))
            }
        }
    }

    pub fn get(&self, container: &str) -> Option<&Chart> {
        self.charts.get(container)
    }

    pub fn get_mut(&mut self, container: &str) -> Option<&mut Chart> {
        self.charts.get_mut(container)
    }

    /// Disposes and drops the chart in `container`.
    pub fn detach(&mut self, container: &str) -> bool {
        match self.charts.remove(container) {
            Some(mut chart) => {
                chart.dispose();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

impl Drop for ChartHost {
    fn drop(&mut self) {
        for chart in self.charts.values_mut() {
            chart.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<RawRecord> {
        vec![
            RawRecord::new("cron", "Notice", "ok", 10.0),
            RawRecord::new("php", "Error", "fail", 90.0),
        ]
    }

    #[test]
    fn attach_is_idempotent_per_container() {
        let mut host = ChartHost::new(ChartConfig::default(), Some(9));
        host.attach("#chart", &records()).set_mode("type");

        let again = host.attach("#chart", &[RawRecord::new("user", "Info", "", 1.0)]);
        assert_eq!(again.nodes().len(), 2);
        assert_eq!(again.binder().elements().len(), 2);
        assert_eq!(again.mode(), super::super::ChartMode::SplitByType);
        assert_eq!(host.len(), 1);
    }

    #[test]
    fn containers_are_independent() {
        let mut host = ChartHost::new(ChartConfig::default(), Some(9));
        host.attach("#a", &records());
        host.attach("#b", &[]);

        assert_eq!(host.len(), 2);
        assert_eq!(host.get("#a").map(|chart| chart.nodes().len()), Some(2));
        assert_eq!(host.get("#b").map(|chart| chart.nodes().len()), Some(0));
    }

    #[test]
    fn detach_removes_the_chart() {
        let mut host = ChartHost::new(ChartConfig::default(), None);
        host.attach("#chart", &records());

        assert!(host.detach("#chart"));
        assert!(!host.detach("#chart"));
        assert!(host.is_empty());
        assert!(host.get_mut("#chart").is_none());
    }

    #[test]
    fn seeded_hosts_place_bubbles_identically() {
        let mut first = ChartHost::new(ChartConfig::default(), Some(3));
        let mut second = ChartHost::new(ChartConfig::default(), Some(3));
        let a = first.attach("#chart", &records()).nodes().to_vec();
        let b = second.attach("#chart", &records()).nodes().to_vec();
        assert_eq!(a, b);
    }
}
