//! Snapshot generation

use rand::Rng;

use crate::types::MetricsSnapshot;

/// Draw a fresh snapshot
///
/// Every field is an independent uniform draw. The only input is the random
/// source; no previous snapshot is consulted.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> MetricsSnapshot {
    MetricsSnapshot {
        cpu_percent: percent(rng),
        memory_percent: percent(rng),
        disk_percent: percent(rng),
        network_percent: percent(rng),
        uptime_percent: uptime(rng),
        active_servers: rng.gen_range(5..8),
        active_alerts: rng.gen_range(0..5),
    }
}

fn percent<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(0..100)
}

/// `floor(99.5 + u * 0.5)` with `u` uniform in [0, 1).
///
/// Kept exactly as written even though it almost always yields 99.
fn uptime<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    (99.5 + rng.gen::<f64>() * 0.5).floor() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let s = generate(&mut rng);
            assert!(s.cpu_percent < 100);
            assert!(s.memory_percent < 100);
            assert!(s.disk_percent < 100);
            assert!(s.network_percent < 100);
            assert!((5..=7).contains(&s.active_servers));
            assert!(s.active_alerts <= 4);
            assert!((99..=100).contains(&s.uptime_percent));
        }
    }

    #[test]
    fn test_uptime_formula_yields_99() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            assert_eq!(generate(&mut rng).uptime_percent, 99);
        }
    }

    #[test]
    fn test_discrete_ranges_are_covered() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut servers = [false; 8];
        let mut alerts = [false; 5];
        for _ in 0..1_000 {
            let s = generate(&mut rng);
            servers[s.active_servers as usize] = true;
            alerts[s.active_alerts as usize] = true;
        }
        assert_eq!(servers, [false, false, false, false, false, true, true, true]);
        assert!(alerts.iter().all(|seen| *seen));
    }

    #[test]
    fn test_output_depends_only_on_rng() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(generate(&mut a), generate(&mut b));

        // Consecutive draws from one source differ; nothing is carried over.
        let draws: Vec<MetricsSnapshot> = (0..20).map(|_| generate(&mut a)).collect();
        assert!(draws.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
