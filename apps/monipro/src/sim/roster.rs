//! Server roster draw

use rand::Rng;

use crate::types::{ServerHealth, ServerStatus};

/// Number of servers in the fixed roster
pub const SERVER_COUNT: usize = 5;

/// A server is online when its draw exceeds this value
const WARNING_CUTOFF: f64 = 0.2;

/// Draw a status for every server in the roster
///
/// Each server is independent: online with probability 0.8, otherwise
/// warning. `Offline` is never produced here.
pub fn draw_roster<R: Rng + ?Sized>(rng: &mut R) -> Vec<ServerStatus> {
    (1..=SERVER_COUNT)
        .map(|index| ServerStatus {
            name: format!("Server {}", index),
            health: if rng.gen::<f64>() > WARNING_CUTOFF {
                ServerHealth::Online
            } else {
                ServerHealth::Warning
            },
            last_checked_minutes: rng.gen_range(1..=10),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_roster_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let roster = draw_roster(&mut rng);
        let names: Vec<&str> = roster.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Server 1", "Server 2", "Server 3", "Server 4", "Server 5"]
        );
    }

    #[test]
    fn test_never_offline_and_minutes_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..2_000 {
            for status in draw_roster(&mut rng) {
                assert_ne!(status.health, ServerHealth::Offline);
                assert!((1..=10).contains(&status.last_checked_minutes));
            }
        }
    }

    #[test]
    fn test_online_share_is_roughly_eighty_percent() {
        let mut rng = StdRng::seed_from_u64(5);
        let draws = 4_000;
        let online = (0..draws)
            .flat_map(|_| draw_roster(&mut rng))
            .filter(|s| s.health == ServerHealth::Online)
            .count();
        let share = online as f64 / (draws * SERVER_COUNT) as f64;
        assert!((0.77..0.83).contains(&share), "online share was {share}");
    }
}
