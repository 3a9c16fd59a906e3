//! Controller configuration structures and loaders.

use std::env;
use std::time::Duration;

use crate::api::{Result, RuntimeError};
use crate::step::Distance;

/// Tuning of the Blizzard Sorceress kill sequences.
///
/// Defaults match the values the controller was tuned with; every field can
/// be overridden from the environment through [`SorceressConfig::from_env`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SorceressConfig {
    /// Attack iterations spent on one target before giving up on it.
    pub max_attack_loops: u32,
    /// Range kept from the target when the caller supplies none.
    pub attack_distance: Distance,
    /// Fallback range once a target has soaked up too many iterations.
    pub close_distance: Distance,
    /// Iterations after which the fallback range kicks in.
    pub degrade_after_loops: u32,
    /// Minimum time between two area casts on nearby monsters.
    pub area_cast_cooldown: Duration,
    /// Monsters closer than this to the player trigger an area cast.
    pub area_clear_radius: u32,
    /// Minimum range kept from High Council members.
    pub council_min_distance: u32,
    /// How long to wait for a boss to show up before giving up.
    pub boss_search_timeout: Duration,
    /// Pause between two looks for a boss that has not shown up yet.
    pub boss_poll_interval: Duration,
    /// Kill actions queued after the debuff for multi-phase bosses.
    pub repeated_phase_kills: u32,
}

impl Default for SorceressConfig {
    fn default() -> Self {
        Self {
            max_attack_loops: 40,
            attack_distance: Distance::new(25, 30),
            close_distance: Distance::new(1, 5),
            degrade_after_loops: 12,
            area_cast_cooldown: Duration::from_secs(4),
            area_clear_radius: 4,
            council_min_distance: 8,
            boss_search_timeout: Duration::from_secs(20),
            boss_poll_interval: Duration::from_millis(100),
            repeated_phase_kills: 4,
        }
    }
}

impl SorceressConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables (unparsable values are ignored):
    /// - `SORC_MAX_ATTACK_LOOPS` - Iterations per target (default: 40)
    /// - `SORC_MIN_DISTANCE` - Default band lower bound (default: 25)
    /// - `SORC_MAX_DISTANCE` - Default band upper bound (default: 30)
    /// - `SORC_CLOSE_MIN_DISTANCE` - Fallback band lower bound (default: 1)
    /// - `SORC_CLOSE_MAX_DISTANCE` - Fallback band upper bound (default: 5)
    /// - `SORC_DEGRADE_AFTER_LOOPS` - Iterations before closing in (default: 12)
    /// - `SORC_AREA_COOLDOWN_MS` - Area cast cooldown (default: 4000)
    /// - `SORC_AREA_RADIUS` - Area cast trigger radius (default: 4)
    /// - `SORC_COUNCIL_MIN_DISTANCE` - Range kept from council members (default: 8)
    /// - `SORC_BOSS_TIMEOUT_MS` - Boss search timeout (default: 20000)
    /// - `SORC_BOSS_POLL_MS` - Pause between boss lookups (default: 100)
    /// - `SORC_PHASE_KILLS` - Kills queued for multi-phase bosses (default: 4)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Overlays the `SORC_*` keys resolved by `lookup` on the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read_u32 = |key: &str| parse::<u32>(lookup(key));
        let read_millis = |key: &str| parse::<u64>(lookup(key)).map(Duration::from_millis);
        let mut config = Self::default();

        if let Some(loops) = read_u32("SORC_MAX_ATTACK_LOOPS") {
            config.max_attack_loops = loops;
        }
        if let Some(min) = read_u32("SORC_MIN_DISTANCE") {
            config.attack_distance.min = min;
        }
        if let Some(max) = read_u32("SORC_MAX_DISTANCE") {
            config.attack_distance.max = max;
        }
        if let Some(min) = read_u32("SORC_CLOSE_MIN_DISTANCE") {
            config.close_distance.min = min;
        }
        if let Some(max) = read_u32("SORC_CLOSE_MAX_DISTANCE") {
            config.close_distance.max = max;
        }
        if let Some(loops) = read_u32("SORC_DEGRADE_AFTER_LOOPS") {
            config.degrade_after_loops = loops;
        }
        if let Some(cooldown) = read_millis("SORC_AREA_COOLDOWN_MS") {
            config.area_cast_cooldown = cooldown;
        }
        if let Some(radius) = read_u32("SORC_AREA_RADIUS") {
            config.area_clear_radius = radius;
        }
        if let Some(min) = read_u32("SORC_COUNCIL_MIN_DISTANCE") {
            config.council_min_distance = min;
        }
        if let Some(timeout) = read_millis("SORC_BOSS_TIMEOUT_MS") {
            config.boss_search_timeout = timeout;
        }
        if let Some(interval) = read_millis("SORC_BOSS_POLL_MS") {
            config.boss_poll_interval = interval;
        }
        if let Some(kills) = read_u32("SORC_PHASE_KILLS") {
            config.repeated_phase_kills = kills;
        }

        config
    }

    /// Checks that the configuration can drive a kill sequence.
    pub fn validate(&self) -> Result<()> {
        if self.max_attack_loops == 0 {
            return Err(invalid("max_attack_loops", "must be at least 1"));
        }
        if self.degrade_after_loops >= self.max_attack_loops {
            return Err(invalid(
                "degrade_after_loops",
                format!("must stay below max_attack_loops ({})", self.max_attack_loops),
            ));
        }
        for (key, band) in [
            ("attack_distance", self.attack_distance),
            ("close_distance", self.close_distance),
        ] {
            if band.min > band.max {
                return Err(invalid(key, format!("inverted band {band}")));
            }
        }
        if self.council_min_distance > self.attack_distance.max {
            return Err(invalid(
                "council_min_distance",
                format!("exceeds attack_distance.max ({})", self.attack_distance.max),
            ));
        }
        if self.boss_poll_interval.is_zero() {
            return Err(invalid("boss_poll_interval", "must be non-zero"));
        }
        Ok(())
    }
}

fn invalid(key: &'static str, reason: impl Into<String>) -> RuntimeError {
    RuntimeError::InvalidConfig {
        key,
        reason: reason.into(),
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = SorceressConfig::from_lookup(lookup(&[
            ("SORC_MAX_ATTACK_LOOPS", "60"),
            ("SORC_MIN_DISTANCE", "20"),
            ("SORC_CLOSE_MAX_DISTANCE", "7"),
            ("SORC_COUNCIL_MIN_DISTANCE", "10"),
            ("SORC_BOSS_TIMEOUT_MS", "15000"),
            ("SORC_BOSS_POLL_MS", "250"),
        ]));

        assert_eq!(config.max_attack_loops, 60);
        assert_eq!(config.attack_distance, Distance::new(20, 30));
        assert_eq!(config.close_distance, Distance::new(1, 7));
        assert_eq!(config.council_min_distance, 10);
        assert_eq!(config.boss_search_timeout, Duration::from_secs(15));
        assert_eq!(config.boss_poll_interval, Duration::from_millis(250));
        assert_eq!(config.degrade_after_loops, 12);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn unparsable_values_keep_defaults() {
        let config = SorceressConfig::from_lookup(lookup(&[
            ("SORC_MAX_ATTACK_LOOPS", "lots"),
            ("SORC_AREA_RADIUS", "-3"),
            ("SORC_AREA_COOLDOWN_MS", ""),
            ("SORC_DEGRADE_AFTER_LOOPS", "99999999999"),
            ("SORC_PHASE_KILLS", " 6 "),
        ]));

        assert_eq!(
            config,
            SorceressConfig {
                repeated_phase_kills: 6,
                ..SorceressConfig::default()
            }
        );
    }

    #[test]
    fn degrade_threshold_must_stay_below_loop_budget() {
        let config = SorceressConfig::from_lookup(lookup(&[(
            "SORC_DEGRADE_AFTER_LOOPS",
            "4294967295",
        )]));
        assert_eq!(config.degrade_after_loops, u32::MAX);
        assert!(matches!(
            config.validate(),
            Err(RuntimeError::InvalidConfig { key: "degrade_after_loops", .. })
        ));

        let config = SorceressConfig {
            degrade_after_loops: 39,
            ..SorceressConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn defaults_are_valid() {
        let config = SorceressConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.attack_distance, Distance::new(25, 30));
        assert_eq!(config.max_attack_loops, 40);
    }

    #[test]
    fn inverted_band_is_rejected() {
        let config = SorceressConfig {
            attack_distance: Distance::new(30, 25),
            ..SorceressConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RuntimeError::InvalidConfig { key: "attack_distance", .. })
        ));
    }

    #[test]
    fn zero_attack_loops_is_rejected() {
        let config = SorceressConfig {
            max_attack_loops: 0,
            ..SorceressConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
