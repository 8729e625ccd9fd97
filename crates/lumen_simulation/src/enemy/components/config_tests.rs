//! Tests for enemy config.

#[cfg(test)]
mod tests {
    use super::super::config::EnemyConfig;
    use crate::config::ConfigError;

    #[test]
    fn test_enemy_config_default() {
        let config = EnemyConfig::default();
        assert_eq!(config.sight_range, 8.0);
        assert_eq!(config.catch_range, 1.5);
        assert_eq!(config.kill_delay, 2.0);
        assert_eq!(config.catch_cooldown, 3.0);
        assert_eq!(config.max_resistance, 100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_catch_range_beyond_sight_rejected() {
        let config = EnemyConfig {
            catch_range: 9.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Inconsistent(_))));
    }

    #[test]
    fn test_non_positive_range_rejected() {
        let config = EnemyConfig {
            sight_range: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "enemy.sight_range", .. })
        ));
    }

    #[test]
    fn test_nan_rejected() {
        let config = EnemyConfig {
            idle_time: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Negative { .. })));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EnemyConfig = serde_json::from_str(r#"{ "sight_range": 12.0 }"#).unwrap();
        assert_eq!(config.sight_range, 12.0);
        assert_eq!(config.catch_range, 1.5);
    }
}
