//! Flashlight component (battery + beam параметры).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Фонарь игрока
///
/// Инвариант: 0 ≤ battery ≤ max_battery. Включён только пока держим кнопку
/// и есть заряд; на нуле гаснет сам.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
#[serde(default)]
pub struct Flashlight {
    pub battery: f32,
    pub max_battery: f32,
    /// Разряд пока включён (units/sec)
    pub drain_rate: f32,
    /// Заряд пока is_recharging (units/sec)
    pub recharge_rate: f32,
    /// Выставляется станцией зарядки
    pub is_recharging: bool,
    /// Дальность луча (метры)
    pub max_distance: f32,
    /// Урон resistance врага (units/sec попадания)
    pub dazzle_rate: f32,
    #[serde(skip)]
    on: bool,
}

impl Default for Flashlight {
    fn default() -> Self {
        Self {
            battery: 100.0,
            max_battery: 100.0,
            drain_rate: 5.0,
            recharge_rate: 20.0,
            is_recharging: false,
            max_distance: 10.0,
            dazzle_rate: 20.0,
            on: false,
        }
    }
}

impl Flashlight {
    /// Default-параметры с заданным стартовым зарядом (clamp в [0, max_battery])
    pub fn with_battery(battery: f32) -> Self {
        let mut flashlight = Self::default();
        flashlight.battery = battery.clamp(0.0, flashlight.max_battery);
        flashlight
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn is_full(&self) -> bool {
        self.battery >= self.max_battery
    }

    /// Один тик: input → drain → recharge
    pub fn update(&mut self, held: bool, delta: f32) {
        let was_on = self.on;
        self.on = held && self.battery > 0.0;

        if self.on {
            self.battery = (self.battery - self.drain_rate * delta).max(0.0);
        }

        if self.battery <= 0.0 {
            self.on = false;
        }

        if self.is_recharging && self.battery < self.max_battery {
            self.battery = (self.battery + self.recharge_rate * delta).min(self.max_battery);
        }

        if was_on && !self.on && self.battery <= 0.0 {
            crate::log("Flashlight: battery depleted → off");
        }
    }

    /// Мгновенная подзарядка (clamped)
    pub fn recharge(&mut self, amount: f32) {
        self.battery = (self.battery + amount).min(self.max_battery);
    }

    pub fn set_recharging(&mut self, value: bool) {
        self.is_recharging = value;
    }

    /// Сколько resistance снимает одно попадание за тик
    pub fn dazzle_amount(&self, delta: f32) -> f32 {
        self.dazzle_rate * delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashlight_drains_while_held() {
        let mut flashlight = Flashlight::default();

        flashlight.update(true, 2.0);
        assert!(flashlight.is_on());
        assert_eq!(flashlight.battery, 90.0);

        flashlight.update(false, 2.0);
        assert!(!flashlight.is_on());
        assert_eq!(flashlight.battery, 90.0); // выключен: не тратим
    }

    #[test]
    fn test_flashlight_turns_off_when_empty() {
        let mut flashlight = Flashlight {
            battery: 3.0,
            ..Default::default()
        };

        flashlight.update(true, 1.0); // 3 - 5 → clamp 0
        assert_eq!(flashlight.battery, 0.0);
        assert!(!flashlight.is_on());

        flashlight.update(true, 1.0);
        assert!(!flashlight.is_on()); // без заряда не включается
    }

    #[test]
    fn test_flashlight_recharge_clamped() {
        let mut flashlight = Flashlight {
            battery: 95.0,
            ..Default::default()
        };
        flashlight.recharge(20.0);
        assert_eq!(flashlight.battery, 100.0);
        assert!(flashlight.is_full());
    }

    #[test]
    fn test_flashlight_recharging_flag() {
        let mut flashlight = Flashlight {
            battery: 50.0,
            ..Default::default()
        };
        flashlight.set_recharging(true);

        flashlight.update(false, 1.0); // +20
        assert_eq!(flashlight.battery, 70.0);

        flashlight.update(false, 10.0); // clamp
        assert_eq!(flashlight.battery, 100.0);
    }

    #[test]
    fn test_dazzle_amount_scales_with_delta() {
        let flashlight = Flashlight::default();
        assert_eq!(flashlight.dazzle_amount(1.0), 20.0);
        assert_eq!(flashlight.dazzle_amount(0.5), 10.0);
    }
}
