//! ChargingStation component + pure update logic.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::economy::Wallet;
use crate::flashlight::Flashlight;

/// Состояние индикатора станции (приоритет сверху вниз)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum StationIndicator {
    /// Станция пуста
    Depleted,
    /// Фонарь игрока полный
    FlashlightFull,
    Charging,
    PlayerNearby,
    #[default]
    Idle,
}

/// Станция зарядки фонаря
///
/// Заряжает пока игрок рядом, держит interact, у станции есть заряд и фонарь
/// не полный. is_recharging фонаря переключается только на фронтах start/stop.
#[derive(Component, Debug, Clone, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
#[serde(default)]
pub struct ChargingStation {
    /// Внутренний заряд станции [0, 100]
    pub station_battery: f32,
    /// Скорость зарядки фонаря (units/sec)
    pub charge_rate: f32,
    /// Расход станции при зарядке (units/sec)
    pub drain_rate: f32,
    /// Самовосстановление (если auto_recharge)
    pub self_recharge_rate: f32,
    pub auto_recharge: bool,
    /// Радиус обнаружения игрока
    pub detection_radius: f32,
    /// Стоимость начала зарядки (монеты), 0: бесплатно
    pub activation_cost: u32,

    #[serde(skip)]
    charging: bool,
    #[serde(skip)]
    player_nearby: bool,
    #[serde(skip)]
    indicator: StationIndicator,
}

impl Default for ChargingStation {
    fn default() -> Self {
        Self {
            station_battery: 100.0,
            charge_rate: 25.0,
            drain_rate: 20.0,
            self_recharge_rate: 5.0,
            auto_recharge: false,
            detection_radius: 2.0,
            activation_cost: 0,
            charging: false,
            player_nearby: false,
            indicator: StationIndicator::Idle,
        }
    }
}

pub const STATION_MAX_BATTERY: f32 = 100.0;

impl ChargingStation {
    pub fn with_battery(station_battery: f32) -> Self {
        Self {
            station_battery: station_battery.clamp(0.0, STATION_MAX_BATTERY),
            ..Default::default()
        }
    }

    pub fn is_charging(&self) -> bool {
        self.charging
    }

    pub fn is_player_nearby(&self) -> bool {
        self.player_nearby
    }

    pub fn indicator(&self) -> StationIndicator {
        self.indicator
    }

    pub fn has_power(&self) -> bool {
        self.station_battery > 0.0
    }

    /// Один тик станции
    ///
    /// `flashlight`: фонарь ближайшего игрока (None → игрока нет).
    /// `wallet` нужен только при activation_cost > 0.
    pub fn update(
        &mut self,
        player_nearby: bool,
        interact_held: bool,
        mut flashlight: Option<&mut Flashlight>,
        wallet: Option<&mut Wallet>,
        delta: f32,
    ) {
        self.player_nearby = player_nearby;

        let flashlight_not_full = flashlight.as_deref().is_some_and(|f| !f.is_full());
        let wants_charge = player_nearby && interact_held && self.has_power() && flashlight_not_full;

        if wants_charge {
            self.start_charging(flashlight.as_deref_mut(), wallet);
        } else {
            self.stop_charging(flashlight.as_deref_mut());
        }

        if self.charging && self.has_power() {
            if let Some(flashlight) = flashlight.as_deref_mut() {
                if !flashlight.is_full() {
                    flashlight.recharge(self.charge_rate * delta);
                    self.station_battery = (self.station_battery - self.drain_rate * delta).max(0.0);
                }
            }
        }

        if self.auto_recharge && !self.charging && self.station_battery < STATION_MAX_BATTERY {
            self.station_battery =
                (self.station_battery + self.self_recharge_rate * delta).min(STATION_MAX_BATTERY);
        }

        self.indicator = self.resolve_indicator(flashlight.as_deref());
    }

    fn start_charging(&mut self, flashlight: Option<&mut Flashlight>, wallet: Option<&mut Wallet>) {
        if self.charging {
            return;
        }
        let Some(flashlight) = flashlight else {
            return;
        };

        if self.activation_cost > 0 {
            let paid = wallet.is_some_and(|wallet| wallet.deduct(self.activation_cost));
            if !paid {
                return;
            }
        }

        self.charging = true;
        flashlight.set_recharging(true);
        crate::log("ChargingStation: charging started");
    }

    fn stop_charging(&mut self, flashlight: Option<&mut Flashlight>) {
        if !self.charging {
            return;
        }

        self.charging = false;
        if let Some(flashlight) = flashlight {
            flashlight.set_recharging(false);
        }
        crate::log("ChargingStation: charging stopped");
    }

    fn resolve_indicator(&self, flashlight: Option<&Flashlight>) -> StationIndicator {
        if !self.has_power() {
            StationIndicator::Depleted
        } else if flashlight.is_some_and(|f| f.is_full()) {
            StationIndicator::FlashlightFull
        } else if self.charging {
            StationIndicator::Charging
        } else if self.player_nearby {
            StationIndicator::PlayerNearby
        } else {
            StationIndicator::Idle
        }
    }
}
