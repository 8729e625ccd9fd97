//! Wallet + Coin.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Монеты игрока
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Wallet {
    pub coins: u32,
}

impl Wallet {
    pub fn add(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
        crate::log(&format!("Wallet: +{} (total {})", amount, self.coins));
    }

    /// Списать amount. false: не хватает, кошелёк не меняется.
    pub fn deduct(&mut self, amount: u32) -> bool {
        if self.coins < amount {
            crate::log(&format!(
                "Wallet: not enough coins (required {}, available {})",
                amount, self.coins
            ));
            return false;
        }

        self.coins -= amount;
        crate::log(&format!("Wallet: -{} (remaining {})", amount, self.coins));
        true
    }
}

/// Монета на уровне (подбирается один раз)
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
#[serde(default)]
pub struct Coin {
    pub value: u32,
    pub pickup_radius: f32,
    #[serde(skip)]
    pub collected: bool,
}

impl Default for Coin {
    fn default() -> Self {
        Self {
            value: 1,
            pickup_radius: 0.75,
            collected: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_add_and_deduct() {
        let mut wallet = Wallet::default();
        wallet.add(3);
        assert!(wallet.deduct(2));
        assert_eq!(wallet.coins, 1);
    }

    #[test]
    fn test_wallet_deduct_insufficient_is_noop() {
        let mut wallet = Wallet { coins: 1 };
        assert!(!wallet.deduct(2));
        assert_eq!(wallet.coins, 1);
    }
}
