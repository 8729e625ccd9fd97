//! Enemy systems (ECS адаптеры вокруг EnemyController)

pub mod dazzle;
pub mod motor;
pub mod spawn;
pub mod tick;

// Re-export all systems
pub use dazzle::*;
pub use motor::*;
pub use spawn::*;
pub use tick::*;
