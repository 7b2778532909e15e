//! Simulation module
//!
//! All animation logic lives here and stays platform-free:
//! - Fixed-capacity pools, no per-frame allocation
//! - Linear motion only
//! - Seeded RNG (randomized, but reproducible in tests)
//! - Drawing only through the `DrawSurface` trait

pub mod bullet;
pub mod collision;
pub mod fragment;
pub mod input;
pub mod mode;
pub mod palette;
pub mod pool;
pub mod state;
pub mod tick;
pub mod word;

pub use bullet::Bullet;
pub use collision::Circle;
pub use fragment::Fragment;
pub use input::InputHandler;
pub use mode::{CapabilityMode, DeviceSignals};
pub use palette::{PROGRAMMING_TOKENS, WordCategory};
pub use pool::{Pool, Poolable};
pub use state::SimState;
pub use tick::{resolve_collisions, tick};
pub use word::Word;
