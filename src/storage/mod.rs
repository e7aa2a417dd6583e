mod blocking;
mod store;
mod wild;

use serde::{Deserialize, Serialize};

pub use blocking::BlockingStore;
pub use store::WeightStore;
pub use wild::WildStore;

/// How the classification workers share the weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateScheme {
    /// Lock-free, racy updates (Hogwild). See `WildStore`.
    #[default]
    Wild,
    /// Lock-guarded updates. See `BlockingStore`.
    Blocking,
}
