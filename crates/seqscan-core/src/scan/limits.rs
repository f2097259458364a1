use serde::{Deserialize, Serialize};

///
/// ScanLimits
///
/// Service-level pagination limits, owned by the embedding service's
/// configuration layer. `default_page_size` is exposed for transport layers
/// that fill in an absent page size before building a request; the engine
/// itself requires an explicit `first` or `last`.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanLimits {
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub max_scan_limit: u64,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 50,
            max_scan_limit: 100_000_000,
        }
    }
}

///
/// TESTS
///
