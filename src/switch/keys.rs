//! Well-known switch names.
//!
//! The store itself is agnostic to these; they are the names callers agree
//! on when publishing and reading the switch blob.

/// Config item id the switch blob is published under.
pub const SWITCH_META_DATA_ID: &str = "com.alibaba.nacos.meta.switch";

/// Boolean: use fixed-interval polling instead of adaptive long polling.
pub const FIXED_POLLING: &str = "isFixedPolling";

/// Integer: polling interval when fixed polling is on.
// The misspelling is the published key name.
pub const FIXED_POLLING_INTERVAL: &str = "fixedPollingInertval";

/// Integer: fixed delay time.
pub const FIXED_DELAY_TIME: &str = "fixedDelayTime";

/// Boolean: disable the application-level collector.
pub const DISABLE_APP_COLLECTOR: &str = "disableAppCollector";
