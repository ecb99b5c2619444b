//! Cache-tag invalidation hook fired after successful writes.

/// List tag per entity family.
pub mod tags {
    pub const LIBRARIES: &str = "libraries";
    pub const BANKS: &str = "banks";
    pub const SUB_BANKS: &str = "sub-banks";
    pub const MATERIALS: &str = "materials";
    pub const MATERIAL_DETAILS: &str = "material-details";
}

/// Invalidate the cached list identified by `tag`.
///
/// Called after every successful create/update/delete and before the
/// call result is returned, so a refresh-after-write caller always
/// observes the invalidation first.
pub trait CacheInvalidator: Send + Sync {
    fn invalidate(&self, tag: &str);
}

/// Default hook for callers without a cache.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopInvalidator;

impl CacheInvalidator for NoopInvalidator {
    fn invalidate(&self, _tag: &str) {}
}
