//! Platform plumbing shared by components: token storage and timers.

pub mod storage;
pub mod timing;
