//! Index Picker Port - 随机下标选择

use rand::Rng;

/// 从 `[0, len)` 中选出一个下标
pub trait IndexPicker: Send + Sync {
    /// `len` 必须大于 0
    fn pick(&self, len: usize) -> usize;
}

/// 均匀随机选择
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl IndexPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}
