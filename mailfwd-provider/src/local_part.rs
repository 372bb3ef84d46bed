//! 随机 local part 生成
//!
//! 随机源作为可注入的依赖，默认实现每次调用都从线程本地 RNG 取值，
//! 测试中使用固定种子得到可复现的结果。

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// local part 字符集：小写字母 + 数字
pub const LOCAL_PART_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// 随机 local part 长度
pub const LOCAL_PART_LEN: usize = 4;

/// 随机 local part 来源
pub trait LocalPartSource: Send + Sync {
    /// 生成一个长度为 [`LOCAL_PART_LEN`] 的 local part
    fn generate(&self) -> String;
}

fn draw<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..LOCAL_PART_LEN)
        .map(|_| char::from(LOCAL_PART_ALPHABET[rng.random_range(0..LOCAL_PART_ALPHABET.len())]))
        .collect()
}

/// 默认来源：线程本地 RNG（自动由系统熵播种）
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngLocalPart;

impl LocalPartSource for ThreadRngLocalPart {
    fn generate(&self) -> String {
        draw(&mut rand::rng())
    }
}

/// 固定种子来源，结果可复现
#[derive(Debug)]
pub struct SeededLocalPart {
    rng: Mutex<StdRng>,
}

impl SeededLocalPart {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl LocalPartSource for SeededLocalPart {
    fn generate(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        draw(&mut *rng)
    }
}
