//! 顶点标签定义
//!
//! 顶点标签是调用方指定的非负整数，不要求连续；
//! 删除其他顶点时标签保持稳定，不会重新编号

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点标签（调用方指定的非负整数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexLabel(pub u32);

impl VertexLabel {
    pub fn new(label: u32) -> Self {
        Self(label)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl From<u32> for VertexLabel {
    fn from(label: u32) -> Self {
        Self(label)
    }
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
