//! 边定义
//!
//! 边是两个互异顶点标签的无序对，存储时规范化为较小标签在前

use crate::error::{Error, Result};
use crate::graph::vertex::VertexLabel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边（规范化的无序顶点对，较小标签在前）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    u: VertexLabel,
    v: VertexLabel,
}

impl Edge {
    /// 创建边，自动规范化端点顺序
    ///
    /// 自环请求（`u == v`）返回 `InvalidLabel`
    pub fn new(u: VertexLabel, v: VertexLabel) -> Result<Self> {
        if u == v {
            return Err(Error::InvalidLabel(format!("自环边 ({}, {}) 不允许", u, v)));
        }
        Ok(Self::pair(u, v))
    }

    /// 端点已知互异时的内部构造
    pub(crate) fn pair(u: VertexLabel, v: VertexLabel) -> Self {
        debug_assert_ne!(u, v);
        if u < v {
            Self { u, v }
        } else {
            Self { u: v, v: u }
        }
    }

    /// 较小的端点标签
    pub fn u(&self) -> VertexLabel {
        self.u
    }

    /// 较大的端点标签
    pub fn v(&self) -> VertexLabel {
        self.v
    }

    /// 两个端点（较小标签在前）
    pub fn endpoints(&self) -> (VertexLabel, VertexLabel) {
        (self.u, self.v)
    }

    /// 是否与给定顶点相连
    pub fn is_incident(&self, label: VertexLabel) -> bool {
        self.u == label || self.v == label
    }

    /// 给定一个端点，返回另一个端点
    pub fn other(&self, label: VertexLabel) -> Option<VertexLabel> {
        if label == self.u {
            Some(self.v)
        } else if label == self.v {
            Some(self.u)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.u, self.v)
    }
}
