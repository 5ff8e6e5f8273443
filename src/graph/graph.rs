//! 图数据结构
//!
//! 基于标签键控邻接表的简单无向图（无自环、无重边）

use super::edge::Edge;
use super::vertex::VertexLabel;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};

/// 简单无向图
///
/// 存储为顶点标签到邻居集合的有序映射，而不是按位置索引的
/// 稠密数组，因此标签可以稀疏、不连续。所有操作维持：
/// - 每条边的两个端点都在顶点集中
/// - 邻接关系对称
/// - 没有顶点是自己的邻居
///
/// 所有查询返回独立快照，调用方无法通过返回值破坏内部状态。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// 邻接表：顶点标签 -> 邻居集合
    adjacency: BTreeMap<VertexLabel, BTreeSet<VertexLabel>>,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    // ==================== 顶点操作 ====================

    /// 返回所有顶点标签（升序）
    pub fn vertices(&self) -> Vec<VertexLabel> {
        self.adjacency.keys().copied().collect()
    }

    /// 获取顶点数量
    pub fn number_of_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// 顶点是否存在
    pub fn contains_vertex(&self, label: VertexLabel) -> bool {
        self.adjacency.contains_key(&label)
    }

    /// 添加孤立顶点
    ///
    /// 顶点已存在时不做任何修改并返回 `false`
    pub fn add_vertex(&mut self, label: VertexLabel) -> bool {
        if self.adjacency.contains_key(&label) {
            return false;
        }
        self.adjacency.insert(label, BTreeSet::new());
        true
    }

    /// 删除顶点及其所有关联边
    ///
    /// 顶点不存在时返回 `false`；幸存顶点保持原有标签
    pub fn delete_vertex(&mut self, label: VertexLabel) -> bool {
        let neighbors = match self.adjacency.remove(&label) {
            Some(neighbors) => neighbors,
            None => return false,
        };
        for neighbor in neighbors {
            if let Some(set) = self.adjacency.get_mut(&neighbor) {
                set.remove(&label);
            }
        }
        true
    }

    /// 获取顶点的所有邻居（升序）
    pub fn neighbors(&self, label: VertexLabel) -> Result<Vec<VertexLabel>> {
        match self.adjacency.get(&label) {
            Some(set) => Ok(set.iter().copied().collect()),
            None => Err(Error::UnknownVertex(label)),
        }
    }

    /// 获取顶点的度
    pub fn degree(&self, label: VertexLabel) -> Result<usize> {
        match self.adjacency.get(&label) {
            Some(set) => Ok(set.len()),
            None => Err(Error::UnknownVertex(label)),
        }
    }

    // ==================== 边操作 ====================

    /// 返回所有边（每条边恰好出现一次，按字典序）
    pub fn edges(&self) -> Vec<Edge> {
        let mut result = Vec::new();
        for (&u, neighbors) in &self.adjacency {
            for &v in neighbors {
                if u < v {
                    result.push(Edge::pair(u, v));
                }
            }
        }
        result
    }

    /// 获取边数量
    pub fn number_of_edges(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// 边是否存在（纯查询，端点缺失时返回 `false`）
    pub fn has_edge(&self, u: VertexLabel, v: VertexLabel) -> bool {
        self.adjacency.get(&u).map_or(false, |set| set.contains(&v))
    }

    /// 添加边
    ///
    /// 边已存在时返回 `Ok(false)`。自环请求返回 `InvalidLabel`，
    /// 端点缺失返回 `UnknownVertex`，两种错误都不修改图
    pub fn add_edge(&mut self, u: VertexLabel, v: VertexLabel) -> Result<bool> {
        self.check_endpoints(u, v)?;

        let inserted = match self.adjacency.get_mut(&u) {
            Some(set) => set.insert(v),
            None => return Err(Error::UnknownVertex(u)),
        };
        if !inserted {
            return Ok(false);
        }
        if let Some(set) = self.adjacency.get_mut(&v) {
            set.insert(u);
        }
        Ok(true)
    }

    /// 删除边
    ///
    /// 边不存在时返回 `Ok(false)`；错误情形与 [`Graph::add_edge`] 一致
    pub fn delete_edge(&mut self, u: VertexLabel, v: VertexLabel) -> Result<bool> {
        self.check_endpoints(u, v)?;

        let removed = match self.adjacency.get_mut(&u) {
            Some(set) => set.remove(&v),
            None => return Err(Error::UnknownVertex(u)),
        };
        if !removed {
            return Ok(false);
        }
        if let Some(set) = self.adjacency.get_mut(&v) {
            set.remove(&u);
        }
        Ok(true)
    }

    /// 校验边操作的端点：拒绝自环和未知顶点
    fn check_endpoints(&self, u: VertexLabel, v: VertexLabel) -> Result<()> {
        if u == v {
            return Err(Error::InvalidLabel(format!("自环边 ({}, {}) 不允许", u, v)));
        }
        if !self.adjacency.contains_key(&u) {
            return Err(Error::UnknownVertex(u));
        }
        if !self.adjacency.contains_key(&v) {
            return Err(Error::UnknownVertex(v));
        }
        Ok(())
    }

    // ==================== 编解码 ====================

    /// 编码为紧凑可打印字符串
    pub fn encode(&self) -> Result<String> {
        crate::codec::encode(self)
    }

    /// 从紧凑可打印字符串解码出图
    pub fn decode(text: &str) -> Result<Self> {
        crate::codec::decode(text)
    }
}
