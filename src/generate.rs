//! 图生成器
//!
//! 经典拓扑的纯构造器。全部通过公开的 add_vertex/add_edge
//! 接口构建，从不直接操作内部存储，因此自动维持图的全部不变式

use crate::error::Result;
use crate::graph::{Graph, VertexLabel};

/// 创建星形图 K_{1,n}
///
/// 顶点 0..=n，中心为 0，叶子为 1..=n，叶子之间互不相邻；
/// n == 0 时只有一个孤立中心顶点
pub fn create_star(leaves: u32) -> Result<Graph> {
    let mut graph = Graph::new();
    let hub = VertexLabel::new(0);
    graph.add_vertex(hub);
    for leaf in 1..=leaves {
        let leaf = VertexLabel::new(leaf);
        graph.add_vertex(leaf);
        graph.add_edge(hub, leaf)?;
    }
    Ok(graph)
}

/// 创建完全图 K_n（顶点 0..n，两两相邻）
pub fn create_complete(order: u32) -> Result<Graph> {
    let mut graph = Graph::new();
    for label in 0..order {
        graph.add_vertex(VertexLabel::new(label));
    }
    for u in 0..order {
        for v in (u + 1)..order {
            graph.add_edge(VertexLabel::new(u), VertexLabel::new(v))?;
        }
    }
    Ok(graph)
}

/// 创建路径图 P_n（顶点 0..n，相邻标签依次相连）
pub fn create_path(order: u32) -> Result<Graph> {
    let mut graph = Graph::new();
    for label in 0..order {
        graph.add_vertex(VertexLabel::new(label));
        if label > 0 {
            graph.add_edge(VertexLabel::new(label - 1), VertexLabel::new(label))?;
        }
    }
    Ok(graph)
}

/// 创建环图 C_n
///
/// 路径图加上首尾闭合边；n < 3 时没有合法的闭合边，退化为路径图
pub fn create_cycle(order: u32) -> Result<Graph> {
    let mut graph = create_path(order)?;
    if order >= 3 {
        graph.add_edge(VertexLabel::new(0), VertexLabel::new(order - 1))?;
    }
    Ok(graph)
}
