//! SimpleGraphs - 简单无向图邻接表库
//!
//! 面向嵌入场景的简单无向图数据结构（无自环、无重边），支持：
//! - 稀疏整数标签的邻接表存储，插入/删除/查询保持不变式
//! - 紧凑可打印文本编解码（上三角邻接矩阵按 6 位分组打包）
//! - 星形图等经典拓扑生成器

pub mod codec;
pub mod error;
pub mod generate;
pub mod graph;

// 重导出常用类型
pub use codec::{decode, encode};
pub use error::{Error, Result};
pub use generate::{create_complete, create_cycle, create_path, create_star};
pub use graph::{Edge, Graph, VertexLabel};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
