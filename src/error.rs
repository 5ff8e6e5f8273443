//! 错误类型定义

use crate::graph::VertexLabel;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("非法顶点标签: {0}")]
    InvalidLabel(String),

    #[error("顶点不存在: {0}")]
    UnknownVertex(VertexLabel),

    #[error("编码格式错误: {0}")]
    MalformedEncoding(String),

    #[error("图规模超出编码上限: {order} 个顶点, 上限 {max}")]
    GraphTooLarge { order: usize, max: usize },
}
