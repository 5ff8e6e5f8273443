//! 编解码模块
//!
//! 图与紧凑可打印字符串之间的双向转换，包含：
//! - 位游标（6 位分组、MSB 优先打包）
//! - 长度头与邻接体布局
//! - 编码/解码入口

mod bits;
mod text;

pub use bits::{BitReader, BitWriter, SYMBOL_BITS, SYMBOL_OFFSET};
pub use text::{decode, encode, EXTENDED_LEN_SYMBOLS, MAX_ORDER, MAX_SMALL_ORDER};
