//! 紧凑文本编解码
//!
//! 编码布局：
//! 1. 长度头：顶点数 n <= 62 时为单个符号；否则为转义符号 '~'
//!    加 3 个符号的大端扩展长度域
//! 2. 邻接体：n x n 邻接矩阵的严格上三角按行主序展平为位序列，
//!    6 位一组打包，末组补零
//!
//! 解码恒产出稠密标签 0..n-1 的图；任何格式问题都在构建图之前
//! 报 `MalformedEncoding`，不会产生部分解码的图

use super::bits::{value_from_symbol, BitReader, BitWriter, SYMBOL_BITS};
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexLabel};

/// 单符号长度头能表示的最大顶点数
pub const MAX_SMALL_ORDER: usize = 62;

/// 扩展长度域的符号宽度
pub const EXTENDED_LEN_SYMBOLS: usize = 3;

/// 编码能寻址的最大顶点数（18 位扩展长度域）
pub const MAX_ORDER: usize = (1 << (SYMBOL_BITS * EXTENDED_LEN_SYMBOLS)) - 1;

/// 转义符号 '~' 的 6 位数值
const ESCAPE_VALUE: u8 = 63;

/// 将图编码为紧凑可打印字符串
///
/// 顶点按标签升序映射为稠密位置 0..n-1 后编码；
/// 顶点数超出扩展长度域时返回 `GraphTooLarge`
pub fn encode(graph: &Graph) -> Result<String> {
    let labels = graph.vertices();
    let order = labels.len();
    if order > MAX_ORDER {
        return Err(Error::GraphTooLarge {
            order,
            max: MAX_ORDER,
        });
    }

    let mut writer = BitWriter::new();
    if order <= MAX_SMALL_ORDER {
        writer.push_value(order as u64, SYMBOL_BITS);
    } else {
        writer.push_value(ESCAPE_VALUE as u64, SYMBOL_BITS);
        writer.push_value(order as u64, SYMBOL_BITS * EXTENDED_LEN_SYMBOLS);
    }

    // 严格上三角按行主序：第 i 行对应列 i+1..n-1
    for (i, &u) in labels.iter().enumerate() {
        for &v in &labels[i + 1..] {
            writer.push_bit(graph.has_edge(u, v));
        }
    }

    let text = writer.into_string();
    tracing::debug!(order, symbols = text.len(), "图编码完成");
    Ok(text)
}

/// 从紧凑可打印字符串解码出图
pub fn decode(text: &str) -> Result<Graph> {
    let values = text
        .bytes()
        .map(value_from_symbol)
        .collect::<Result<Vec<u8>>>()?;

    let (order, header_len) = parse_header(&values)?;

    let body = &values[header_len..];
    let expected_bits = order * order.saturating_sub(1) / 2;
    let expected_symbols = (expected_bits + SYMBOL_BITS - 1) / SYMBOL_BITS;
    if body.len() != expected_symbols {
        return Err(Error::MalformedEncoding(format!(
            "长度头声明 {} 个顶点，邻接体应有 {} 个符号，实际 {} 个",
            order,
            expected_symbols,
            body.len()
        )));
    }

    let mut graph = Graph::new();
    for position in 0..order {
        graph.add_vertex(VertexLabel::new(position as u32));
    }

    let mut reader = BitReader::new(body);
    let mut edge_count = 0usize;
    for i in 0..order {
        for j in (i + 1)..order {
            let present = reader
                .read_bit()
                .ok_or_else(|| Error::MalformedEncoding("邻接体位数不足".to_string()))?;
            if present {
                graph.add_edge(VertexLabel::new(i as u32), VertexLabel::new(j as u32))?;
                edge_count += 1;
            }
        }
    }

    tracing::debug!(order, edges = edge_count, "图解码完成");
    Ok(graph)
}

/// 解析长度头，返回顶点数和头部符号数
fn parse_header(values: &[u8]) -> Result<(usize, usize)> {
    let first = match values.first() {
        Some(&value) => value,
        None => return Err(Error::MalformedEncoding("输入为空".to_string())),
    };

    if first != ESCAPE_VALUE {
        return Ok((first as usize, 1));
    }

    if values.len() < 1 + EXTENDED_LEN_SYMBOLS {
        return Err(Error::MalformedEncoding(format!(
            "扩展长度域不完整: 需要 {} 个符号，实际 {} 个",
            EXTENDED_LEN_SYMBOLS,
            values.len() - 1
        )));
    }
    let mut order = 0usize;
    for &value in &values[1..=EXTENDED_LEN_SYMBOLS] {
        order = (order << SYMBOL_BITS) | value as usize;
    }
    Ok((order, 1 + EXTENDED_LEN_SYMBOLS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{create_complete, create_star};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn label(value: u32) -> VertexLabel {
        VertexLabel::new(value)
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(Graph::new().encode().unwrap(), "?");
    }

    #[test]
    fn test_encode_single_vertex() {
        let mut graph = Graph::new();
        graph.add_vertex(label(0));
        assert_eq!(graph.encode().unwrap(), "@");
    }

    #[test]
    fn test_encode_triangle() {
        let graph = create_complete(3).unwrap();
        // 头 'B' = 3 + 63，体 111 补零为 111000 -> 'w'
        assert_eq!(graph.encode().unwrap(), "Bw");
    }

    #[test]
    fn test_encode_star() {
        let graph = create_star(5).unwrap();
        // 行主序：中心行 11111，其余 10 位全零，共 15 位 -> 3 个符号
        assert_eq!(graph.encode().unwrap(), "E}??");
    }

    #[test]
    fn test_encode_relabels_sparse_vertices_densely() {
        let mut graph = Graph::new();
        graph.add_vertex(label(0));
        graph.add_vertex(label(5));
        graph.add_vertex(label(9));
        graph.add_edge(label(0), label(9)).unwrap();

        // 标签 [0, 5, 9] 映射为位置 [0, 1, 2]，边 (0, 9) 落在位置对 (0, 2)
        assert_eq!(graph.encode().unwrap(), "BO");

        let decoded = Graph::decode("BO").unwrap();
        assert_eq!(decoded.vertices(), vec![label(0), label(1), label(2)]);
        assert!(decoded.has_edge(label(0), label(2)));
        assert_eq!(decoded.number_of_edges(), 1);
    }

    #[test]
    fn test_round_trip_dense_graphs() {
        for graph in [
            Graph::new(),
            create_star(0).unwrap(),
            create_star(5).unwrap(),
            create_complete(8).unwrap(),
        ] {
            let text = graph.encode().unwrap();
            assert_eq!(Graph::decode(&text).unwrap(), graph);
        }
    }

    #[test]
    fn test_extended_header_boundary() {
        // n = 62 仍是单符号头
        let small = create_complete(62).unwrap();
        let text = small.encode().unwrap();
        assert_eq!(text.as_bytes()[0], b'}');
        assert_eq!(Graph::decode(&text).unwrap(), small);

        // n = 63 切换到转义 + 3 符号扩展头
        let mut large = Graph::new();
        for i in 0..63 {
            large.add_vertex(label(i));
        }
        let text = large.encode().unwrap();
        assert!(text.starts_with("~??~"));
        // 体 63*62/2 = 1953 位 -> 326 个符号
        assert_eq!(text.len(), 4 + 326);
        assert_eq!(Graph::decode(&text).unwrap(), large);
    }

    #[test]
    fn test_round_trip_random_graphs() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for order in [2u32, 7, 20, 45, 70] {
            let mut graph = Graph::new();
            for i in 0..order {
                graph.add_vertex(label(i));
            }
            for u in 0..order {
                for v in (u + 1)..order {
                    if rng.gen_bool(0.3) {
                        graph.add_edge(label(u), label(v)).unwrap();
                    }
                }
            }

            let text = graph.encode().unwrap();
            assert!(text.bytes().all(|b| (b'?'..=b'~').contains(&b)));
            assert_eq!(Graph::decode(&text).unwrap(), graph);
        }
    }

    #[test]
    fn test_decode_accepts_non_minimal_extended_header() {
        // 小顶点数写在扩展头里也能解码
        assert_eq!(
            Graph::decode("~??Bw").unwrap(),
            create_complete(3).unwrap()
        );
    }

    #[test]
    fn test_decode_empty_input() {
        assert!(matches!(
            Graph::decode(""),
            Err(Error::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_decode_rejects_symbol_out_of_range() {
        assert!(matches!(
            Graph::decode("B!"),
            Err(Error::MalformedEncoding(_))
        ));
        assert!(matches!(
            Graph::decode("\u{7f}"),
            Err(Error::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_decode_rejects_body_length_mismatch() {
        // 体缺失
        assert!(matches!(
            Graph::decode("B"),
            Err(Error::MalformedEncoding(_))
        ));
        // 体不完整
        assert!(matches!(
            Graph::decode("E}?"),
            Err(Error::MalformedEncoding(_))
        ));
        // 体过长
        assert!(matches!(
            Graph::decode("Bww"),
            Err(Error::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_decode_rejects_truncated_extended_header() {
        assert!(matches!(
            Graph::decode("~??"),
            Err(Error::MalformedEncoding(_))
        ));
    }
}
