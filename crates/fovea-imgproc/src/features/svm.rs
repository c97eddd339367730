/// Index value marking the end of a node list.
pub const SVM_END_INDEX: i32 = -1;

/// One entry of the sparse feature list handed to the downstream classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvmNode {
    /// One-based feature index; [`SVM_END_INDEX`] terminates the list.
    pub index: i32,
    /// Feature value.
    pub value: f64,
}

/// Concatenate descriptor vectors into a classifier node list.
///
/// Indices are one-based and contiguous across all vectors, and the list is
/// terminated by a sentinel node with index [`SVM_END_INDEX`] and value 0, as
/// the classifier convention expects.
///
/// # Example
///
/// ```
/// use fovea_imgproc::features::{to_svm_nodes, SVM_END_INDEX};
///
/// let nodes = to_svm_nodes(&[&[0.5, 1.0], &[0.25]]);
///
/// assert_eq!(nodes.len(), 4);
/// assert_eq!(nodes[2].index, 3);
/// assert_eq!(nodes[3].index, SVM_END_INDEX);
/// ```
pub fn to_svm_nodes(vectors: &[&[f64]]) -> Vec<SvmNode> {
    let len = vectors.iter().map(|v| v.len()).sum::<usize>();

    let mut nodes = Vec::with_capacity(len + 1);
    for &vector in vectors {
        for &value in vector {
            nodes.push(SvmNode {
                index: nodes.len() as i32 + 1,
                value,
            });
        }
    }
    nodes.push(SvmNode {
        index: SVM_END_INDEX,
        value: 0.0,
    });

    nodes
}

/// Render a node list as one line of the standard svm text format.
///
/// The line is `label index:value index:value ...`; the sentinel node is not
/// part of the text representation.
pub fn format_svm_line(label: i32, nodes: &[SvmNode]) -> String {
    let mut line = label.to_string();
    for node in nodes {
        if node.index == SVM_END_INDEX {
            break;
        }
        line.push_str(&format!(" {}:{}", node.index, node.value));
    }
    line
}
