use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::node::Node;
use std::io::Write;

impl Node {
    /// Writes the graph reachable from this node as a Graphviz `digraph`.
    ///
    /// One vertex per node (label or op name, value and gradient) and one
    /// edge per operand → consumer link. Render with `dot -Tpng`.
    pub fn write_dot(&self, writer: &mut impl Write) -> Result<(), ScalarGradError> {
        let nodes = topological_sort(self)?;
        writeln!(writer, "digraph G {{\nrankdir=\"LR\";")?;
        for node in &nodes {
            writeln!(
                writer,
                "a{} [label=\"{} \\ndata:{}, grad:{}\"];",
                node.id(),
                node.display_name().replace('"', "\\\""),
                node.value(),
                node.grad()
            )?;
        }
        for node in &nodes {
            for operand in node.operands() {
                writeln!(writer, "a{} -> a{};", operand.id(), node.id())?;
            }
        }
        writeln!(writer, "}}")?;
        Ok(())
    }
}
