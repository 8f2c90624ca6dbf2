use std::fmt::Write;

use crate::Node;

pub struct TreeDisplay;

impl TreeDisplay {
    /// Draw the subtree rooted at `node`, one line per node, using
    /// `label` to format each node's payload.
    pub fn format<F>(node: &Node, f: &mut std::fmt::Formatter<'_>, label: F) -> std::fmt::Result
    where
        F: Fn(&Node, &mut std::fmt::Formatter<'_>) -> std::fmt::Result,
    {
        label(node, f)?;
        f.write_char('\n')?;

        Self::format_children(node, f, &mut String::new(), &label)
    }

    fn format_children<F>(
        node: &Node,
        f: &mut std::fmt::Formatter<'_>,
        prefix: &mut String,
        label: &F,
    ) -> std::fmt::Result
    where
        F: Fn(&Node, &mut std::fmt::Formatter<'_>) -> std::fmt::Result,
    {
        let num_children = node.num_children();

        for (index, child) in node.children().iter().enumerate() {
            let last = index + 1 == num_children;

            f.write_str(prefix)?;
            f.write_str(if last { "┗━ " } else { "┣━ " })?;
            label(child, f)?;
            f.write_char('\n')?;

            // Continue the vertical rule below this child while siblings remain
            let len = prefix.len();
            prefix.push_str(if last { "   " } else { "┃  " });
            Self::format_children(child, f, prefix, label)?;
            prefix.truncate(len);
        }

        Ok(())
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        TreeDisplay::format(self, f, |node, f| write!(f, "Value: {}", node.value()))
    }
}
