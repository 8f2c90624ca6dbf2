use crate::{Node, NodeBuilder, NodeValue, SequentialGenerator, TreeBuilder};

/// A tree literal: a value and its children
pub struct TestNode(pub NodeValue, pub Vec<Self>);

/// Construct a tree from nested [`TestNode`] literals. Ids are issued in
/// pre-order as `node-0`, `node-1`, ...
pub fn test_tree(data: TestNode) -> Node {
    fn add_children(
        builder: &mut NodeBuilder<'_, (), SequentialGenerator>,
        children: &[TestNode],
    ) -> Result<(), ()> {
        for child in children {
            builder.child(child.0, |nb| add_children(nb, &child.1))?;
        }
        Ok(())
    }

    TreeBuilder::<(), SequentialGenerator>::new()
        .root(data.0, |root| add_children(root, &data.1))
        .unwrap()
        .done()
        .unwrap()
        .unwrap()
}

/// A path of `len` nodes, each with a single child
pub fn test_chain(len: usize) -> Node {
    assert!(len > 0);
    let mut node = TestNode(len as NodeValue - 1, vec![]);
    for value in (0..len - 1).rev() {
        node = TestNode(value as NodeValue, vec![node]);
    }
    test_tree(node)
}

/// Root 5 with two leaf children 3 and 7
pub fn test_pair() -> Node {
    test_tree(TestNode(5, vec![TestNode(3, vec![]), TestNode(7, vec![])]))
}

/// A tree with subtrees of height 1 and 2 of varying widths:
///
/// ```text
/// 0
/// ┣━ 1           height 2, width 3
/// ┃  ┣━ 2        height 1, width 2
/// ┃  ┃  ┣━ 3
/// ┃  ┃  ┗━ 4
/// ┃  ┗━ 5        height 1, width 1
/// ┃     ┗━ 6
/// ┣━ 7           height 1, width 3
/// ┃  ┣━ 8
/// ┃  ┣━ 9
/// ┃  ┗━ 10
/// ┗━ 11          height 1, width 1
///    ┗━ 12
/// ```
pub fn test_mixed() -> Node {
    test_tree(TestNode(
        0,
        vec![
            TestNode(
                1,
                vec![
                    TestNode(2, vec![TestNode(3, vec![]), TestNode(4, vec![])]),
                    TestNode(5, vec![TestNode(6, vec![])]),
                ],
            ),
            TestNode(
                7,
                vec![TestNode(8, vec![]), TestNode(9, vec![]), TestNode(10, vec![])],
            ),
            TestNode(11, vec![TestNode(12, vec![])]),
        ],
    ))
}
