/// Which child link of a `Node` a walk continues down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// Items ordering before the node's item.
    Left,
    /// Items ordering equal to or after the node's item.
    Right,
}
