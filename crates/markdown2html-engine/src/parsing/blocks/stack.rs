use super::types::BlockTag;

/// The stack of currently open block tags (last = innermost).
#[derive(Debug, Default, Clone)]
pub struct TagStack(Vec<BlockTag>);

impl TagStack {
    pub fn top(&self) -> Option<BlockTag> {
        self.0.last().copied()
    }

    pub fn is_top(&self, tag: BlockTag) -> bool {
        self.top() == Some(tag)
    }

    /// True if `tag` is open anywhere on the stack, not just on top.
    pub fn contains(&self, tag: BlockTag) -> bool {
        self.0.contains(&tag)
    }

    pub fn push(&mut self, tag: BlockTag) {
        self.0.push(tag);
    }

    pub fn pop(&mut self) -> Option<BlockTag> {
        self.0.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_top() {
        let mut stack = TagStack::default();
        assert_eq!(stack.top(), None);

        stack.push(BlockTag::UnorderedList);
        stack.push(BlockTag::Paragraph);
        assert!(stack.is_top(BlockTag::Paragraph));
        assert!(!stack.is_top(BlockTag::UnorderedList));
        assert!(stack.contains(BlockTag::UnorderedList));
        assert!(!stack.contains(BlockTag::OrderedList));

        assert_eq!(stack.pop(), Some(BlockTag::Paragraph));
        assert_eq!(stack.top(), Some(BlockTag::UnorderedList));
        assert_eq!(stack.pop(), Some(BlockTag::UnorderedList));
        assert_eq!(stack.pop(), None);
    }
}
