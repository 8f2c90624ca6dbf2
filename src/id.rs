use crate::NodeId;

pub trait UniqueGenerator: std::fmt::Debug {
    /// Generate a unique node identity token
    fn generate(&mut self) -> NodeId;
}

impl<G> UniqueGenerator for &mut G
where
    G: UniqueGenerator + ?Sized,
{
    fn generate(&mut self) -> NodeId {
        (**self).generate()
    }
}

/// Issues `<prefix><n>` tokens with `n` counting up from zero.
#[derive(Debug)]
pub struct SequentialGenerator {
    prefix: String,
    next_id: u64,
}

impl SequentialGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next_id: 0,
        }
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new("node-")
    }
}

impl UniqueGenerator for SequentialGenerator {
    fn generate(&mut self) -> NodeId {
        let id = format!("{}{}", self.prefix, self.next_id);
        self.next_id += 1;
        id
    }
}

#[derive(Default, Debug)]
pub struct UuidGenerator;

impl UniqueGenerator for UuidGenerator {
    fn generate(&mut self) -> NodeId {
        uuid::Uuid::new_v4().to_string()
    }
}
