/// Identifier of stored entities. Assigned by the store.
pub type ID = i64;

pub trait Entity {
    fn id(&self) -> ID;
}
