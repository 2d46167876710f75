//! Slot primitives: named extension points on components.
//!
//! A slot pairs caller-supplied content with the position it renders at.
//! Widgets declare slots as typed fields and expose `with_*`/`add_*`
//! setters over them, so cardinality and content type are checked at
//! compile time rather than generated at runtime.

/// A single-value slot. Holds at most one child.
///
/// Reassignment is last-write-wins: setting an already-set slot replaces
/// the previous value. This is the uniform policy across all widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<T> {
    value: Option<T>,
}

impl<T> Slot<T> {
    /// An unset slot.
    pub fn new() -> Self {
        Self { value: None }
    }

    /// Set the slot content. Last write wins.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// The content, if set.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Mutable access to the content, if set.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Remove and return the content.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Whether the slot has been set.
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A repeated slot: an ordered sequence of children.
///
/// Insertion order is rendering order. The full sequence is materialized
/// before any layout decision that depends on cardinality (last-item
/// handling, position classes), never streamed lazily.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotList<T> {
    items: Vec<T>,
}

impl<T> SlotList<T> {
    /// An empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a child.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Iterate children in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate children mutably, in insertion order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no children have been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for SlotList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a SlotList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_slot_starts_unset() {
        let slot: Slot<String> = Slot::new();
        assert!(!slot.is_set());
        assert_eq!(slot.get(), None);
    }

    #[test]
    fn single_slot_last_write_wins() {
        let mut slot = Slot::new();
        slot.set("first");
        slot.set("second");
        assert_eq!(slot.get(), Some(&"second"));
    }

    #[test]
    fn take_empties_the_slot() {
        let mut slot = Slot::new();
        slot.set(1);
        assert_eq!(slot.take(), Some(1));
        assert!(!slot.is_set());
    }

    #[test]
    fn repeated_slot_preserves_insertion_order() {
        let mut list = SlotList::new();
        list.push("a");
        list.push("c");
        list.push("b");
        let items: Vec<&str> = list.iter().copied().collect();
        assert_eq!(items, ["a", "c", "b"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn repeated_slot_mutation_keeps_order() {
        let mut list = SlotList::new();
        list.push(String::from("x"));
        list.push(String::from("y"));
        for item in list.iter_mut() {
            item.push('!');
        }
        let items: Vec<&str> = list.iter().map(String::as_str).collect();
        assert_eq!(items, ["x!", "y!"]);
    }
}
