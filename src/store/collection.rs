use dioxus_logger::tracing;
use entity::Record;

/// An ordered, id-addressed collection of one record type.
///
/// New records are placed at the front so the most recent entries display first.
/// Lookups are linear; the dataset is a small in-memory mock.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T: Record> {
    items: Vec<T>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Record> Collection<T> {
    /// Prepends a record to the collection.
    ///
    /// Records without an id cannot be addressed later and are dropped; supplying one is
    /// the caller's responsibility.
    ///
    /// # Returns
    /// - `true` - Record inserted
    /// - `false` - Record had an empty id and was not inserted
    pub fn insert(&mut self, record: T) -> bool {
        if record.id().trim().is_empty() {
            tracing::warn!(kind = ?T::KIND, "Dropping record inserted without an id");
            return false;
        }

        tracing::debug!(kind = ?T::KIND, id = %record.id(), "Inserting record");
        self.items.insert(0, record);

        true
    }

    /// Applies `patch` to the record with the given id.
    ///
    /// # Returns
    /// - `true` - Record found and patched
    /// - `false` - No record with that id; nothing changed
    pub fn update_by_id<F>(&mut self, id: &str, patch: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        match self.items.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                patch(record);
                tracing::debug!(kind = ?T::KIND, id = %id, "Updated record");
                true
            }
            None => {
                tracing::debug!(kind = ?T::KIND, id = %id, "Update skipped, record not found");
                false
            }
        }
    }

    /// Removes the record with the given id, returning it if it was present.
    pub fn remove_by_id(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|record| record.id() == id)?;

        tracing::debug!(kind = ?T::KIND, id = %id, "Removing record");
        Some(self.items.remove(index))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// All records matching `predicate`, in collection order.
    pub fn filter<P>(&self, predicate: P) -> Vec<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().filter(|record| predicate(record)).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
