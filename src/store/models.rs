#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemStatus {
    #[default]
    Unmarked,
    Marked,
}

impl ItemStatus {
    pub fn toggled(self) -> Self {
        match self {
            ItemStatus::Unmarked => ItemStatus::Marked,
            ItemStatus::Marked => ItemStatus::Unmarked,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    pub description: String,
    pub status: ItemStatus,
}

impl Item {
    /// A fresh unmarked item with an empty description.
    pub fn new(title: impl Into<String>) -> Self {
        Item {
            title: title.into(),
            description: String::new(),
            status: ItemStatus::Unmarked,
        }
    }

    pub fn is_marked(&self) -> bool {
        self.status == ItemStatus::Marked
    }

    /// Copy of this item with the status flipped.
    pub fn toggled(&self) -> Self {
        Item {
            status: self.status.toggled(),
            ..self.clone()
        }
    }

    /// Copy of this item with a new title; description and status are kept.
    pub fn retitled(&self, title: impl Into<String>) -> Self {
        Item {
            title: title.into(),
            ..self.clone()
        }
    }
}

/// Anything the list widget can display.
pub trait ListEntry {
    fn title(&self) -> &str;
    fn description(&self) -> &str;

    fn is_marked(&self) -> bool {
        false
    }
}

impl ListEntry for Item {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn is_marked(&self) -> bool {
        Item::is_marked(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_is_unmarked_with_empty_description() {
        let item = Item::new("Buy milk");
        assert_eq!(item.title, "Buy milk");
        assert!(item.description.is_empty());
        assert_eq!(item.status, ItemStatus::Unmarked);
    }

    #[test]
    fn toggling_twice_restores_status() {
        let item = Item::new("Buy milk");
        let once = item.toggled();
        assert!(once.is_marked());
        assert_eq!(once.toggled(), item);
    }

    #[test]
    fn retitled_keeps_description_and_status() {
        let item = Item {
            title: "Buy milk".into(),
            description: "from the corner shop".into(),
            status: ItemStatus::Marked,
        };
        let edited = item.retitled("Buy bread");
        assert_eq!(edited.title, "Buy bread");
        assert_eq!(edited.description, "from the corner shop");
        assert_eq!(edited.status, ItemStatus::Marked);
    }

    #[test]
    fn list_entry_accessors() {
        let item = Item::new("Call dentist").toggled();
        let entry: &dyn ListEntry = &item;
        assert_eq!(entry.title(), "Call dentist");
        assert_eq!(entry.description(), "");
        assert!(entry.is_marked());
    }
}
