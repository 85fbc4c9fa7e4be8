//! Book categories
//!
//! Categories are not persisted: the table below is compiled in and never
//! changes at runtime.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookCategory {
    pub id: i32,
    pub name: &'static str,
}

pub const CATEGORIES: [BookCategory; 4] = [
    BookCategory { id: 1, name: "Mythology" },
    BookCategory { id: 2, name: "Math" },
    BookCategory { id: 3, name: "Historical" },
    BookCategory { id: 4, name: "Mystery" },
];

impl BookCategory {
    /// Id to name mapping, serialized as a JSON object keyed by id
    pub fn map() -> BTreeMap<i32, &'static str> {
        CATEGORIES.iter().map(|c| (c.id, c.name)).collect()
    }
}
