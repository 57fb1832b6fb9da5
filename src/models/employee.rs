use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: i64,            // ⇔ employees.id
    pub first_name: String, // ⇔ employees.first_name
}

impl Employee {
    pub fn new(id: i64, first_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
        }
    }
}
