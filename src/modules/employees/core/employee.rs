use serde::{Deserialize, Serialize};

/// Directory record owned by the workforce-management API. Read only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, async_graphql::SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Employee {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn display_name(&self) -> String {
        if self.email.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.email)
        }
    }
}

#[async_graphql::ComplexObject]
impl Employee {
    #[graphql(name = "displayName")]
    async fn display_name_field(&self) -> String {
        self.display_name()
    }
}
