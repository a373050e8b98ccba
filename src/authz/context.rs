use uuid::Uuid;

/// Resource context for ownership-aware permission checks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceContext {
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    /// Author or organizer of the resource
    pub owner_id: Option<Uuid>,
}

impl ResourceContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, resource_type: &str, resource_id: &str) -> Self {
        self.resource_type = Some(resource_type.to_string());
        self.resource_id = Some(resource_id.to_string());
        self
    }

    pub fn owned_by(mut self, owner_id: Uuid) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == Some(user_id)
    }
}
