use serde::{Deserialize, Serialize};

use crate::participant::model::Participant;

use super::Id;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    id: Id,
    name: String,
    description: Option<String>,
    participants: Vec<Participant>,
}

impl Group {
    pub fn new(id: Id, name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description,
            participants: Vec::new(),
        }
    }

    pub const fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Applies a partial update.
    ///
    /// A missing or empty name leaves the current one in place, while a
    /// missing description resets it to an empty string. A participant in the
    /// patch is appended to the list.
    pub fn merge(&mut self, patch: GroupPatch) -> &Self {
        if let Some(name) = patch.name.filter(|n| !n.is_empty()) {
            self.name = name;
        }

        self.description = Some(patch.description.unwrap_or_default());

        if let Some(p) = patch.participants {
            self.participants.push(p);
        }

        self
    }

    /// Appends a snapshot of the participant, going through [`Group::merge`].
    pub fn attach(&mut self, participant: Participant) -> &Self {
        self.merge(GroupPatch {
            participants: Some(participant),
            ..Default::default()
        })
    }
}

/// Payload for a group that has no id yet.
#[derive(Deserialize, Default, Debug, Clone)]
pub struct NewGroup {
    name: Option<String>,
    description: Option<String>,
}

impl NewGroup {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: Some(name.into()),
            description: description.map(String::from),
        }
    }

    /// The name, unless it is missing or empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

// `participants` holds a single participant, not a list
#[derive(Deserialize, Default, Debug, Clone)]
pub struct GroupPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub participants: Option<Participant>,
}
