use serde::{Deserialize, Serialize};

use super::Id;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    id: Id,
    name: String,
    wish: Option<String>,
    // declared for the draw, no operation assigns it yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    recipient: Option<Box<Participant>>,
}

impl Participant {
    pub fn new(id: Id, name: impl Into<String>, wish: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wish,
            recipient: None,
        }
    }

    pub const fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wish(&self) -> Option<&str> {
        self.wish.as_deref()
    }

    pub fn recipient(&self) -> Option<&Participant> {
        self.recipient.as_deref()
    }
}

/// Payload for a participant that has no id yet.
#[derive(Deserialize, Default, Debug, Clone)]
pub struct NewParticipant {
    name: Option<String>,
    wish: Option<String>,
}

impl NewParticipant {
    pub fn new(name: impl Into<String>, wish: Option<&str>) -> Self {
        Self {
            name: Some(name.into()),
            wish: wish.map(String::from),
        }
    }

    /// The name, unless it is missing or empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    pub fn wish(&self) -> Option<&str> {
        self.wish.as_deref()
    }
}
