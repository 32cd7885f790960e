//! Output tree for parsed PSS source.
//!
//! These types are built top-down by the grammar recognizer and handed back
//! whole; nothing mutates them after construction. Their JSON shape is a
//! compatibility contract: every node carries a constant `"type"` tag, a
//! component's `actions` serialize as an object keyed by action name in
//! declaration order, and an absent activity serializes as `null`.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// The single top-level container of named actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    actions: Vec<Action>,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actions: Vec::new(),
        }
    }

    /// Actions in declaration order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn get_action(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.name == name)
    }

    pub fn contains_action(&self, name: &str) -> bool {
        self.actions.iter().any(|a| a.name == name)
    }

    /// Appends an action. Name uniqueness is the parser's responsibility;
    /// callers must check `contains_action` first.
    pub fn push_action(&mut self, action: Action) {
        self.actions.push(action);
    }
}

/// A named unit optionally containing one activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub name: String,
    pub activity: Option<Activity>,
}

/// An ordered sequence of do-statements belonging to one action.
///
/// Order is an execution sequence and is preserved exactly as written,
/// including repeated entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub sequence: Vec<DoStatement>,
}

/// A reference by name to another action. No existence check is performed;
/// forward and undefined references are accepted syntactically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoStatement {
    pub action: String,
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Component", 3)?;
        state.serialize_field("type", "component")?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("actions", &ActionsByName(&self.actions))?;
        state.end()
    }
}

/// Serializes the action list as a name-keyed object in declaration order.
struct ActionsByName<'a>(&'a [Action]);

impl Serialize for ActionsByName<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for action in self.0 {
            map.serialize_entry(&action.name, action)?;
        }
        map.end()
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Action", 3)?;
        state.serialize_field("type", "action")?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("activity", &self.activity)?;
        state.end()
    }
}

impl Serialize for Activity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Activity", 2)?;
        state.serialize_field("type", "activity")?;
        state.serialize_field("sequence", &self.sequence)?;
        state.end()
    }
}

impl Serialize for DoStatement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DoStatement", 2)?;
        state.serialize_field("type", "do")?;
        state.serialize_field("action", &self.action)?;
        state.end()
    }
}
