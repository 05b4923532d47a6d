// Input configuration and remapping

use super::action::{arrow_key_bindings, default_bindings, Action, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys/buttons) to game actions
///
/// A source drives at most one action; an action may have any number of sources.
#[derive(Debug, Clone)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::empty();
        config.bind_all(bindings);
        config
    }

    /// Defaults, optionally with the arrow keys moving as well
    pub fn with_arrow_keys(arrow_keys: bool) -> Self {
        let mut config = Self::default();
        if arrow_keys {
            config.bind_all(arrow_key_bindings());
        }
        config
    }

    /// Bind an input source to an action, returning what it was bound to before
    pub fn bind(&mut self, source: InputSource, action: Action) -> Option<Action> {
        self.bindings.insert(source, action)
    }

    pub fn bind_all(&mut self, bindings: Vec<(InputSource, Action)>) {
        for (source, action) in bindings {
            self.bind(source, action);
        }
    }

    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}
