//! Builder for constructing script definitions.

use crate::core::{OptionTag, Pick, StateId, StepIndex, TransitionResult};
use crate::registry::{
    check_entries, first_violation, AuthoringError, EntryRole, HandlerEntry, HandlerRegistry,
};
use crate::script::ScriptDefinition;
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing script definitions with a fluent API.
pub struct ScriptBuilder {
    name: String,
    first: Option<StateId>,
    select: Option<StateId>,
    entries: Vec<HandlerEntry>,
    options: HashMap<StateId, OptionTag>,
}

impl ScriptBuilder {
    /// Create a new builder for the script called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            first: None,
            select: None,
            entries: Vec::new(),
            options: HashMap::new(),
        }
    }

    /// Set the first state (required).
    pub fn first(mut self, id: StateId) -> Self {
        self.first = Some(id);
        self
    }

    /// Set the select state (optional).
    pub fn select(mut self, id: StateId) -> Self {
        self.select = Some(id);
        self
    }

    /// Add a handler whose id is parsed from `name` (`<prefix>__<digits>`).
    pub fn handler<F>(self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(StepIndex, Pick) -> Option<TransitionResult> + Send + Sync + 'static,
    {
        self.entry(HandlerEntry::named(name, handler))
    }

    /// Add a handler bound to an explicit id.
    pub fn state<F>(self, id: StateId, handler: F) -> Self
    where
        F: Fn(StepIndex, Pick) -> Option<TransitionResult> + Send + Sync + 'static,
    {
        self.entry(HandlerEntry::with_id(id, handler))
    }

    /// Add a pre-built entry.
    pub fn entry(mut self, entry: HandlerEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Attach presentation metadata to a state.
    pub fn option(mut self, id: StateId, tag: OptionTag) -> Self {
        self.options.insert(id, tag);
        self
    }

    /// Check the definition, accumulating every defect.
    ///
    /// Covers handler naming and uniqueness plus the entry points: the
    /// first state must be declared and both entry points must have a
    /// handler.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<AuthoringError>> {
        let registered: Vec<StateId> = self.entries.iter().filter_map(HandlerEntry::id).collect();
        let entry_check = |role: EntryRole, id: StateId| {
            if registered.contains(&id) {
                Validation::success(())
            } else {
                Validation::fail(AuthoringError::UnregisteredEntry { role, id })
            }
        };

        let mut checks = vec![check_entries(&self.entries)];

        match self.first {
            Some(id) => checks.push(entry_check(EntryRole::First, id)),
            None => checks.push(Validation::fail(AuthoringError::MissingFirstState)),
        }

        if let Some(id) = self.select {
            checks.push(entry_check(EntryRole::Select, id));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the definition.
    /// Returns the first defect `validate` would report.
    pub fn build(self) -> Result<ScriptDefinition, AuthoringError> {
        first_violation(self.validate())?;
        let first = self.first.ok_or(AuthoringError::MissingFirstState)?;
        let registry = HandlerRegistry::build(self.entries)?;

        Ok(ScriptDefinition {
            name: self.name,
            first,
            select: self.select,
            registry,
            options: self.options,
        })
    }
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::new("script")
    }
}
