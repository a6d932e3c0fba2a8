//! Handler registry: the id → handler table behind every script.
//!
//! Handlers are registered either by name, following the
//! `<prefix>__<digits>` convention (the trailing digit run is the state
//! id), or against an explicit id. Either way the result is an immutable
//! table, checked for ambiguity once at construction and shared read-only
//! afterwards.
//!
//! # Example
//!
//! ```rust
//! use talkstate::core::TransitionResult;
//! use talkstate::registry::{HandlerEntry, HandlerRegistry};
//!
//! let registry = HandlerRegistry::build(vec![
//!     HandlerEntry::named("greet__10", |_, _| Some(TransitionResult::Advance(20))),
//!     HandlerEntry::named("farewell__20", |_, _| Some(TransitionResult::Advance(0))),
//! ])
//! .unwrap();
//!
//! assert_eq!(registry.ids(), vec![10, 20]);
//! assert_eq!(registry.name_of(20), Some("farewell__20"));
//! ```

pub mod error;

pub use error::{AuthoringError, EntryRole};

use crate::core::{Pick, StateId, StepIndex, TransitionResult};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// A state handler.
///
/// Receives the step index and the pick; `None` means the handler has no
/// directive for this input, which is an authoring defect.
pub type Handler = Arc<dyn Fn(StepIndex, Pick) -> Option<TransitionResult> + Send + Sync>;

/// Separator between a handler's prefix and its numeric id.
pub const ID_SEPARATOR: &str = "__";

/// Parse the state id embedded in a handler name.
///
/// Recognises `<prefix>__<digits>` with a non-empty prefix and a digit run
/// that fits in a `StateId`.
///
/// ```rust
/// use talkstate::registry::parse_handler_id;
///
/// assert_eq!(parse_handler_id("state__10"), Some(10));
/// assert_eq!(parse_handler_id("quest_intro__0"), Some(0));
/// assert_eq!(parse_handler_id("__10"), None);
/// assert_eq!(parse_handler_id("state_10"), None);
/// assert_eq!(parse_handler_id("state__1a"), None);
/// ```
pub fn parse_handler_id(name: &str) -> Option<StateId> {
    let (prefix, digits) = name.rsplit_once(ID_SEPARATOR)?;
    if prefix.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// One declared handler, before validation.
pub struct HandlerEntry {
    name: Option<String>,
    id: Option<StateId>,
    handler: Handler,
}

impl HandlerEntry {
    /// Entry whose id is discovered from its name.
    pub fn named<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(StepIndex, Pick) -> Option<TransitionResult> + Send + Sync + 'static,
    {
        let name = name.into();
        Self {
            id: parse_handler_id(&name),
            name: Some(name),
            handler: Arc::new(handler),
        }
    }

    /// Entry bound to an explicit id.
    pub fn with_id<F>(id: StateId, handler: F) -> Self
    where
        F: Fn(StepIndex, Pick) -> Option<TransitionResult> + Send + Sync + 'static,
    {
        Self {
            name: None,
            id: Some(id),
            handler: Arc::new(handler),
        }
    }

    /// Name used in diagnostics. Explicit entries get a synthetic one
    /// that no handler name can spell.
    pub fn display_name(&self) -> String {
        match (&self.name, self.id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => format!("<state {id}>"),
            (None, None) => String::from("<anonymous>"),
        }
    }

    pub fn id(&self) -> Option<StateId> {
        self.id
    }
}

impl std::fmt::Debug for HandlerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerEntry")
            .field("name", &self.name)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Check a set of entries, accumulating every defect.
///
/// Reports malformed names, names declared twice and ids claimed by more
/// than one entry.
pub fn check_entries(entries: &[HandlerEntry]) -> Validation<(), NonEmptyVec<AuthoringError>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<AuthoringError>>> = Vec::new();
    let mut names: HashSet<&str> = HashSet::new();
    let mut owners: HashMap<StateId, String> = HashMap::new();

    for entry in entries {
        if let Some(name) = entry.name.as_deref() {
            if !names.insert(name) {
                checks.push(Validation::fail(AuthoringError::DuplicateHandler {
                    name: name.to_string(),
                }));
                continue;
            }
        }

        let Some(id) = entry.id else {
            checks.push(Validation::fail(AuthoringError::MalformedHandlerName {
                name: entry.display_name(),
            }));
            continue;
        };

        let check = match owners.get(&id) {
            Some(first) => Validation::fail(AuthoringError::DuplicateState {
                id,
                first: first.clone(),
                second: entry.display_name(),
            }),
            None => {
                owners.insert(id, entry.display_name());
                Validation::success(())
            }
        };
        checks.push(check);
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Return the first defect of a failed validation.
pub(crate) fn first_violation(
    validation: Validation<(), NonEmptyVec<AuthoringError>>,
) -> Result<(), AuthoringError> {
    match validation {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => match errors.iter().next() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        },
    }
}

struct Registered {
    name: String,
    handler: Handler,
}

/// Immutable id → handler table.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: BTreeMap<StateId, Registered>,
}

impl HandlerRegistry {
    /// Build a registry, failing on the first ambiguity.
    pub fn build(entries: Vec<HandlerEntry>) -> Result<Self, AuthoringError> {
        first_violation(check_entries(&entries))?;

        let mut handlers = BTreeMap::new();
        for entry in entries {
            let name = entry.display_name();
            let Some(id) = entry.id else {
                return Err(AuthoringError::MalformedHandlerName { name });
            };
            debug!(target: "talkstate::registry", id, name = %name, "registered handler");
            handlers.insert(
                id,
                Registered {
                    name,
                    handler: entry.handler,
                },
            );
        }

        Ok(Self { handlers })
    }

    /// Build a registry from an explicit `(id, handler)` table.
    pub fn from_table<I, F>(table: I) -> Result<Self, AuthoringError>
    where
        I: IntoIterator<Item = (StateId, F)>,
        F: Fn(StepIndex, Pick) -> Option<TransitionResult> + Send + Sync + 'static,
    {
        Self::build(
            table
                .into_iter()
                .map(|(id, handler)| HandlerEntry::with_id(id, handler))
                .collect(),
        )
    }

    pub fn get(&self, id: StateId) -> Option<&Handler> {
        self.handlers.get(&id).map(|registered| &registered.handler)
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.handlers.contains_key(&id)
    }

    /// Registered ids in ascending order.
    pub fn ids(&self) -> Vec<StateId> {
        self.handlers.keys().copied().collect()
    }

    /// Name the handler for `id` was registered under.
    pub fn name_of(&self, id: StateId) -> Option<&str> {
        self.handlers
            .get(&id)
            .map(|registered| registered.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.handlers.iter().map(|(id, r)| (id, &r.name)))
            .finish()
    }
}
