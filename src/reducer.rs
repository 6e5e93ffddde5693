use crate::action::Action;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// A pure function computing the next state of one branch.
///
/// `state` is `None` on the first call, before the branch exists. Reducers
/// should be pure (no I/O, no side effects) and return the state unchanged
/// for action types they do not handle.
///
/// # Examples
///
/// ```
/// use pathfold::{Action, ReduceFn};
/// use serde_json::{json, Value};
///
/// fn counter(state: Option<&Value>, _action: &Action) -> Value {
///     json!(state.and_then(Value::as_u64).unwrap_or(0) + 1)
/// }
///
/// let reducer: ReduceFn = counter;
/// ```
pub type ReduceFn = fn(Option<&Value>, &Action) -> Value;

/// A handler for one action type, receiving owned state.
pub type HandlerFn = fn(Value, &Action) -> Value;

/// Anything that folds an action into a branch of state.
///
/// Implemented for every `Fn(Option<&Value>, &Action) -> Value`, for
/// [`CombinedReducer`] and for [`HandlerReducer`].
pub trait Reducer {
    /// Compute the next state from the current one and an action.
    fn reduce(&self, state: Option<&Value>, action: &Action) -> Value;
}

impl<F> Reducer for F
where
    F: Fn(Option<&Value>, &Action) -> Value,
{
    fn reduce(&self, state: Option<&Value>, action: &Action) -> Value {
        self(state, action)
    }
}

/// Named sub-reducers, kept in declaration order.
///
/// # Examples
///
/// ```
/// use pathfold::{combine_reducers, Action, Reducer, ReducerMap};
/// use serde_json::{json, Value};
///
/// fn status(_state: Option<&Value>, action: &Action) -> Value {
///     json!(action.action_type)
/// }
///
/// let root = combine_reducers(
///     ReducerMap::new()
///         .reducer("status", status)
///         .reducer("count", |state: Option<&Value>, _: &Action| {
///             json!(state.and_then(Value::as_u64).unwrap_or(0) + 1)
///         }),
/// );
/// let state = root.reduce(None, &Action::new("INIT"));
/// assert_eq!(state, json!({"status": "INIT", "count": 1}));
/// ```
#[derive(Default)]
pub struct ReducerMap {
    entries: Vec<(String, Box<dyn Reducer>)>,
}

impl ReducerMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the reducer owning `key`.
    ///
    /// Registering the same key twice replaces the earlier reducer but keeps
    /// its original position.
    pub fn reducer(mut self, key: &str, reducer: impl Reducer + 'static) -> Self {
        let reducer: Box<dyn Reducer> = Box::new(reducer);
        match self.entries.iter_mut().find(|(existing, _)| existing.as_str() == key) {
            Some(slot) => {
                log::warn!("reducer for '{key}' registered twice, keeping the later one");
                slot.1 = reducer;
            }
            None => self.entries.push((key.to_string(), reducer)),
        }
        self
    }

    /// Registered keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Number of registered reducers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no reducer is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ReducerMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}

/// Compose named sub-reducers into one reducer over an object state.
///
/// See [`CombinedReducer`] for the resulting behavior.
pub fn combine_reducers(map: ReducerMap) -> CombinedReducer {
    log::debug!("combining {} reducers: {:?}", map.len(), map);
    CombinedReducer {
        entries: map.entries,
    }
}

/// The root reducer built by [`combine_reducers`].
///
/// Each call returns a new object whose keys are exactly the registered
/// keys. Every sub-reducer sees its own branch of the incoming state (or
/// `None`), in declaration order. Keys of the incoming state that no
/// reducer owns are dropped.
pub struct CombinedReducer {
    entries: Vec<(String, Box<dyn Reducer>)>,
}

impl CombinedReducer {
    /// Keys of the produced state, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl fmt::Debug for CombinedReducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinedReducer")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Reducer for CombinedReducer {
    fn reduce(&self, state: Option<&Value>, action: &Action) -> Value {
        let prior = match state {
            Some(Value::Object(fields)) => Some(fields),
            _ => None,
        };

        let mut next = Map::new();
        for (key, reducer) in &self.entries {
            let branch = prior.and_then(|fields| fields.get(key));
            next.insert(key.clone(), reducer.reduce(branch, action));
        }
        Value::Object(next)
    }
}

/// Handlers keyed by action type.
#[derive(Debug, Default, Clone)]
pub struct HandlerMap {
    handlers: HashMap<String, HandlerFn>,
}

impl HandlerMap {
    /// An empty handler table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle actions of type `action_type` with `handler`.
    pub fn on(mut self, action_type: &str, handler: HandlerFn) -> Self {
        if self
            .handlers
            .insert(action_type.to_string(), handler)
            .is_some()
        {
            log::warn!("handler for '{action_type}' registered twice, keeping the later one");
        }
        self
    }
}

/// Build a reducer that dispatches on the action type.
///
/// # Examples
///
/// ```
/// use pathfold::{create_reducer, Action, HandlerMap, Reducer};
/// use serde_json::{json, Value};
///
/// fn clear(_state: Value, _action: &Action) -> Value {
///     json!({})
/// }
///
/// let reducer = create_reducer(json!({"a": 1}), HandlerMap::new().on("CLEAR", clear));
/// assert_eq!(reducer.reduce(None, &Action::new("NOOP")), json!({"a": 1}));
/// assert_eq!(reducer.reduce(None, &Action::new("CLEAR")), json!({}));
/// ```
pub fn create_reducer(initial_state: Value, handlers: HandlerMap) -> HandlerReducer {
    HandlerReducer {
        initial_state,
        handlers: handlers.handlers,
    }
}

/// The reducer built by [`create_reducer`].
///
/// Starts from a copy of the initial state when given `None`, applies the
/// handler registered for the action's type, and returns an unchanged copy
/// for unhandled types.
#[derive(Debug, Clone)]
pub struct HandlerReducer {
    initial_state: Value,
    handlers: HashMap<String, HandlerFn>,
}

impl HandlerReducer {
    /// State used before the first action.
    pub fn initial_state(&self) -> &Value {
        &self.initial_state
    }
}

impl Reducer for HandlerReducer {
    fn reduce(&self, state: Option<&Value>, action: &Action) -> Value {
        let state = state
            .cloned()
            .unwrap_or_else(|| self.initial_state.clone());
        match self.handlers.get(&action.action_type) {
            Some(handler) => handler(state, action),
            None => state,
        }
    }
}
