mod action;
mod error;
mod merge;
mod meta;
pub mod path;
mod preserve;
mod reducer;
pub mod tree;

pub use action::Action;
pub use error::{Error, Result};
pub use merge::{Identified, update_item_in_array, update_object};
pub use meta::{ActionMeta, path_from_meta};
pub use preserve::{
    PreserveFn, PreserveSetting, preserve_values_from_json, preserve_values_from_state,
};
pub use reducer::{
    CombinedReducer, HandlerFn, HandlerMap, HandlerReducer, ReduceFn, Reducer, ReducerMap,
    combine_reducers, create_reducer,
};
