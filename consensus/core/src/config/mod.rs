pub mod args;
pub mod checkpoints;
pub mod constants;
pub mod genesis;
pub mod params;
pub mod registry;
pub mod seeds;
pub mod selector;

pub use args::{NetworkArgs, NetworkArgsError, select_params_from_args};
pub use params::{Base58Type, ParamOverrides, Params};
pub use registry::Registry;
pub use selector::{ModifiableParams, Selector, init_params, is_selected, modifiable_params, params, params_for, select_params};
