// Input handling system
//
// - `action`: game actions and default bindings
// - `config`: source -> action bindings and remapping
// - `state`: held and edge-triggered actions for one tick
// - `manager`: feeds winit events through the bindings into the state
//
// The game only ever reads an `InputState`; window events stay in the manager.

pub mod action;
pub mod config;
pub mod manager;
pub mod state;

pub use action::Action;
pub use config::InputConfig;
pub use manager::InputManager;
pub use state::InputState;
