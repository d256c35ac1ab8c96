mod room_command;
mod room_handle;
mod room_registry;
mod signaling_relay;

pub use room_command::*;
pub use room_handle::*;
pub use room_registry::*;
pub use signaling_relay::*;
