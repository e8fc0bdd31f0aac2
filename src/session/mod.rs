//! Map lifecycle: joining the two payloads into an immutable
//! [`RenderSession`] and driving interaction state from events.

mod barrier;
mod controller;
mod debounce;
mod render_session;

pub use barrier::JoinBarrier;
pub use controller::{Choropleth, Payload, Pointer, Status};
pub use debounce::Debouncer;
pub use render_session::RenderSession;
