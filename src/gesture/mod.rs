//! Pointer interaction on the canvas: screen/data mapping, hit-testing and the
//! click-versus-drag state machine.

mod controller;
mod hit;
mod transform;

pub use controller::{GestureController, GestureOutcome, GestureState, Target};
pub use hit::{pick_edge, pick_vertex};
pub use transform::{ScreenTransform, ViewTransform};
