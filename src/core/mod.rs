pub mod color;
pub mod constants;
pub mod draw;
pub mod field;
pub mod glow;
pub mod ripple;
pub mod tab_title;
pub mod text;
pub mod trail;
pub mod transient;

pub use color::{Rgba, PALETTE};
pub use draw::{DrawList, DrawOp};
pub use field::{BackgroundCell, ParticleField};
pub use glow::{Glow, GlowPoint};
pub use ripple::{RippleField, RippleRecord};
pub use tab_title::TabTitle;
pub use trail::{PointerPhase, PointerState, PointerTrail, Trail, TrailPoint};
pub use transient::{Transient, TransientId, TransientKind, Transients};
