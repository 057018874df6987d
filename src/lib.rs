mod carousel;
mod errors;
mod record;
mod render;
mod session;
mod source;

pub use carousel::{Carousel, NodeId};
pub use errors::*;
pub use record::{parse_tips, ParsedTips, Record, RecordShape, PLACEHOLDER};
pub use render::{RenderSurface, Zone};
pub use session::{Direction, SessionOptions, SessionPhase, TipSession, DEFAULT_TIMEOUT};
pub use source::{HttpTipSource, TipSource, TipsResponse};
