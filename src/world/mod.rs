// world/ - Pure geometry for both effects
//
// No state, no allocation - just math. Everything here is safe to call
// with degenerate input (coincident points, zero vectors) and never
// returns NaN for finite arguments.

mod forces;
mod orbit;

pub use forces::*;
pub use orbit::*;
