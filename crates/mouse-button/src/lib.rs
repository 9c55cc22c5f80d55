//! mouse-button: Pointer buttons, wheel directions and raw code tables.
//!
//! - `Button`: The five recognized pointer buttons, in canonical order.
//! - `ButtonSet`: An ordered set of buttons; iteration follows `Button` order.
//! - `WheelDirection`: Scroll direction derived from a signed delta, with the
//!   sign convention selected by `WheelSource`.
//! - `ButtonCodes`: Translation table between `Button` values and a host's raw
//!   button codes and held-button bitmasks.
//!
//! Nothing in this crate knows about any particular UI toolkit. Hosts either
//! use `ButtonCodes::default()` or build a table for their own numbering.

mod button;
pub use button::Button;

mod set;
pub use set::ButtonSet;

mod wheel;
pub use wheel::{WheelDirection, WheelSource};

mod codes;
pub use codes::ButtonCodes;
