mod color;
mod linear;
mod quantize;

pub use color::{Palette, Rgb, Scheme};
pub use linear::LinearScale;
pub use quantize::QuantizeScale;
