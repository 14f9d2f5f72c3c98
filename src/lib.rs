/*!
`softcanvas` is a software rasterization backend for an HTML5-like 2D canvas.

It consumes pre-tessellated triangles and quads, and renders them into
an unpremultiplied RGBA8 [`Pixmap`] with optional multi-sample anti-aliasing,
gradients, image patterns, mipmapped images, a box blur, a clip mask and shadows.

```
use softcanvas::*;

let mut backend = SoftwareBackend::new(10, 10).unwrap();
let quad = [
    Point::from_xy(0.0, 0.0),
    Point::from_xy(10.0, 0.0),
    Point::from_xy(10.0, 10.0),
    Point::from_xy(0.0, 10.0),
];
let style = FillStyle::solid(ColorU8::from_rgba(255, 0, 0, 255));
backend.fill(&style, &quad, Transform::identity(), false);
assert_eq!(backend.pixmap().pixel(5, 5), Some(ColorU8::from_rgba(255, 0, 0, 255)));
```
*/

#![doc(html_root_url = "https://docs.rs/softcanvas/0.3.0")]
#![warn(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![allow(clippy::collapsible_if)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::float_cmp)]
#![allow(clippy::identity_op)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]
#![allow(clippy::too_many_arguments)]

mod backend;
pub mod blend;
pub mod blur;
mod clip;
mod color;
mod error;
mod image;
mod mask;
mod painter;
mod pixmap;
pub mod scan;
mod shaders;
mod shadow;
mod stencil;

pub use backend::{Backend, SoftwareBackend};
pub use clip::ClipMask;
pub use color::{AlphaU8, ColorU8, ALPHA_U8_OPAQUE, ALPHA_U8_TRANSPARENT};
pub use error::Error;
pub use image::{Image, ImageSource};
pub use mask::Mask;
pub use painter::FillStyle;
pub use pixmap::{Pixmap, BYTES_PER_PIXEL};
pub use shaders::{Gradient, GradientStop, ImagePattern, ImagePatternData, Repeat};
pub use shaders::{LinearGradient, RadialGradient, Shader};
pub use shadow::Shadow;

pub use softcanvas_geom::{IntRect, IntSize, Point, Rect, Transform};
