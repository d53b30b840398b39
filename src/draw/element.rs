//! Root-level renderables: images and collages.

use super::form::Form;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A value the renderer can draw on its own.
///
/// Image paths are stored as given. Nothing here touches the filesystem; resolving and
/// decoding images is the renderer's job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum Element {
    /// Fixed-size canvas of forms, painted in list order (first = bottom layer)
    Collage {
        width: i32,
        height: i32,
        forms: Vec<Form>,
    },
    /// Image file drawn into a `width` x `height` target
    Image {
        /// Source origin inside the image, used when cropping
        origin: (i32, i32),
        width: i32,
        height: i32,
        path: String,
        /// `true` scales the whole image to fit, `false` crops at native resolution
        stretch: bool,
    },
}

impl Element {
    /// Forms of a collage in paint order, empty for images.
    pub fn forms(&self) -> &[Form] {
        match self {
            Element::Collage { forms, .. } => forms,
            Element::Image { .. } => &[],
        }
    }

    /// Target width and height.
    pub fn size(&self) -> (i32, i32) {
        match self {
            Element::Collage { width, height, .. } | Element::Image { width, height, .. } => {
                (*width, *height)
            }
        }
    }
}

/// The full image scaled into `width` x `height`.
pub fn image(width: i32, height: i32, path: impl Into<String>) -> Element {
    Element::Image {
        origin: (0, 0),
        width,
        height,
        path: path.into(),
        stretch: true,
    }
}

/// The image clipped to `width` x `height` from its top-left corner, unscaled.
pub fn fitted_image(width: i32, height: i32, path: impl Into<String>) -> Element {
    Element::Image {
        origin: (0, 0),
        width,
        height,
        path: path.into(),
        stretch: false,
    }
}

/// A `width` x `height` window into the image starting at `origin`, unscaled.
pub fn cropped_image(
    origin: (i32, i32),
    width: i32,
    height: i32,
    path: impl Into<String>,
) -> Element {
    Element::Image {
        origin,
        width,
        height,
        path: path.into(),
        stretch: false,
    }
}

pub fn collage(width: i32, height: i32, forms: Vec<Form>) -> Element {
    Element::Collage {
        width,
        height,
        forms,
    }
}
