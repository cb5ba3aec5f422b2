//! Registration metadata for visual-pipeline hosts.
//!
//! Hosts that expose operations as pipeline nodes register them from plain
//! descriptor values; the host owns whatever table it keeps them in. No
//! process-wide mutable registry lives in this crate.

/// How a node input is edited and defaulted in the host UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParamKind {
    /// An image input. Always required, no default.
    Image,
    /// A signed integer with a UI default.
    Int {
        /// Value shown before the user edits the field.
        default: i64,
    },
}

/// A single named node input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Param {
    /// Field name the host binds values to.
    pub name: &'static str,
    /// Editor kind and default.
    pub kind: ParamKind,
}

/// Registration entry for one pipeline node.
///
/// Fields are private with const getters so entries stay usable in statics
/// while leaving room to grow.
///
/// # Example
///
/// ```
/// use zenoverlay::{NodeDescriptor, Param, ParamKind};
///
/// static BLUR: NodeDescriptor = NodeDescriptor::new("BlurNode", "Blur")
///     .with_params(&[Param {
///         name: "image",
///         kind: ParamKind::Image,
///     }]);
///
/// assert_eq!(BLUR.id(), "BlurNode");
/// assert_eq!(BLUR.category(), "Custom");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeDescriptor {
    id: &'static str,
    display_name: &'static str,
    category: &'static str,
    params: &'static [Param],
}

impl NodeDescriptor {
    /// Create a descriptor with no params in the `Custom` UI category.
    pub const fn new(id: &'static str, display_name: &'static str) -> Self {
        Self {
            id,
            display_name,
            category: "Custom",
            params: &[],
        }
    }

    /// Set the UI category.
    pub const fn with_category(mut self, category: &'static str) -> Self {
        self.category = category;
        self
    }

    /// Set the required inputs, in declaration order.
    pub const fn with_params(mut self, params: &'static [Param]) -> Self {
        self.params = params;
        self
    }

    /// Stable node identifier.
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Human-facing display name.
    pub const fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// UI category the node appears under.
    pub const fn category(&self) -> &'static str {
        self.category
    }

    /// Required inputs in declaration order.
    pub const fn params(&self) -> &'static [Param] {
        self.params
    }
}

/// Descriptor for the overlay compositing node.
///
/// Hosts bind `source_image` and `cropped_image` to
/// [`ImageBatch`](crate::ImageBatch) values and the two coordinates to the
/// offsets of [`composite`](crate::composite).
pub static IMAGE_OVERLAY: NodeDescriptor =
    NodeDescriptor::new("ImageOverlayNode", "Image Overlay Node").with_params(&[
        Param {
            name: "source_image",
            kind: ParamKind::Image,
        },
        Param {
            name: "cropped_image",
            kind: ParamKind::Image,
        },
        Param {
            name: "x_coordinate",
            kind: ParamKind::Int { default: 0 },
        },
        Param {
            name: "y_coordinate",
            kind: ParamKind::Int { default: 0 },
        },
    ]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_descriptor_values() {
        assert_eq!(IMAGE_OVERLAY.id(), "ImageOverlayNode");
        assert_eq!(IMAGE_OVERLAY.display_name(), "Image Overlay Node");
        assert_eq!(IMAGE_OVERLAY.category(), "Custom");
    }

    #[test]
    fn overlay_params_in_order() {
        let params = IMAGE_OVERLAY.params();
        assert_eq!(params.len(), 4);
        assert_eq!(params[0].name, "source_image");
        assert_eq!(params[0].kind, ParamKind::Image);
        assert_eq!(params[1].name, "cropped_image");
        assert_eq!(params[1].kind, ParamKind::Image);
        assert_eq!(params[2].name, "x_coordinate");
        assert_eq!(params[2].kind, ParamKind::Int { default: 0 });
        assert_eq!(params[3].name, "y_coordinate");
        assert_eq!(params[3].kind, ParamKind::Int { default: 0 });
    }

    #[test]
    fn builder_defaults() {
        let node = NodeDescriptor::new("X", "X Node");
        assert_eq!(node.category(), "Custom");
        assert!(node.params().is_empty());
    }

    #[test]
    fn builder_overrides() {
        static PARAMS: [Param; 1] = [Param {
            name: "image",
            kind: ParamKind::Image,
        }];
        let node = NodeDescriptor::new("X", "X Node")
            .with_category("image/util")
            .with_params(&PARAMS);
        assert_eq!(node.category(), "image/util");
        assert_eq!(node.params().len(), 1);
    }
}
