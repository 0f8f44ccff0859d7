//! Lazily resolved image attribute.

use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Base location that relative image paths resolve against.
pub const ASSET_BASE_URI: &str = "ms-appx:///";

/// Resource handle produced by resolving an image path.
///
/// Decoding is left to the presentation layer; this only names the resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    uri: String,
}

impl ImageSource {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// Shared image handle. Equality is reference identity, so two resolutions
/// of the same path are distinct values.
#[derive(Clone)]
pub struct ImageRef(Rc<ImageSource>);

impl ImageRef {
    pub fn new(source: ImageSource) -> Self {
        Self(Rc::new(source))
    }

    pub fn uri(&self) -> &str {
        self.0.uri()
    }
}

impl PartialEq for ImageRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ImageRef {}

impl Debug for ImageRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ImageRef").field(&self.0.uri).finish()
    }
}

/// Joins `path` onto `base` and wraps the result in a fresh handle.
pub fn resolve_image(base: &str, path: &str) -> ImageRef {
    let relative = path.trim_start_matches('/');
    let uri = if base.ends_with('/') {
        format!("{base}{relative}")
    } else {
        format!("{base}/{relative}")
    };
    ImageRef::new(ImageSource::new(uri))
}

/// Authoritative image state: nothing, a path awaiting resolution, or a
/// resolved handle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageSlot {
    #[default]
    Empty,
    Unresolved(String),
    Resolved(ImageRef),
}

impl ImageSlot {
    pub fn from_path(path: Option<String>) -> Self {
        path.map_or(Self::Empty, Self::Unresolved)
    }

    /// Returns the image, resolving a pending path against `base` first.
    ///
    /// A resolved handle is cached in place and returned on later reads.
    pub fn resolve(&mut self, base: &str) -> Option<ImageRef> {
        match self {
            Self::Empty => None,
            Self::Resolved(image) => Some(image.clone()),
            Self::Unresolved(path) => {
                let image = resolve_image(base, path);
                *self = Self::Resolved(image.clone());
                Some(image)
            }
        }
    }

    /// The resolved handle, without triggering resolution.
    pub fn resolved(&self) -> Option<&ImageRef> {
        match self {
            Self::Resolved(image) => Some(image),
            Self::Empty | Self::Unresolved(_) => None,
        }
    }

    pub fn pending_path(&self) -> Option<&str> {
        match self {
            Self::Unresolved(path) => Some(path.as_str()),
            Self::Empty | Self::Resolved(_) => None,
        }
    }
}
