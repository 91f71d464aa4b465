//! imgwire - imgproxy URL builder
//!
//! Builds processing URLs for imgproxy-compatible servers: serialized
//! processing options, plain/base64/encrypted source encoding, and
//! HMAC-SHA256 signatures.
//!
//! ```
//! use imgwire::UrlBuilder;
//! use imgwire::options::{Resize, ResizingType};
//!
//! let builder = UrlBuilder::signed("736563726574", "68656c6c6f")?
//!     .with(Resize::new(ResizingType::Fill, Some(300), Some(200)));
//! let url = builder.url("http://example.com/image.jpg", Some("webp"))?;
//! # Ok::<(), imgwire::Error>(())
//! ```

pub mod builder;
pub mod encrypter;
pub mod error;
pub mod options;
pub mod signer;
pub mod support;

pub use builder::UrlBuilder;
pub use encrypter::UrlEncrypter;
pub use error::{Error, Result};
pub use signer::{HmacSigner, UrlSigner};
pub use support::{Color, GravityKind, GravityType, ImageFormat};
