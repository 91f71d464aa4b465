//! URL assembly
//!
//! Builds imgproxy-compatible processing URLs: a signature segment,
//! the serialized option path, and the encoded source.

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use tracing::debug;

use crate::encrypter::UrlEncrypter;
use crate::error::{Error, Result};
use crate::options::ProcessingOption;
use crate::signer::{HmacSigner, UrlSigner};
use crate::support::ImageFormat;

const INSECURE_SIGN: &str = "insecure";
const PLAIN_PREFIX: &str = "plain/";
const ENCRYPTED_PREFIX: &str = "enc/";
const DEFAULT_SPLIT_SIZE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceFormat {
    Plain,
    Base64,
    Encrypted,
}

/// Persistent URL builder.
///
/// Every configuration method returns a new builder, so a base
/// configuration can be shared and branched without interference:
///
/// ```
/// use imgwire::UrlBuilder;
/// use imgwire::options::{Resize, ResizingType};
///
/// let base = UrlBuilder::new();
/// let thumb = base.with(Resize::new(ResizingType::Fill, Some(100), Some(100)));
/// let url = thumb.url("http://example.com/image.jpg", None)?;
/// # Ok::<(), imgwire::Error>(())
/// ```
#[derive(Clone)]
pub struct UrlBuilder {
    signer: Option<Arc<dyn UrlSigner>>,
    encrypter: Option<UrlEncrypter>,
    source_format: SourceFormat,
    split_size: usize,
    options: Vec<Arc<dyn ProcessingOption>>,
    pipelines: Vec<Vec<Arc<dyn ProcessingOption>>>,
    info_endpoint: bool,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlBuilder {
    /// Unsigned builder; URLs carry the literal `insecure` signature.
    pub fn new() -> Self {
        Self {
            signer: None,
            encrypter: None,
            source_format: SourceFormat::Base64,
            split_size: DEFAULT_SPLIT_SIZE,
            options: Vec::new(),
            pipelines: Vec::new(),
            info_endpoint: false,
        }
    }

    /// Builder signing with HMAC-SHA256 over a hex key and salt.
    pub fn signed(key: &str, salt: &str) -> Result<Self> {
        Ok(Self::new().with_signer(Arc::new(HmacSigner::new(key, salt)?)))
    }

    /// Builder using a custom signature scheme.
    pub fn with_signer(&self, signer: Arc<dyn UrlSigner>) -> Self {
        let mut builder = self.clone();
        builder.signer = Some(signer);
        builder
    }

    pub fn options(&self) -> &[Arc<dyn ProcessingOption>] {
        &self.options
    }

    /// Append a processing option.
    pub fn with(&self, option: impl ProcessingOption + 'static) -> Self {
        let mut builder = self.clone();
        builder.options.push(Arc::new(option));
        builder
    }

    /// Append a chained pipeline, rendered as a `/-/`-separated group.
    pub fn pipeline(&self, options: Vec<Box<dyn ProcessingOption>>) -> Self {
        let mut builder = self.clone();
        builder
            .pipelines
            .push(options.into_iter().map(Arc::from).collect());
        builder
    }

    /// Encode sources as chunked base64url (the default).
    pub fn base64(&self) -> Self {
        let mut builder = self.clone();
        builder.source_format = SourceFormat::Base64;
        builder
    }

    /// Embed sources as plain URLs.
    pub fn plain(&self) -> Self {
        let mut builder = self.clone();
        builder.source_format = SourceFormat::Plain;
        builder
    }

    /// Toggle between base64 and plain source encoding.
    pub fn encoded(&self, encoded: bool) -> Self {
        if encoded {
            self.base64()
        } else {
            self.plain()
        }
    }

    /// Encrypt sources with AES-CBC under the given hex key.
    pub fn encrypted(&self, key: &str) -> Result<Self> {
        let mut builder = self.clone();
        builder.source_format = SourceFormat::Encrypted;
        builder.encrypter = Some(UrlEncrypter::new(key)?);
        Ok(builder)
    }

    /// Chunk size for encoded sources; zero disables chunking.
    pub fn split(&self, size: usize) -> Self {
        let mut builder = self.clone();
        builder.split_size = size;
        builder
    }

    /// Target the info endpoint instead of processing.
    pub fn info(&self) -> Self {
        let mut builder = self.clone();
        builder.info_endpoint = true;
        builder
    }

    /// Build the URL path for a source, optionally forcing an output
    /// extension.
    pub fn url(&self, src: &str, extension: Option<&str>) -> Result<String> {
        let format = match extension {
            Some(extension) => Some(extension.parse::<ImageFormat>()?),
            None => None,
        };

        let source = self.source(src, format)?;
        let path = self.path_with_pipelines(&source);

        let signature = self.signature(path.as_bytes());
        let path = if self.info_endpoint {
            format!("/info{path}")
        } else {
            path
        };

        debug!(source = src, options = self.options.len(), "built url");

        Ok(format!("/{signature}{path}"))
    }

    fn path_with_pipelines(&self, source: &str) -> String {
        let mut options_path = self
            .options
            .iter()
            .map(|option| option.value())
            .collect::<Vec<_>>()
            .join("/");

        for pipeline in &self.pipelines {
            options_path.push_str("/-/");
            let joined = pipeline
                .iter()
                .map(|option| option.value())
                .collect::<Vec<_>>()
                .join("/");
            options_path.push_str(&joined);
        }

        format!("/{options_path}/{source}")
    }

    fn source(&self, src: &str, format: Option<ImageFormat>) -> Result<String> {
        match self.source_format {
            SourceFormat::Plain => Ok(self.plain_source(src, format)),
            SourceFormat::Base64 => Ok(self.base64_source(src, format)),
            SourceFormat::Encrypted => self.encrypted_source(src, format),
        }
    }

    fn plain_source(&self, src: &str, format: Option<ImageFormat>) -> String {
        let source = format!("{PLAIN_PREFIX}{src}").replace('@', "%40");

        // The extension rides behind '@' and only when it changes the
        // detected source format.
        match format {
            Some(format) if !format.matches(&detect_extension(src)) => {
                format!("{source}@{format}")
            }
            _ => source,
        }
    }

    fn base64_source(&self, src: &str, format: Option<ImageFormat>) -> String {
        let mut source = URL_SAFE_NO_PAD.encode(src.as_bytes());
        if self.split_size > 0 {
            source = chunk(&source, self.split_size);
        }
        match format {
            Some(format) => format!("{source}.{format}"),
            None => source,
        }
    }

    fn encrypted_source(&self, src: &str, format: Option<ImageFormat>) -> Result<String> {
        let encrypter = self
            .encrypter
            .as_ref()
            .ok_or_else(|| Error::Configuration("url encrypter is not configured".to_string()))?;

        let mut token = encrypter.encrypt(src)?;
        if self.split_size > 0 {
            token = chunk(&token, self.split_size);
        }
        let source = format!("{ENCRYPTED_PREFIX}{token}");

        Ok(match format {
            Some(format) => format!("{source}.{format}"),
            None => source,
        })
    }

    fn signature(&self, path: &[u8]) -> String {
        match &self.signer {
            Some(signer) => URL_SAFE_NO_PAD.encode(signer.sign(path)),
            None => INSECURE_SIGN.to_string(),
        }
    }
}

fn chunk(token: &str, size: usize) -> String {
    token
        .as_bytes()
        .chunks(size)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("/")
}

// Extension of the path component of a URL, empty when there is none.
fn detect_extension(src: &str) -> String {
    let path = src.split(|c| c == '?' || c == '#').next().unwrap_or_default();
    let path = match path.find("://") {
        Some(pos) => match path[pos + 3..].find('/') {
            Some(slash) => &path[pos + 3 + slash..],
            None => "",
        },
        None => path,
    };
    let segment = path.rsplit('/').next().unwrap_or_default();
    match segment.rfind('.') {
        Some(dot) => segment[dot + 1..].to_string(),
        None => String::new(),
    }
}
