//! Extension point for the platform URL handler.

use url::Url;

/// Opens a validated URL in the platform's default handler.
///
/// The decorator validates click-time text before calling this, so
/// implementations receive only well-formed URLs. Hosts typically shell out
/// to the OS opener; tests substitute a recording fake.
pub trait UrlOpener {
    /// Request that the platform open `url`. Errors are host-defined and
    /// reported by the caller.
    fn open(&mut self, url: &Url) -> Result<(), String>;
}

/// An opener that drops every request. Useful for headless hosts and tests.
#[derive(Debug, Default)]
pub struct NullOpener;

impl UrlOpener for NullOpener {
    fn open(&mut self, _url: &Url) -> Result<(), String> {
        Ok(())
    }
}
