/// Data acquisition from the FWS gage detail pages.
///
/// `query` builds the request URL, `fws` parses the returned page.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod fws;
pub mod query;
