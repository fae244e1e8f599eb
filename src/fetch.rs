pub mod client;
pub mod headers;
pub mod transport;

pub use client::{Fetcher, MAX_ATTEMPTS};
pub use headers::ClientHeaders;
pub use transport::{HttpResponse, ReqwestTransport, Transport};

#[cfg(test)]
pub(crate) use transport::testing;
