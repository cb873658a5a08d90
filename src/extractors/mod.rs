pub mod headers;

pub use headers::PingHeaders;
