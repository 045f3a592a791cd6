//! Test doubles for the workflows transport.

mod http;

pub use http::{MockHttp, MockHttpBuilder, MockHttpRule};
