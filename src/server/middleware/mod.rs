//! HTTP middleware implementations

mod request_id;


pub use request_id::{
    REQUEST_ID_HEADER, RequestId, RequestIdMiddleware, RequestIdMiddlewareService, request_id,
};
