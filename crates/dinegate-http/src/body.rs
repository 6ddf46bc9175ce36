//! Response body.
//!
//! Every response is either a JSON envelope, fully serialized before the
//! response is built, or nothing at all (CORS preflight).

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use http_body::{Body, Frame, SizeHint};
use http_body_util::Full;

/// Body of every Dinegate response.
#[derive(Debug, Default)]
pub enum ApiResponseBody {
    /// A serialized JSON envelope.
    Json(Full<Bytes>),
    /// No body.
    #[default]
    Empty,
}

impl ApiResponseBody {
    /// Wrap serialized JSON.
    #[must_use]
    pub fn from_json(json: Vec<u8>) -> Self {
        Self::Json(Full::new(Bytes::from(json)))
    }

    /// A body with no content.
    #[must_use]
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Whether this body carries an envelope (and so a `content-type`).
    #[must_use]
    pub fn has_content(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}

impl Body for ApiResponseBody {
    type Data = Bytes;
    type Error = std::io::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Bytes>, std::io::Error>>> {
        match self.get_mut() {
            Self::Json(json) => Pin::new(json).poll_frame(cx).map_err(|never| match never {}),
            Self::Empty => Poll::Ready(None),
        }
    }

    fn is_end_stream(&self) -> bool {
        match self {
            Self::Json(json) => json.is_end_stream(),
            Self::Empty => true,
        }
    }

    fn size_hint(&self) -> SizeHint {
        match self {
            Self::Json(json) => json.size_hint(),
            Self::Empty => SizeHint::with_exact(0),
        }
    }
}
