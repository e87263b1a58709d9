//! Route table and dispatcher.
//!
//! Routes are scanned in table order and the first one whose method and path
//! shape both match runs, exactly once. More specific shapes are listed
//! before generic ones.

use super::config::LegacyPolicy;
use super::handlers::{self, Handler, HandlerContext, HandlerError};
use crate::catalog_store::{Catalog, Fields};
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(&'static str),
    Param(&'static str),
}

/// A path shape such as `/albums/{albumId}/songs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &'static str) -> PathPattern {
        let segments = pattern
            .trim_start_matches('/')
            .split('/')
            .map(|segment| {
                match segment
                    .strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                {
                    Some(name) => Segment::Param(name),
                    None => Segment::Literal(segment),
                }
            })
            .collect();
        PathPattern { segments }
    }

    /// Matches a request path and extracts its parameters. Every segment of
    /// the path must be non-empty, so trailing slashes never match.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let parts: Vec<&str> = path.strip_prefix('/')?.split('/').collect();
        if parts.len() != self.segments.len() || parts.iter().any(|p| p.is_empty()) {
            return None;
        }
        let mut params = RouteParams::default();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if *literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => params.values.push((name, part.to_string())),
            }
        }
        Some(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: Vec<(&'static str, String)>,
}

impl RouteParams {
    pub fn from_pairs(pairs: &[(&'static str, &str)]) -> Self {
        RouteParams {
            values: pairs
                .iter()
                .map(|(name, value)| (*name, value.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

pub struct Route {
    pub methods: &'static [Method],
    pub pattern: PathPattern,
    pub handler: Handler,
}

impl Route {
    fn new(methods: &'static [Method], pattern: &'static str, handler: Handler) -> Route {
        Route {
            methods,
            pattern: PathPattern::parse(pattern),
            handler,
        }
    }
}

const GET: &[Method] = &[Method::GET];
const POST: &[Method] = &[Method::POST];
const UPDATE: &[Method] = &[Method::PUT, Method::PATCH];
const DELETE: &[Method] = &[Method::DELETE];

/// What a single request turned into.
#[derive(Debug)]
pub enum DispatchOutcome {
    Handled(handlers::HandlerResponse),
    Failed(HandlerError),
    Unmatched,
}

pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        RouteTable { routes }
    }

    pub fn catalog_routes() -> Self {
        RouteTable::new(vec![
            Route::new(GET, "/artists", handlers::get_artists),
            Route::new(POST, "/artists", handlers::post_artist),
            Route::new(GET, "/artists/{artistId}/albums", handlers::get_artist_albums),
            Route::new(POST, "/artists/{artistId}/albums", handlers::post_album),
            Route::new(GET, "/artists/{artistId}/songs", handlers::get_artist_songs),
            Route::new(GET, "/artists/{artistId}", handlers::get_artist),
            Route::new(UPDATE, "/artists/{artistId}", handlers::put_artist),
            Route::new(DELETE, "/artists/{artistId}", handlers::delete_artist),
            Route::new(GET, "/albums/{albumId}/songs", handlers::get_album_songs),
            Route::new(POST, "/albums/{albumId}/songs", handlers::post_song),
            Route::new(GET, "/albums/{albumId}", handlers::get_album),
            Route::new(UPDATE, "/albums/{albumId}", handlers::put_album),
            Route::new(DELETE, "/albums/{albumId}", handlers::delete_album),
            Route::new(
                GET,
                "/trackNumbers/{trackNumber}/songs",
                handlers::get_track_number_songs,
            ),
            Route::new(GET, "/songs/{songId}", handlers::get_song),
            Route::new(UPDATE, "/songs/{songId}", handlers::put_song),
            Route::new(DELETE, "/songs/{songId}", handlers::delete_song),
        ])
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn dispatch(
        &self,
        catalog: &mut Catalog,
        policy: &LegacyPolicy,
        method: &Method,
        path: &str,
        body: Option<&Fields>,
    ) -> DispatchOutcome {
        let matched = self.routes.iter().find_map(|route| {
            if !route.methods.contains(method) {
                return None;
            }
            route.pattern.matches(path).map(|params| (route, params))
        });

        let (route, params) = match matched {
            Some(x) => x,
            None => {
                debug!("No route for {} {}", method, path);
                return DispatchOutcome::Unmatched;
            }
        };

        let ctx = HandlerContext {
            catalog,
            params: &params,
            body,
            policy,
        };
        match (route.handler)(ctx) {
            Ok(response) => DispatchOutcome::Handled(response),
            Err(err) => DispatchOutcome::Failed(err),
        }
    }
}

/// Final HTTP shape of a dispatched request.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchResponse {
    pub status: StatusCode,
    pub body: DispatchBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DispatchBody {
    Json(Value),
    Text(&'static str),
}

impl DispatchOutcome {
    /// Maps handler errors onto the wire. Not-found and, under the legacy
    /// policy, validation failures both become 404 with a `message` body.
    pub fn into_dispatch_response(self, policy: &LegacyPolicy) -> DispatchResponse {
        let error_body = |err: &HandlerError| DispatchBody::Json(json!({ "message": err.to_string() }));
        match self {
            DispatchOutcome::Handled(response) => DispatchResponse {
                status: response.status,
                body: DispatchBody::Json(response.body),
            },
            DispatchOutcome::Unmatched => DispatchResponse {
                status: StatusCode::NOT_FOUND,
                body: DispatchBody::Text(ENDPOINT_NOT_FOUND),
            },
            DispatchOutcome::Failed(err) => {
                let status = match &err {
                    HandlerError::NotFound(_) => StatusCode::NOT_FOUND,
                    HandlerError::Validation(_) if policy.validation_as_not_found => {
                        StatusCode::NOT_FOUND
                    }
                    HandlerError::Validation(_) => StatusCode::BAD_REQUEST,
                    HandlerError::Serialization(_) | HandlerError::Store(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                DispatchResponse {
                    status,
                    body: error_body(&err),
                }
            }
        }
    }
}

impl IntoResponse for DispatchResponse {
    fn into_response(self) -> Response {
        match self.body {
            DispatchBody::Json(value) => (self.status, Json(value)).into_response(),
            DispatchBody::Text(text) => (
                self.status,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                text,
            )
                .into_response(),
        }
    }
}
