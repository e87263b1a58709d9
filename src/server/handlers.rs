//! One handler per (resource, operation).
//!
//! Handlers get the already-extracted path parameters and the decoded body
//! and produce either a status + JSON payload or a `HandlerError`. They never
//! write to the catalog before their inputs have been validated.

use super::config::LegacyPolicy;
use super::router::RouteParams;
use crate::catalog_store::{
    validate_name, validate_song, Catalog, Fields, QueryResolver, StoreError, ValidationError,
};
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

pub const BODY_ERROR_MESSAGE: &str = "Something is wrong with the body";
pub const DELETED_MESSAGE: &str = "Successfully deleted";

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Something is wrong with the body")]
    Validation(#[source] ValidationError),
    #[error("{0}")]
    NotFound(String),
    #[error("Could not serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("{0}")]
    Store(StoreError),
}

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ArtistNotFound(_) => Resource::Artist.not_found(),
            StoreError::AlbumNotFound(_) => Resource::Album.not_found(),
            StoreError::SongNotFound(_) => Resource::Song.not_found(),
            StoreError::IdsExhausted(_) => HandlerError::Store(err),
        }
    }
}

impl From<ValidationError> for HandlerError {
    fn from(err: ValidationError) -> Self {
        debug!("Body validation failed: {}", err);
        HandlerError::Validation(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HandlerResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub type HandlerResult = Result<HandlerResponse, HandlerError>;

pub struct HandlerContext<'a> {
    pub catalog: &'a mut Catalog,
    pub params: &'a RouteParams,
    pub body: Option<&'a Fields>,
    pub policy: &'a LegacyPolicy,
}

impl HandlerContext<'_> {
    fn resolver(&self) -> QueryResolver<'_> {
        QueryResolver::new(&*self.catalog)
            .omit_empty_relations(self.policy.omit_empty_relations)
            .album_artist_with_songs_only(self.policy.album_artist_with_songs_only)
    }
}

pub type Handler = fn(HandlerContext<'_>) -> HandlerResult;

#[derive(Debug, Clone, Copy)]
enum Resource {
    Artist,
    Album,
    Song,
}

impl Resource {
    fn not_found(self) -> HandlerError {
        let name = match self {
            Resource::Artist => "Artist",
            Resource::Album => "Album",
            Resource::Song => "Song",
        };
        HandlerError::NotFound(format!("{} not found", name))
    }
}

fn no_items_found(items: &str) -> HandlerError {
    HandlerError::NotFound(format!("No {} found", items))
}

fn respond<T: Serialize>(status: StatusCode, payload: &T) -> HandlerResult {
    Ok(HandlerResponse {
        status,
        body: serde_json::to_value(payload)?,
    })
}

fn deleted() -> HandlerResult {
    Ok(HandlerResponse {
        status: StatusCode::OK,
        body: json!({ "message": DELETED_MESSAGE }),
    })
}

/// Path ids that do not parse behave like ids that do not exist.
fn id_param(params: &RouteParams, name: &str, resource: Resource) -> Result<u64, HandlerError> {
    params
        .get(name)
        .and_then(|raw| raw.parse::<u64>().ok())
        .ok_or_else(|| resource.not_found())
}

fn list<T: Serialize>(items: Vec<T>, what: &str, policy: &LegacyPolicy) -> HandlerResult {
    if items.is_empty() && policy.empty_list_is_not_found {
        return Err(no_items_found(what));
    }
    respond(StatusCode::OK, &items)
}

// =============================================================================
// Artists
// =============================================================================

pub fn get_artists(ctx: HandlerContext<'_>) -> HandlerResult {
    respond(StatusCode::OK, &ctx.catalog.artists())
}

pub fn get_artist(ctx: HandlerContext<'_>) -> HandlerResult {
    let id = id_param(ctx.params, "artistId", Resource::Artist)?;
    let artist = ctx
        .catalog
        .get_artist(id)
        .ok_or_else(|| Resource::Artist.not_found())?;
    respond(StatusCode::OK, &ctx.resolver().enrich_artist(artist))
}

pub fn post_artist(ctx: HandlerContext<'_>) -> HandlerResult {
    let name = validate_name(ctx.body)?;
    let artist = ctx.catalog.create_artist(name)?;
    respond(StatusCode::CREATED, &artist)
}

pub fn put_artist(ctx: HandlerContext<'_>) -> HandlerResult {
    let id = id_param(ctx.params, "artistId", Resource::Artist)?;
    if ctx.catalog.get_artist(id).is_none() {
        return Err(Resource::Artist.not_found());
    }
    let name = validate_name(ctx.body)?;
    let artist = ctx.catalog.update_artist(id, name)?;
    respond(StatusCode::OK, &artist)
}

pub fn delete_artist(ctx: HandlerContext<'_>) -> HandlerResult {
    let id = id_param(ctx.params, "artistId", Resource::Artist)?;
    if !ctx.catalog.delete_artist(id) {
        return Err(Resource::Artist.not_found());
    }
    deleted()
}

// =============================================================================
// Albums
// =============================================================================

pub fn get_artist_albums(ctx: HandlerContext<'_>) -> HandlerResult {
    let artist_id = id_param(ctx.params, "artistId", Resource::Artist)?;
    if ctx.catalog.get_artist(artist_id).is_none() {
        return Err(Resource::Artist.not_found());
    }
    let albums = ctx.resolver().albums_by_artist(artist_id);
    list(albums, "albums", ctx.policy)
}

pub fn get_album(ctx: HandlerContext<'_>) -> HandlerResult {
    let id = id_param(ctx.params, "albumId", Resource::Album)?;
    let album = ctx
        .catalog
        .get_album(id)
        .ok_or_else(|| Resource::Album.not_found())?;
    respond(StatusCode::OK, &ctx.resolver().enrich_album(album))
}

pub fn post_album(ctx: HandlerContext<'_>) -> HandlerResult {
    let artist_id = id_param(ctx.params, "artistId", Resource::Artist)?;
    if ctx.catalog.get_artist(artist_id).is_none() {
        return Err(Resource::Artist.not_found());
    }
    let name = validate_name(ctx.body)?;
    let album = ctx.catalog.create_album(artist_id, name)?;
    respond(StatusCode::CREATED, &album)
}

pub fn put_album(ctx: HandlerContext<'_>) -> HandlerResult {
    let id = id_param(ctx.params, "albumId", Resource::Album)?;
    if ctx.catalog.get_album(id).is_none() {
        return Err(Resource::Album.not_found());
    }
    let name = validate_name(ctx.body)?;
    let album = ctx.catalog.update_album(id, name)?;
    respond(StatusCode::OK, &album)
}

pub fn delete_album(ctx: HandlerContext<'_>) -> HandlerResult {
    let id = id_param(ctx.params, "albumId", Resource::Album)?;
    if !ctx.catalog.delete_album(id) {
        return Err(Resource::Album.not_found());
    }
    deleted()
}

// =============================================================================
// Songs
// =============================================================================

pub fn get_artist_songs(ctx: HandlerContext<'_>) -> HandlerResult {
    let artist_id = id_param(ctx.params, "artistId", Resource::Artist)?;
    if ctx.catalog.get_artist(artist_id).is_none() {
        return Err(Resource::Artist.not_found());
    }
    let resolver = ctx.resolver();
    if resolver.albums_by_artist(artist_id).is_empty() && ctx.policy.empty_list_is_not_found {
        return Err(no_items_found("albums"));
    }
    list(resolver.songs_by_artist(artist_id), "songs", ctx.policy)
}

pub fn get_album_songs(ctx: HandlerContext<'_>) -> HandlerResult {
    let album_id = id_param(ctx.params, "albumId", Resource::Album)?;
    if ctx.catalog.get_album(album_id).is_none() {
        return Err(Resource::Album.not_found());
    }
    let songs = ctx.resolver().songs_by_album(album_id);
    list(songs, "songs", ctx.policy)
}

pub fn get_track_number_songs(ctx: HandlerContext<'_>) -> HandlerResult {
    let track_number = ctx
        .params
        .get("trackNumber")
        .and_then(|raw| raw.parse::<u32>().ok())
        .ok_or_else(|| no_items_found("songs"))?;
    let songs = ctx.resolver().songs_by_track_number(track_number);
    list(songs, "songs", ctx.policy)
}

pub fn get_song(ctx: HandlerContext<'_>) -> HandlerResult {
    let id = id_param(ctx.params, "songId", Resource::Song)?;
    let song = ctx
        .catalog
        .get_song(id)
        .ok_or_else(|| Resource::Song.not_found())?;
    respond(StatusCode::OK, &ctx.resolver().enrich_song(song))
}

pub fn post_song(ctx: HandlerContext<'_>) -> HandlerResult {
    let album_id = id_param(ctx.params, "albumId", Resource::Album)?;
    if ctx.catalog.get_album(album_id).is_none() {
        return Err(Resource::Album.not_found());
    }
    let content = validate_song(ctx.body)?;
    let song = ctx.catalog.create_song(album_id, content)?;
    respond(StatusCode::CREATED, &song)
}

pub fn put_song(ctx: HandlerContext<'_>) -> HandlerResult {
    let id = id_param(ctx.params, "songId", Resource::Song)?;
    if ctx.catalog.get_song(id).is_none() {
        return Err(Resource::Song.not_found());
    }
    let content = validate_song(ctx.body)?;
    let song = ctx.catalog.update_song(id, content)?;
    respond(StatusCode::OK, &song)
}

pub fn delete_song(ctx: HandlerContext<'_>) -> HandlerResult {
    let id = id_param(ctx.params, "songId", Resource::Song)?;
    if !ctx.catalog.delete_song(id) {
        return Err(Resource::Song.not_found());
    }
    deleted()
}
