//! Static manifest server used for local development and the integration tests.

use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use clap::Parser;

#[path = "catalog_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "catalog_server/handlers.rs"]
mod handlers;
use self::handlers::*;
#[path = "catalog_server/runtime.rs"]
mod runtime;

#[derive(Clone)]
struct AppState {
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
