use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use models::ReportKind;
use sea_orm::DbErr;
use thiserror::Error;

use crate::config::ConfigError;

/// Failures while answering a report request
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to query {kind}: {source}")]
    Query {
        kind: ReportKind,
        #[source]
        source: DbErr,
    },
    #[error("failed to render {kind}: {source}")]
    Render {
        kind: ReportKind,
        #[source]
        source: askama::Error,
    },
}

impl AppError {
    pub fn query(kind: ReportKind) -> impl FnOnce(DbErr) -> Self {
        move |source| Self::Query { kind, source }
    }

    pub fn render(kind: ReportKind) -> impl FnOnce(askama::Error) -> Self {
        move |source| Self::Render { kind, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("{self}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

/// Failures that stop the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to open database: {0}")]
    Database(#[from] DbErr),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
