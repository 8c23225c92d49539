//! Error type shared by every stage of the pipeline.

use std::io;
use thiserror::Error;

/// Every variant is terminal for the invocation; nothing is retried.
#[derive(Debug, Error)]
pub enum UrlSplitError {
    /// Input is not a syntactically valid RFC 3986 URI reference.
    #[error("invalid URL {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: fluent_uri::error::ParseError,
    },

    #[error("unable to read URL from stdin: {0}")]
    InputRead(#[source] io::Error),

    /// No positional URL while the input policy requires one.
    #[error("a URL argument is required")]
    MissingUrl,

    #[error("one of ('-e', '-k', '-f') must be specified")]
    NoModeSelected,

    #[error("no such URL component named {0:?}")]
    NoSuchKey(String),

    #[error("template syntax error: {0}")]
    TemplateSyntax(#[source] minijinja::Error),

    #[error("template execution failed: {0}")]
    TemplateExecution(#[source] minijinja::Error),

    #[error("failed to write output: {0}")]
    OutputWrite(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, UrlSplitError>;
