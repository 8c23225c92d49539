//! URL decomposition into named string variables.
//!
//! The eleven fixed variables always come first, in a fixed order, followed by
//! one `URL_QUERY_<name>` per distinct query parameter, sorted by name.

mod authority;
mod parts;
mod path;
mod query;
mod vars;

pub use authority::AuthorityParts;
pub use parts::UrlParts;
pub use path::{decode_component, request_uri};
pub use query::QueryParams;
pub use vars::{Var, VarSet};

use fluent_uri::UriRef;

/// Prefix of the per-parameter variables appended after the fixed set.
pub const QUERY_PARAM_PREFIX: &str = "URL_QUERY_";

/// Names of the fixed variables, in output order.
pub const FIXED_NAMES: [&str; 11] = [
    "URL_SCHEME",
    "URL_HOST",
    "URL_HOSTNAME",
    "URL_PORT",
    "URL_USERNAME",
    "URL_PASSWORD",
    "URL_URI",
    "URL_PATH",
    "URL_ESCAPED_PATH",
    "URL_QUERY",
    "URL_FRAGMENT",
];

/// Builds the variable set for a parsed URI reference. Never fails.
pub fn decompose(uri: &UriRef<&str>) -> VarSet {
    decompose_parts(&UrlParts::from_uri(uri))
}

/// Builds the variable set from raw component slices.
pub fn decompose_parts(parts: &UrlParts<'_>) -> VarSet {
    let authority = parts
        .authority
        .map(AuthorityParts::split)
        .unwrap_or_default();
    let params = QueryParams::from_query(parts.query);

    let fixed = [
        parts.scheme.unwrap_or_default().to_string(),
        authority.host_port.to_string(),
        authority.hostname().to_string(),
        authority.port.unwrap_or_default().to_string(),
        authority.username(),
        authority.password().unwrap_or_default(),
        request_uri(parts),
        decode_component(parts.path),
        parts.path.to_string(),
        params.encode(),
        parts.fragment.map(decode_component).unwrap_or_default(),
    ];

    let mut vars = VarSet::with_capacity(FIXED_NAMES.len() + params.len());
    for (name, value) in FIXED_NAMES.iter().zip(fixed) {
        vars.push(*name, value);
    }
    for (name, value) in params.first_values() {
        vars.push(format!("{QUERY_PARAM_PREFIX}{name}"), value);
    }

    tracing::trace!(
        fixed = FIXED_NAMES.len(),
        query_params = params.len(),
        "built variable set"
    );
    vars
}
