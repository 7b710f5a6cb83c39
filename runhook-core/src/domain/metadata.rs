//! Metadata server addresses

/// Token endpoint of the default service account on the instance metadata server
pub const METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

/// Header the metadata server requires on every request
pub const METADATA_FLAVOR_HEADER: &str = "Metadata-Flavor";

/// Only accepted value for [`METADATA_FLAVOR_HEADER`]
pub const METADATA_FLAVOR_VALUE: &str = "Google";
