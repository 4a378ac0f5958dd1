use poem_openapi::Object;

/// Response model for the service info endpoint
#[derive(Object, Debug)]
pub struct ServiceInfoResponse {
    /// Name of the service
    pub service: String,

    /// Version of the service
    pub version: String,

    /// Timestamp of the response (ISO 8601 format)
    pub timestamp: String,
}

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}
