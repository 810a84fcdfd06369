use serde::Deserialize;

/// Body of POST /api/linkedin/connect.
///
/// `method` selects which optional fields are required: "credentials" needs
/// username + password (verificationCode optional), "cookies" needs cookies.
/// Fields default to empty/None so missing input surfaces as a validation
/// error with a precise message instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ConnectRequest {
    #[serde(default)]
    pub email: String,

    /// Display name from the form; accepted but not persisted.
    #[serde(default)]
    pub name: Option<String>,

    /// "credentials" or "cookies"
    #[serde(default)]
    pub method: String,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    /// Second-factor code for a checkpoint resubmission
    #[serde(default, rename = "verificationCode")]
    pub verification_code: Option<String>,

    #[serde(default)]
    pub cookies: Option<String>,
}
