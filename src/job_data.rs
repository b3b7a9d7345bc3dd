/// Data structures exchanged with the job scrape backend
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Backend-assigned identifier. The API sends integers; strings are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> RecordId {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => RecordId(n.to_string()),
            Raw::Text(s) => RecordId(s),
        })
    }
}

/// A job posting, either freshly extracted (no id) or saved under an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub pay: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub platform: Option<String>,
}

/// Text field that tolerates non-string values: `null` is absent, anything else is kept as its JSON text
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

impl JobRecord {
    /// True when the extraction produced none of the job fields
    pub fn is_blank(&self) -> bool {
        [
            &self.title,
            &self.company,
            &self.location,
            &self.job_type,
            &self.pay,
            &self.platform,
        ]
        .iter()
        .all(|field| field.as_deref().map_or(true, str::is_empty))
    }
}

/// Body of `POST /jobs/`: the job fields plus the owner's email
#[derive(Debug, Serialize)]
pub struct SaveJobRequest<'a> {
    pub title: Option<&'a str>,
    pub company: Option<&'a str>,
    pub location: Option<&'a str>,
    pub job_type: Option<&'a str>,
    pub pay: Option<&'a str>,
    pub platform: Option<&'a str>,
    pub email: &'a str,
}

impl<'a> SaveJobRequest<'a> {
    pub fn new(job: &'a JobRecord, email: &'a str) -> SaveJobRequest<'a> {
        SaveJobRequest {
            title: job.title.as_deref(),
            company: job.company.as_deref(),
            location: job.location.as_deref(),
            job_type: job.job_type.as_deref(),
            pay: job.pay.as_deref(),
            platform: job.platform.as_deref(),
            email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExtractionRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub password2: String,
}

/// Identity returned by both `/login/` and `/register/`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthGrant {
    pub email: String,
    pub id: RecordId,
}
