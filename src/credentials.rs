use std::{
    io::{self, BufReader, BufWriter},
    path::PathBuf,
};

use fs_err::File;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

pub const DEFAULT_CREDENTIALS_PATH: &str = "./ignore/credentials.json";

#[derive(Debug, TypedBuilder, Serialize, Deserialize)]
pub struct Credentials {
    pub gr_user_id: GrUserId,
}

/// Value of the `gr_user_id` cookie, a site-issued tracking identifier.
/// Douban may reject or degrade requests without it, so the operator has to
/// copy it out of a logged-in browser session.
#[derive(Clone, Debug, derive_more::From, derive_more::Display, Serialize, Deserialize)]
pub struct GrUserId(String);

impl Credentials {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, CredentialsLoadError> {
        Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
    }

    pub fn save(&self, path: impl Into<PathBuf>) -> std::io::Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(writer, self)?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialsLoadError {
    #[error(
        "Credentials file was not found.  \
         Create a JSON file {{\"gr_user_id\": \"...\"}} with the cookie value from your browser."
    )]
    NotFound,
    #[error("An I/O error occurred when loading the credentials: {0:?}")]
    IOError(io::Error),
    #[error("The credentials json file is corrupted and could not be loaded: {0:?}")]
    JsonError(#[from] serde_json::Error),
}
impl From<io::Error> for CredentialsLoadError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            _ => Self::IOError(e),
        }
    }
}
