//! Display data carried by an identity provider credential.
//!
//! The credential is a JWT. Only its payload segment is read, and only to show
//! who is signed in; the signature is never checked.

use anyhow::Context;
use base64::{
    engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD},
    Engine as _,
};
use serde::Deserialize;

use crate::profile::{save_profile, ProfileStore, UserProfile};

const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Claims {
    name: Option<String>,
    email: Option<String>,
    picture: Option<String>,
    locale: Option<String>,
}

fn decode_claims(credential: &str) -> anyhow::Result<Claims> {
    let payload = credential
        .split('.')
        .nth(1)
        .context("Credential has no payload segment")?;
    let payload = payload.trim_end_matches('=');
    // Some issuers encode with the standard alphabet
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))
        .context("Credential payload is not base64")?;

    serde_json::from_slice(&bytes).context("Credential payload is not JSON")
}

/// Builds a profile from a credential. A payload that cannot be decoded gives
/// a profile with blank fields rather than an error.
pub fn decode_credential(credential: &str) -> UserProfile {
    let claims = decode_claims(credential).unwrap_or_else(|err| {
        log::error!("Credential decode failed: {err:#}");
        Claims::default()
    });

    UserProfile {
        name: claims.name.unwrap_or_default(),
        email: claims.email.unwrap_or_default(),
        picture: claims.picture.unwrap_or_default(),
        locale: claims.locale.unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
    }
}

pub fn sign_in(store: &mut impl ProfileStore, credential: &str) -> anyhow::Result<UserProfile> {
    let profile = decode_credential(credential);
    save_profile(store, &profile)?;
    log::info!("Signed in as {:?}", profile.name);
    Ok(profile)
}
