//! Language and script validation for bibliographic items.
//!
//! The base item accepts any well-formed ISO 639-1 language code and ISO 15924
//! script code. GB items narrow both sets. Validators are plain functions
//! collected in [`ItemHooks`](crate::bibliographic_item::ItemHooks) and invoked
//! by the constructing routine.

use crate::error::{BibError, Result};

/// Languages accepted on GB items.
pub const GB_LANGUAGES: &[&str] = &["en", "zh"];

/// Scripts accepted on GB items.
pub const GB_SCRIPTS: &[&str] = &["Latn", "Hans"];

/// Signature shared by all language and script validators.
pub type Validator = fn(&[String]) -> Result<()>;

/// Accept any two-letter lowercase language code.
///
/// # Errors
///
/// Returns [`BibError::InvalidLanguage`] naming the first malformed value.
pub fn check_language(language: &[String]) -> Result<()> {
    for lang in language {
        let well_formed = lang.len() == 2 && lang.bytes().all(|b| b.is_ascii_lowercase());
        if !well_formed {
            return Err(BibError::InvalidLanguage(lang.clone()));
        }
    }
    Ok(())
}

/// Accept any four-letter, title-cased script code.
///
/// # Errors
///
/// Returns [`BibError::InvalidScript`] naming the first malformed value.
pub fn check_script(script: &[String]) -> Result<()> {
    for scr in script {
        let bytes = scr.as_bytes();
        let well_formed = bytes.len() == 4
            && bytes[0].is_ascii_uppercase()
            && bytes[1..].iter().all(u8::is_ascii_lowercase);
        if !well_formed {
            return Err(BibError::InvalidScript(scr.clone()));
        }
    }
    Ok(())
}

/// Accept only `en` and `zh`.
///
/// Fails fast on the first value outside the set.
///
/// # Errors
///
/// Returns [`BibError::InvalidLanguage`] naming the offending value.
pub fn check_gb_language(language: &[String]) -> Result<()> {
    match language
        .iter()
        .find(|lang| !GB_LANGUAGES.contains(&lang.as_str()))
    {
        Some(lang) => Err(BibError::InvalidLanguage(lang.clone())),
        None => Ok(()),
    }
}

/// Accept only `Latn` and `Hans`.
///
/// # Errors
///
/// Returns [`BibError::InvalidScript`] naming the offending value.
pub fn check_gb_script(script: &[String]) -> Result<()> {
    match script
        .iter()
        .find(|scr| !GB_SCRIPTS.contains(&scr.as_str()))
    {
        Some(scr) => Err(BibError::InvalidScript(scr.clone())),
        None => Ok(()),
    }
}
