//! Shareable studio links
//!
//! A share link carries brightness (`b`) and temperature (`t`) as query
//! parameters on the studio path, e.g. `/studio?b=80&t=4500`.

use serde_json::Value;

use crate::constants::{brightness, share, temperature};
use crate::error::{LightError, Result};
use crate::studio::settings::LightSettings;

/// Validated light values from a share link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareParams {
    pub brightness: i64,
    pub temperature: i64,
}

impl ShareParams {
    fn checked(brightness: i64, temperature: i64) -> Option<Self> {
        let b_ok = (brightness::MIN_PERCENT as i64..=brightness::MAX_PERCENT as i64).contains(&brightness);
        let t_ok = (temperature::MIN_KELVIN as i64..=temperature::MAX_KELVIN as i64).contains(&temperature);
        (b_ok && t_ok).then_some(Self {
            brightness,
            temperature,
        })
    }

    /// Studio path that reopens these values
    pub fn studio_path(&self) -> String {
        format!(
            "{}?{}={}&{}={}",
            share::STUDIO_PATH,
            share::BRIGHTNESS_PARAM,
            self.brightness,
            share::TEMPERATURE_PARAM,
            self.temperature
        )
    }
}

/// Full share URL for the current settings
pub fn generate_share_url(origin: &str, settings: &LightSettings) -> String {
    share_url_at(origin, share::STUDIO_PATH, settings)
}

/// Share URL pointing at a studio mounted under `studio_path`
pub fn share_url_at(origin: &str, studio_path: &str, settings: &LightSettings) -> String {
    format!(
        "{}{}?{}={}&{}={}",
        origin.trim_end_matches('/'),
        studio_path,
        share::BRIGHTNESS_PARAM,
        settings.brightness,
        share::TEMPERATURE_PARAM,
        settings.temperature
    )
}

/// First decoded value of `name` in a query string; a leading `?` is ignored
fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Parse the leading integer of `raw`, ignoring anything after the digits
///
/// Leading whitespace and a single sign are allowed; `"80abc"` reads as 80
/// and `"abc"` as nothing.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Read brightness and temperature from a share link query
///
/// Returns `None` unless both parameters are present, non-empty, numeric
/// and in range.
pub fn parse_share_query(query: &str) -> Option<ShareParams> {
    let b = query_param(query, share::BRIGHTNESS_PARAM).filter(|v| !v.is_empty())?;
    let t = query_param(query, share::TEMPERATURE_PARAM).filter(|v| !v.is_empty())?;
    ShareParams::checked(parse_leading_int(&b)?, parse_leading_int(&t)?)
}

/// Resolve an incoming share link to the studio path it should redirect to
pub fn share_redirect(query: &str) -> Result<String> {
    let b = query_param(query, share::BRIGHTNESS_PARAM).filter(|v| !v.is_empty());
    let t = query_param(query, share::TEMPERATURE_PARAM).filter(|v| !v.is_empty());
    let (Some(b), Some(t)) = (b, t) else {
        return Err(LightError::MissingShareParameters);
    };

    let params = parse_leading_int(&b)
        .zip(parse_leading_int(&t))
        .and_then(|(b, t)| ShareParams::checked(b, t))
        .ok_or(LightError::InvalidShareParameters)?;
    Ok(params.studio_path())
}

/// Build a share path from a JSON body with numeric `brightness` and `temperature`
pub fn share_link_for(body: &Value) -> Result<String> {
    let b = body.get("brightness").and_then(Value::as_f64);
    let t = body.get("temperature").and_then(Value::as_f64);

    match (b, t) {
        (Some(b), Some(t))
            if (brightness::MIN_PERCENT..=brightness::MAX_PERCENT).contains(&b)
                && (temperature::MIN_KELVIN..=temperature::MAX_KELVIN).contains(&t) =>
        {
            Ok(format!(
                "{}?{}={b}&{}={t}",
                share::STUDIO_PATH,
                share::BRIGHTNESS_PARAM,
                share::TEMPERATURE_PARAM
            ))
        }
        _ => Err(LightError::InvalidShareParameters),
    }
}
