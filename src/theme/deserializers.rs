use gpui::{AbsoluteLength, DefiniteLength, Pixels, SharedString, px, rems};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use super::ThemeVariant;

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[SharedString; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(SharedString),
        Many(SmallVec<[SharedString; 1]>),
    }

    match StringOrVec::deserialize(deserializer)? {
        StringOrVec::One(string) => Ok(SmallVec::from_buf([string])),
        StringOrVec::Many(vec) if vec.is_empty() => {
            Err(D::Error::custom("font family list can't be empty."))
        }
        StringOrVec::Many(vec) => Ok(vec),
    }
}

pub fn de_variants<'de, D>(deserializer: D) -> Result<SmallVec<[ThemeVariant; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = SmallVec::<[ThemeVariant; 2]>::deserialize(deserializer)?;

    if value.is_empty() {
        return Err(D::Error::custom(
            "at least one theme variant needs to be provided.",
        ));
    }

    Ok(value)
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(pixels) => Ok(px(pixels)),

        StringOrFloat::String(string) => {
            let Some(string) = string.strip_suffix("px") else {
                return Err(D::Error::custom("expected string to end with 'px'"));
            };

            string
                .trim()
                .parse::<f32>()
                .map(px)
                .map_err(|_| D::Error::custom("could not convert string into pixels"))
        }
    }
}

pub fn de_abs_length<'de, D>(deserializer: D) -> Result<AbsoluteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(num) => Ok(AbsoluteLength::Pixels(px(num))),
        StringOrFloat::String(string) => parse_abs_length(&string).ok_or_else(|| {
            D::Error::custom("expected f32 or string containing a f32 ending with 'rem' or 'px'")
        }),
    }
}

pub fn de_def_length<'de, D>(deserializer: D) -> Result<DefiniteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(num) => Ok(DefiniteLength::Absolute(AbsoluteLength::Pixels(px(num)))),

        StringOrFloat::String(string) => {
            if let Some(value) = string.strip_suffix('%')
                && let Ok(value) = value.trim().parse::<f32>()
            {
                return Ok(DefiniteLength::Fraction(value / 100.));
            }

            parse_abs_length(&string)
                .map(DefiniteLength::Absolute)
                .ok_or_else(|| {
                    D::Error::custom(
                        "expected f32 or string containing a f32 ending with '%', 'rem' or 'px'",
                    )
                })
        }
    }
}

fn parse_abs_length(string: &str) -> Option<AbsoluteLength> {
    if let Some(value) = string.strip_suffix("rem") {
        return value.trim().parse::<f32>().ok().map(|v| AbsoluteLength::Rems(rems(v)));
    }

    if let Some(value) = string.strip_suffix("px") {
        return value.trim().parse::<f32>().ok().map(|v| AbsoluteLength::Pixels(px(v)));
    }

    None
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}
