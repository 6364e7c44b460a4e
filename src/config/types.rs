//! Option types for the navbar configuration.
//!
//! Several options accept either a value or `false` ("turn this off"), and
//! distinguish both from leaving the option out entirely. Those are modelled
//! as small enums that deserialize from `bool | value`.

use crate::context::UrlTarget;
use serde::{Deserialize, Serialize};

/// Colour scheme of the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Dark navbar (`navbar-inverse`).
    Inverse,
}

impl Variant {
    /// Parse a variant from a string. Unrecognized values yield `None`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "inverse" => Some(Self::Inverse),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inverse => "inverse",
        }
    }
}

/// Edge of the viewport a navbar is pinned or attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Top,
    Bottom,
}

impl Position {
    /// Parse a position from a string. Unrecognized values yield `None`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Wire form shared by the `bool | value` options.
#[doc(hidden)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagOr<T> {
    Flag(bool),
    Value(T),
}

/// A scalar written where text is expected; numbers are kept as their
/// decimal text so `brand: 2024` means the string "2024".
#[doc(hidden)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarText {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl From<ScalarText> for String {
    fn from(scalar: ScalarText) -> Self {
        match scalar {
            ScalarText::Int(n) => n.to_string(),
            ScalarText::UInt(n) => n.to_string(),
            ScalarText::Float(n) => n.to_string(),
            ScalarText::Text(s) => s,
        }
    }
}

/// Brand content setting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<FlagOr<ScalarText>>", into = "Option<FlagOr<ScalarText>>")]
pub enum BrandSetting {
    /// Not configured: the application's display name is used.
    #[default]
    Unset,
    /// `false`: no brand element is rendered.
    Disabled,
    /// Brand markup, inserted verbatim.
    Markup(String),
}

impl BrandSetting {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl From<Option<FlagOr<ScalarText>>> for BrandSetting {
    fn from(raw: Option<FlagOr<ScalarText>>) -> Self {
        match raw {
            None | Some(FlagOr::Flag(true)) => Self::Unset,
            Some(FlagOr::Flag(false)) => Self::Disabled,
            Some(FlagOr::Value(markup)) => Self::Markup(markup.into()),
        }
    }
}

impl From<BrandSetting> for Option<FlagOr<ScalarText>> {
    fn from(setting: BrandSetting) -> Self {
        match setting {
            BrandSetting::Unset => None,
            BrandSetting::Disabled => Some(FlagOr::Flag(false)),
            BrandSetting::Markup(markup) => Some(FlagOr::Value(ScalarText::Text(markup))),
        }
    }
}

/// Brand link target setting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<FlagOr<UrlTarget>>", into = "Option<FlagOr<UrlTarget>>")]
pub enum UrlSetting {
    /// Not configured: the application's home URL is used.
    #[default]
    Unset,
    /// `false`: the brand is rendered as a `span` instead of a link.
    Disabled,
    Url(UrlTarget),
}

impl UrlSetting {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl From<Option<FlagOr<UrlTarget>>> for UrlSetting {
    fn from(raw: Option<FlagOr<UrlTarget>>) -> Self {
        match raw {
            None | Some(FlagOr::Flag(true)) => Self::Unset,
            Some(FlagOr::Flag(false)) => Self::Disabled,
            Some(FlagOr::Value(target)) => Self::Url(target),
        }
    }
}

impl From<UrlSetting> for Option<FlagOr<UrlTarget>> {
    fn from(setting: UrlSetting) -> Self {
        match setting {
            UrlSetting::Unset => None,
            UrlSetting::Disabled => Some(FlagOr::Flag(false)),
            UrlSetting::Url(target) => Some(FlagOr::Value(target)),
        }
    }
}

/// Fixed/static placement setting.
///
/// The raw string is kept so an unrecognized value can be reported by
/// `validate` while still contributing nothing at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<FlagOr<ScalarText>>", into = "Option<FlagOr<ScalarText>>")]
pub enum PositionSetting {
    /// Absent or `false`.
    #[default]
    Disabled,
    Value(String),
}

impl PositionSetting {
    pub fn top() -> Self {
        Self::Value(Position::Top.as_str().to_string())
    }

    pub fn bottom() -> Self {
        Self::Value(Position::Bottom.as_str().to_string())
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// The recognized position, if any.
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Disabled => None,
            Self::Value(raw) => Position::from_str(raw),
        }
    }
}

impl From<Option<FlagOr<ScalarText>>> for PositionSetting {
    fn from(raw: Option<FlagOr<ScalarText>>) -> Self {
        match raw {
            // `true` names no edge.
            None | Some(FlagOr::Flag(_)) => Self::Disabled,
            Some(FlagOr::Value(raw)) => Self::Value(raw.into()),
        }
    }
}

impl From<PositionSetting> for Option<FlagOr<ScalarText>> {
    fn from(setting: PositionSetting) -> Self {
        match setting {
            PositionSetting::Disabled => Some(FlagOr::Flag(false)),
            PositionSetting::Value(raw) => Some(FlagOr::Value(ScalarText::Text(raw))),
        }
    }
}
