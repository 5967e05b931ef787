//! Face regions and the identity records attached to them.
//!
//! These types mirror the notification wire format exactly: a face box is
//! the 4-element array `[top, right, bottom, left]`, and the identity record
//! (`cob`, "control object") is a flat map of free-text fields.

use serde::{Deserialize, Serialize};

/// Placeholder the protocol uses for identity fields with no known value.
pub const UNKNOWN_FIELD: &str = "-";

// ---------------------------------------------------------------------------
// FaceBox
// ---------------------------------------------------------------------------

/// A face bounding box in image pixel space.
///
/// Serialized as `[top, right, bottom, left]`, in that order. Coordinate
/// ordering is not validated: boxes are carried as opaque data, exactly as
/// received from the recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i64; 4]", into = "[i64; 4]")]
pub struct FaceBox {
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
    pub left: i64,
}

impl From<[i64; 4]> for FaceBox {
    fn from([top, right, bottom, left]: [i64; 4]) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl From<FaceBox> for [i64; 4] {
    fn from(b: FaceBox) -> Self {
        [b.top, b.right, b.bottom, b.left]
    }
}

// ---------------------------------------------------------------------------
// ControlObject
// ---------------------------------------------------------------------------

/// The mutable identity record for one detected face.
///
/// All fields are free text with no validation invariants; the operator may
/// edit any of them before submitting. Fields absent on the wire default to
/// [`UNKNOWN_FIELD`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlObject {
    #[serde(default = "unknown_field")]
    pub id: String,
    #[serde(default = "unknown_field")]
    pub passport: String,
    #[serde(default = "unknown_field")]
    pub surname: String,
    #[serde(default = "unknown_field")]
    pub name: String,
    #[serde(default = "unknown_field")]
    pub patronymic: String,
    #[serde(default = "unknown_field")]
    pub sex: String,
    #[serde(default = "unknown_field")]
    pub birthdate: String,
    #[serde(default = "unknown_field")]
    pub phone_num: String,
    #[serde(default = "unknown_field")]
    pub email: String,
    #[serde(default = "unknown_field")]
    pub address: String,
}

fn unknown_field() -> String {
    UNKNOWN_FIELD.to_string()
}

impl Default for ControlObject {
    fn default() -> Self {
        Self {
            id: unknown_field(),
            passport: unknown_field(),
            surname: unknown_field(),
            name: unknown_field(),
            patronymic: unknown_field(),
            sex: unknown_field(),
            birthdate: unknown_field(),
            phone_num: unknown_field(),
            email: unknown_field(),
            address: unknown_field(),
        }
    }
}

// ---------------------------------------------------------------------------
// FaceData
// ---------------------------------------------------------------------------

/// One detected face region: bounding box plus identity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceData {
    #[serde(rename = "box")]
    pub bbox: FaceBox,
    #[serde(default)]
    pub cob: ControlObject,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
