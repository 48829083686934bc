//! Field-by-field overlay of decoded documents onto a record.
//!
//! serde has no "decode into an existing value" mode, so a record is
//! snapshotted into a [`serde_json::Value`], the document is merged on top,
//! and the result is deserialized back. Objects merge recursively; arrays
//! and scalars replace; `null` keeps what was there.
//!
//! Because every step goes through the record's own `Serialize` and
//! `Deserialize`, fields those impls do not carry are not preserved:
//! - `#[serde(skip)]` / `skip_deserializing` fields are reset to `Default`
//!   on every file load.
//! - Fields dropped by `skip_serializing_if` without a matching `default`
//!   make the record fail to round-trip, reported as [`OverlayError::RoundTrip`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deep merge `overlay` into `base`, with `overlay` taking precedence.
pub fn deep_merge(base: &mut Value, overlay: Value) {
	match (base, overlay) {
		(Value::Object(base_map), Value::Object(overlay_map)) => {
			for (key, overlay_value) in overlay_map {
				match base_map.get_mut(&key) {
					Some(base_value) => deep_merge(base_value, overlay_value),
					None => {
						base_map.insert(key, overlay_value);
					}
				}
			}
		}
		(_, Value::Null) => {}
		(base, overlay) => *base = overlay,
	}
}

/// Overlay a decoded document onto `record`.
///
/// Fields the document does not mention keep their current value, subject
/// to the serde limits in the module docs. `record` is left untouched if
/// any step fails.
pub fn overlay_document<T>(record: &mut T, document: Value) -> Result<(), OverlayError>
where
	T: Serialize + DeserializeOwned,
{
	if document.is_null() {
		return Ok(());
	}

	let mut merged = serde_json::to_value(&*record).map_err(OverlayError::Snapshot)?;
	deep_merge(&mut merged, document);
	match serde_json::from_value(merged) {
		Ok(updated) => {
			*record = updated;
			Ok(())
		}
		Err(err) => Err(blame(record, err)),
	}
}

/// Decide whether a failed apply is the document's fault or the record's.
fn blame<T>(record: &T, apply_err: serde_json::Error) -> OverlayError
where
	T: Serialize + DeserializeOwned,
{
	let round_trip = serde_json::to_value(record)
		.and_then(serde_json::from_value::<T>)
		.err();
	match round_trip {
		Some(err) => OverlayError::RoundTrip(err),
		None => OverlayError::Apply(apply_err),
	}
}

/// Which step of [`overlay_document`] failed.
#[derive(Debug)]
pub enum OverlayError {
	/// The record could not be represented as a document.
	Snapshot(serde_json::Error),
	/// The record's own snapshot does not deserialize back into it.
	RoundTrip(serde_json::Error),
	/// The merged document does not fit the record's shape.
	Apply(serde_json::Error),
}
