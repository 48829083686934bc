use crate::error::{CodecError, Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Serialization format of a config file, chosen by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
	Json,
	Yaml,
	Toml,
}

impl Format {
	/// Pick the format for `path` from its extension.
	///
	/// Matching is exact and case-sensitive: `json`, `yaml`, `yml`, `toml`.
	pub fn from_path(path: &Path) -> Result<Self> {
		match path.extension().and_then(|ext| ext.to_str()) {
			Some("json") => Ok(Format::Json),
			Some("yaml" | "yml") => Ok(Format::Yaml),
			Some("toml") => Ok(Format::Toml),
			other => Err(Error::UnsupportedExtension {
				ext: other.map(|ext| format!(".{ext}")).unwrap_or_default(),
			}),
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Format::Json => "json",
			Format::Yaml => "yaml",
			Format::Toml => "toml",
		}
	}

	/// Decode a document into a format-neutral tree.
	pub fn decode(&self, content: &str) -> std::result::Result<Value, CodecError> {
		let value: Value = match self {
			Format::Json => serde_json::from_str(content)?,
			Format::Yaml => serde_yaml::from_str(content)?,
			Format::Toml => toml::from_str(content)?,
		};
		Ok(value)
	}

	/// Encode `record` as a complete document.
	///
	/// JSON is pretty-printed with two-space indentation and a trailing newline.
	/// YAML mappings are indented by two spaces, but sequences under a key are
	/// not (`tags:\n- a\n`), which differs from yaml.v3-style `  - a` output.
	pub fn encode<T: Serialize + ?Sized>(
		&self,
		record: &T,
	) -> std::result::Result<String, CodecError> {
		let content = match self {
			Format::Json => {
				let mut content = serde_json::to_string_pretty(record)?;
				content.push('\n');
				content
			}
			Format::Yaml => serde_yaml::to_string(record)?,
			Format::Toml => toml::to_string(record)?,
		};
		Ok(content)
	}
}

impl fmt::Display for Format {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde::Deserialize;
	use serde_json::json;

	#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
	struct Sample {
		a: String,
		b: i64,
	}

	#[test]
	fn test_from_path_known_extensions() {
		assert_eq!(Format::from_path(Path::new("config.json")).unwrap(), Format::Json);
		assert_eq!(Format::from_path(Path::new("config.yaml")).unwrap(), Format::Yaml);
		assert_eq!(Format::from_path(Path::new("config.yml")).unwrap(), Format::Yaml);
		assert_eq!(Format::from_path(Path::new("/etc/app/config.toml")).unwrap(), Format::Toml);
	}

	#[test]
	fn test_from_path_rejects_unknown_extensions() {
		match Format::from_path(Path::new("config.ini")) {
			Err(Error::UnsupportedExtension { ext }) => assert_eq!(ext, ".ini"),
			other => panic!("Expected UnsupportedExtension, got {other:?}"),
		}

		// Case-sensitive
		assert!(Format::from_path(Path::new("config.JSON")).is_err());

		match Format::from_path(Path::new("config")) {
			Err(Error::UnsupportedExtension { ext }) => assert!(ext.is_empty()),
			other => panic!("Expected UnsupportedExtension, got {other:?}"),
		}
	}

	#[test]
	fn test_json_encoding_is_two_space_indented() {
		let sample = Sample {
			a: "example".to_string(),
			b: 1,
		};
		let content = Format::Json.encode(&sample).unwrap();
		assert_eq!(content, "{\n  \"a\": \"example\",\n  \"b\": 1\n}\n");
	}

	#[test]
	fn test_yaml_and_toml_encoding() {
		let sample = Sample {
			a: "x".to_string(),
			b: 2,
		};
		assert_eq!(Format::Yaml.encode(&sample).unwrap(), "a: x\nb: 2\n");
		assert_eq!(Format::Toml.encode(&sample).unwrap(), "a = \"x\"\nb = 2\n");
	}

	#[test]
	fn test_yaml_sequences_are_not_indented() {
		#[derive(Serialize)]
		struct Tagged {
			tags: Vec<String>,
		}

		let tagged = Tagged {
			tags: vec!["a".to_string()],
		};
		assert_eq!(Format::Yaml.encode(&tagged).unwrap(), "tags:\n- a\n");
	}

	#[test]
	fn test_decode_each_format() {
		let expected = json!({"a": "y", "b": 3});
		assert_eq!(Format::Json.decode(r#"{"a": "y", "b": 3}"#).unwrap(), expected);
		assert_eq!(Format::Yaml.decode("a: y\nb: 3\n").unwrap(), expected);
		assert_eq!(Format::Toml.decode("a = \"y\"\nb = 3\n").unwrap(), expected);
	}

	#[test]
	fn test_decode_malformed_content() {
		assert!(Format::Json.decode("{not json").is_err());
		assert!(Format::Yaml.decode("a: [unclosed").is_err());
		assert!(Format::Toml.decode("a = ").is_err());
	}

	#[test]
	fn test_round_trip_through_every_format() {
		let sample = Sample {
			a: "round trip".to_string(),
			b: -7,
		};
		for format in [Format::Json, Format::Yaml, Format::Toml] {
			let content = format.encode(&sample).unwrap();
			let value = format.decode(&content).unwrap();
			let decoded: Sample = serde_json::from_value(value).unwrap();
			assert_eq!(decoded, sample, "round trip through {format}");
		}
	}
}
