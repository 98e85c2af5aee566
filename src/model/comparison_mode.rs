use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashType {
    MD5,
    SHA3,
    SHA256,
    BLAKE2B,
    BLAKE2S,
    BLAKE3,
}

/// How two files present on both sides are judged equal.
///
/// Lengths are compared first in every mode; timestamps are never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum ComparisonMode {
    // Byte-for-byte
    #[default]
    Content,
    // Digest of each side
    Hash(HashType),
}

impl FromStr for ComparisonMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mode = match value.trim().to_ascii_lowercase().as_str() {
            "content" | "bytes" => Self::Content,
            "md5" => Self::Hash(HashType::MD5),
            "sha3" => Self::Hash(HashType::SHA3),
            "sha256" => Self::Hash(HashType::SHA256),
            "blake2b" => Self::Hash(HashType::BLAKE2B),
            "blake2s" => Self::Hash(HashType::BLAKE2S),
            "blake3" => Self::Hash(HashType::BLAKE3),
            other => {
                return Err(format!(
                    "unknown comparison mode '{other}' (expected content, md5, sha3, sha256, blake2b, blake2s or blake3)"
                ));
            }
        };
        Ok(mode)
    }
}

impl TryFrom<String> for ComparisonMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Content => "content",
            Self::Hash(HashType::MD5) => "md5",
            Self::Hash(HashType::SHA3) => "sha3",
            Self::Hash(HashType::SHA256) => "sha256",
            Self::Hash(HashType::BLAKE2B) => "blake2b",
            Self::Hash(HashType::BLAKE2S) => "blake2s",
            Self::Hash(HashType::BLAKE3) => "blake3",
        };
        f.write_str(name)
    }
}
