use serde::Deserialize;

/// Wire form of a variable received from an untrusted source.
///
/// There is no `internal` field: serde skips unknown keys, so an
/// `"internal": true` sent by a remote peer is dropped before a [`crate::Variable`]
/// is ever built. Converting into `Variable` always yields `internal == false`.
#[derive(Debug, Deserialize)]
pub struct UntrustedVariable {
    pub(crate) key: String,
    #[serde(default)]
    pub(crate) value: String,
    #[serde(default)]
    pub(crate) public: bool,
    #[serde(default)]
    pub(crate) file: bool,
}
