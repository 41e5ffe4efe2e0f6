use std::fmt;

/// An opaque credential issued by a remote origin.
///
/// The bytes are never interpreted, only stored and handed back.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClientToken(Vec<u8>);

impl ClientToken {
    pub fn new(data: Vec<u8>) -> ClientToken {
        ClientToken(data)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Standard, padded base64 of the token bytes.
    pub fn to_base64(&self) -> String {
        base64::encode(&self.0)
    }
}

impl From<Vec<u8>> for ClientToken {
    fn from(data: Vec<u8>) -> Self {
        ClientToken(data)
    }
}

impl From<&[u8]> for ClientToken {
    fn from(data: &[u8]) -> Self {
        ClientToken(data.to_vec())
    }
}

impl AsRef<[u8]> for ClientToken {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ClientToken {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(&self.to_base64())
    }
}
