/// File content case-folded to lowercase; the only input form the counter accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NormalizedText {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}
