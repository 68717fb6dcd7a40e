//! `application/x-www-form-urlencoded` request bodies.

/// Ordered form parameters.
///
/// A repeated name keeps its first position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormBody {
    params: Vec<(String, String)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.params.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((name.to_string(), value)),
        }
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Percent-encode the parameters in order.
    pub fn encode(&self) -> String {
        // Serializing a sequence of string pairs cannot fail
        serde_urlencoded::to_string(&self.params).unwrap_or_default()
    }
}
