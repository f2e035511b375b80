//! The greeting value object.

use serde::Serialize;

/// A greeting produced for a single request.
///
/// `Greeting` is a value object: it has no identity beyond its content, is
/// immutable once constructed, and two greetings with the same message are
/// equal. It serializes to a JSON object with exactly one key, `message` —
/// that shape is the response-body contract shared by every adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    message: String,
}

impl Greeting {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the greeting, yielding the message it carries.
    pub fn into_message(self) -> String {
        self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greetings_with_equal_messages_are_equal() {
        assert_eq!(Greeting::new("hi"), Greeting::new("hi"));
        assert_ne!(Greeting::new("hi"), Greeting::new("bye"));
    }

    #[test]
    fn serializes_to_a_single_message_key() {
        let value = serde_json::to_value(Greeting::new("hi")).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 1);
        assert_eq!(object["message"], "hi");
    }

    #[test]
    fn into_message_returns_the_constructed_string() {
        assert_eq!(Greeting::new("hello").into_message(), "hello");
    }
}
