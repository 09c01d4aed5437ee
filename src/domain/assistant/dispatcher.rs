//! Response Dispatcher - ordered sink for outbound bot messages.

/// Collects messages in emission order for one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseDispatcher {
    messages: Vec<String>,
}

impl ResponseDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one message after every message emitted so far.
    pub fn utter(&mut self, text: impl Into<String>) {
        self.messages.push(text.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utter_preserves_emission_order() {
        let mut dispatcher = ResponseDispatcher::new();
        dispatcher.utter("first");
        dispatcher.utter(String::from("second"));

        assert_eq!(dispatcher.len(), 2);
        assert_eq!(dispatcher.into_messages(), vec!["first", "second"]);
    }
}
