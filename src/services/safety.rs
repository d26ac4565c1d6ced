/// Emergency symptom phrases. Matching is a plain lowercase substring scan
/// with no word-boundary logic; false positives are acceptable, missed
/// emergencies are not.
pub const RED_FLAGS: &[&str] = &[
    "difficulty breathing",
    "shortness of breath",
    "chest pain",
    "fainting",
    "unconscious",
    "loss of consciousness",
    "seizure",
    "severe bleeding",
    "collapse",
    "cardiac",
];

pub const EMERGENCY_REPLY: &str = "This may be an emergency. Please call emergency services (911) or go to the nearest hospital immediately.";

#[derive(Debug, Clone)]
pub struct SafetyGate {
    lexicon: Vec<String>,
}

impl SafetyGate {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lexicon: phrases
                .into_iter()
                .map(|p| p.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// True if the message contains any red-flag phrase, case-insensitive,
    /// at any position.
    pub fn is_emergency(&self, message: &str) -> bool {
        let message = message.to_lowercase();
        self.lexicon
            .iter()
            .any(|flag| message.contains(flag.as_str()))
    }
}

impl Default for SafetyGate {
    fn default() -> Self {
        Self::new(RED_FLAGS.iter().copied())
    }
}
