/// Structures describing the JSON body the `/emotionDetector`
/// endpoint sends back.  The front end only consumes this contract;
/// producing it is the analysis service's business.
use serde::{Deserialize, Serialize};

/// The five emotion categories the service scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    /// Every category, in the order the service reports them.
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    /// The key this emotion has in the `scores` mapping.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

/// The per-emotion scores, each a fraction in `[0,1]`.  When the
/// service could not analyse the text it sends `null` for every
/// field, so each score is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct EmotionScores {
    #[serde(default)]
    pub anger: Option<f64>,
    #[serde(default)]
    pub disgust: Option<f64>,
    #[serde(default)]
    pub fear: Option<f64>,
    #[serde(default)]
    pub joy: Option<f64>,
    #[serde(default)]
    pub sadness: Option<f64>,
}

impl EmotionScores {
    pub fn get(&self, emotion: Emotion) -> Option<f64> {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    /// The highest-scoring emotion.  `None` when no score is
    /// present.  Ties go to the category reported first.
    pub fn dominant(&self) -> Option<Emotion> {
        let mut best: Option<(Emotion, f64)> = None;
        for emotion in Emotion::ALL {
            if let Some(score) = self.get(emotion) {
                match best {
                    Some((_, best_score)) if best_score >= score => (),
                    _ => best = Some((emotion, score)),
                }
            }
        }
        best.map(|(emotion, _)| emotion)
    }
}

/// One analysis result as sent over the wire.  `status` is the
/// application-level code embedded in the body: `400` flags unusable
/// input even when the HTTP exchange itself succeeded.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisReport {
    pub status: u16,
    pub message: String,
    #[serde(default)]
    pub scores: EmotionScores,
    #[serde(default)]
    pub dominant_emotion: Option<String>,
}

impl AnalysisReport {
    /// `true` when the body carries the service's invalid-text code.
    pub fn is_rejected(&self) -> bool {
        self.status == 400
    }
}
