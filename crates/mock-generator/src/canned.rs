//! Canned generator implementation - answers every question the same way.

use chat_core::{async_trait, GenerationError, Generator, MediaAttachments, Reply};

const SAMPLE_EXPLANATION: &str = "The Pythagorean theorem states that in a right-angled triangle, the square of the hypotenuse (c) is equal to the sum of the squares of the other two sides (a and b). Formula: a² + b² = c².";
const SAMPLE_AUDIO: &str = "https://www2.cs.uic.edu/~i101/SoundFiles/BabyElephantWalk60.wav";
const SAMPLE_VISUALS: [&str; 3] = [
    "https://media.giphy.com/media/3o7btPCcdNniyf0ArS/giphy.gif",
    "https://media.giphy.com/media/l0HlJDaeqNXVcOBuk/giphy.gif",
    "https://media.giphy.com/media/dh5pCjG8PUCjk5uWjM/giphy.gif",
];

/// A generator that returns a fixed reply regardless of the question.
///
/// The default reply is a short Pythagorean theorem lesson with narration
/// audio and three GIF visuals, which is enough to exercise every media
/// renderer without a backend.
#[derive(Debug, Clone)]
pub struct CannedGenerator {
    reply: Reply,
}

impl CannedGenerator {
    /// Create a generator that always answers with `reply`.
    pub fn new(reply: Reply) -> Self {
        Self { reply }
    }

    /// Answer with text only.
    pub fn text(explanation: impl Into<String>) -> Self {
        Self::new(Reply::new(explanation, MediaAttachments::none()))
    }
}

impl Default for CannedGenerator {
    fn default() -> Self {
        Self::new(Reply::new(
            SAMPLE_EXPLANATION,
            MediaAttachments::none()
                .with_audio(SAMPLE_AUDIO)
                .with_images(SAMPLE_VISUALS),
        ))
    }
}

#[async_trait]
impl Generator for CannedGenerator {
    async fn generate(&self, _question: &str) -> Result<Reply, GenerationError> {
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "CannedGenerator"
    }
}
