//! Speech input capability
//!
//! Voice search is injected through [`SpeechInput`] so the core never
//! depends on a particular recognizer. The bundled implementations read
//! transcripts from a line-oriented source or replay a fixed script.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::Result;
use crate::language::Language;

/// A recognized utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub text: String,
    pub language: Language,
}

/// Source of recognized speech
pub trait SpeechInput {
    /// Next transcript, or `None` once the source is exhausted
    fn listen(&mut self) -> Result<Option<Transcript>>;
}

/// Treats each non-blank line of a reader as one utterance
pub struct LineSpeechInput<R> {
    reader: R,
    language: Language,
}

impl<R: BufRead> LineSpeechInput<R> {
    pub fn new(reader: R, language: Language) -> Self {
        Self { reader, language }
    }
}

impl<R: BufRead> SpeechInput for LineSpeechInput<R> {
    fn listen(&mut self) -> Result<Option<Transcript>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let text = line.trim();
            if !text.is_empty() {
                return Ok(Some(Transcript {
                    text: text.to_string(),
                    language: self.language,
                }));
            }
        }
    }
}

/// Replays a fixed list of transcripts
#[derive(Debug, Clone, Default)]
pub struct ScriptedSpeechInput {
    queue: VecDeque<Transcript>,
}

impl ScriptedSpeechInput {
    pub fn new(transcripts: impl IntoIterator<Item = Transcript>) -> Self {
        Self {
            queue: transcripts.into_iter().collect(),
        }
    }
}

impl SpeechInput for ScriptedSpeechInput {
    fn listen(&mut self) -> Result<Option<Transcript>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_line_input_skips_blank_lines() {
        let mut input = LineSpeechInput::new(Cursor::new("\n  \n credit guarantee \nexport\n"), Language::En);

        let first = input.listen().unwrap().unwrap();
        assert_eq!(first.text, "credit guarantee");
        assert_eq!(first.language, Language::En);

        assert_eq!(input.listen().unwrap().unwrap().text, "export");
        assert_eq!(input.listen().unwrap(), None);
    }

    #[test]
    fn test_scripted_input_replays_in_order() {
        let mut input = ScriptedSpeechInput::new(vec![
            Transcript {
                text: "PMFME".to_string(),
                language: Language::En,
            },
            Transcript {
                text: "ఎగుమతి".to_string(),
                language: Language::Te,
            },
        ]);

        assert_eq!(input.listen().unwrap().unwrap().text, "PMFME");
        assert_eq!(input.listen().unwrap().unwrap().language, Language::Te);
        assert!(input.listen().unwrap().is_none());
    }
}
