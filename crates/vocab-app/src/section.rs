use std::fmt::Write;

use vocab_config::settings::Settings;
use vocab_core::{AudioCandidate, Generation, GenerationCounter, VocabularyEntry};

pub const TITLE: &str = "Vocab Beyond";
pub const LOADING: &str = "Loading...";
pub const NO_VOCAB: &str = "No vocab available.";
pub const DICTIONARY_ERROR: &str = "Error contacting WWWJDIC server";

const DICTIONARY_CODES_URL: &str = "http://nihongo.monash.edu/dictionarycodes.html";
const FORVO_ATTRIBUTION: &str = "Pronunciations by Forvo (https://forvo.com/)";
const LEGEND_ENTRIES: [&str; 4] = [
    "ik (IRREGULAR KANA USAGE)",
    "iK (IRREGULAR KANJI USAGE)",
    "ok (OUTDATED KANA USAGE)",
    "oK (OUTDATED KANJI)",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SectionBody {
    #[default]
    Empty,
    Loading,
    Message(&'static str),
    Vocab(Vec<VocabSlot>),
}

/// One entry plus the audio panel that belongs to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabSlot {
    pub entry: VocabularyEntry,
    pub audio: Vec<AudioCandidate>,
}

/// The insertion point a lookup cycle writes into.
///
/// The section hands out generation tokens itself. Every write carries the
/// token of the cycle that produced it and is ignored unless that cycle
/// still owns the section.
#[derive(Debug, Default)]
pub struct Section {
    generations: GenerationCounter,
    kanji: Option<String>,
    body: SectionBody,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand the section to a new cycle, clearing whatever was shown
    pub fn begin(&mut self, kanji: &str) -> Generation {
        self.kanji = Some(kanji.to_string());
        self.body = SectionBody::Loading;
        self.generations.advance()
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.generations.is_current(generation)
    }

    pub fn kanji(&self) -> Option<&str> {
        self.kanji.as_deref()
    }

    pub fn body(&self) -> &SectionBody {
        &self.body
    }

    pub fn show_message(&mut self, generation: Generation, message: &'static str) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.body = SectionBody::Message(message);
        true
    }

    pub fn show_entries(&mut self, generation: Generation, entries: Vec<VocabularyEntry>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.body = SectionBody::Vocab(
            entries
                .into_iter()
                .map(|entry| VocabSlot {
                    entry,
                    audio: Vec::new(),
                })
                .collect(),
        );
        true
    }

    /// Fill the audio panel of entry `index`
    pub fn attach_audio(
        &mut self,
        generation: Generation,
        index: usize,
        audio: Vec<AudioCandidate>,
    ) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        match &mut self.body {
            SectionBody::Vocab(slots) => match slots.get_mut(index) {
                Some(slot) => {
                    slot.audio = audio;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    pub fn render(&self, settings: &Settings) -> String {
        let banner = format!("== {} ==\n", self.kanji().unwrap_or_default());
        let section = self.render_section(settings);

        if settings.show_vocab_beyond_at_top {
            format!("{section}\n{banner}")
        } else {
            format!("{banner}\n{section}")
        }
    }

    fn render_section(&self, settings: &Settings) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{TITLE}");
        render_legend(&mut out, settings);
        out.push('\n');

        match &self.body {
            SectionBody::Empty => {}
            SectionBody::Loading => {
                let _ = writeln!(out, "{LOADING}");
            }
            SectionBody::Message(message) => {
                let _ = writeln!(out, "{message}");
            }
            SectionBody::Vocab(slots) if slots.is_empty() => {
                let _ = writeln!(out, "{NO_VOCAB}");
            }
            SectionBody::Vocab(slots) => {
                for slot in slots {
                    render_slot(&mut out, slot, settings);
                    out.push('\n');
                }
                if settings.audio_enabled() {
                    let _ = writeln!(out, "{FORVO_ATTRIBUTION}");
                }
            }
        }

        out
    }
}

fn render_legend(out: &mut String, settings: &Settings) {
    let _ = writeln!(out, "Legend (more): {DICTIONARY_CODES_URL}");
    if settings.only_show_link_in_legend {
        return;
    }
    for entry in LEGEND_ENTRIES {
        let _ = writeln!(out, "  {entry}");
    }
}

fn render_slot(out: &mut String, slot: &VocabSlot, settings: &Settings) {
    let entry = &slot.entry;
    let _ = writeln!(out, "{}", entry.japanese());

    let parts_of_speech = entry.parts_of_speech_label();
    if !parts_of_speech.is_empty() {
        let _ = writeln!(out, "{parts_of_speech}");
    }

    for definition in entry.definitions() {
        let _ = writeln!(out, "{definition}");
    }

    for candidate in &slot.audio {
        if settings.show_forvo_usernames {
            let _ = writeln!(out, "  ♪ {} ({})", candidate.source_url, candidate.contributor);
        } else {
            let _ = writeln!(out, "  ♪ {}", candidate.source_url);
        }
    }
}
